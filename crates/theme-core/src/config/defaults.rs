use crate::options::{
    AppContentLayoutNav, ContentWidth, FooterType, HorizontalNavType, NavbarType, Skin, ThemeMode,
    Transition,
};

/// Default application title
pub const DEFAULT_TITLE: &str = "intranet";

/// Default content width
pub const DEFAULT_CONTENT_WIDTH: ContentWidth = ContentWidth::Boxed;

/// Default navigation layout
pub const DEFAULT_CONTENT_LAYOUT_NAV: AppContentLayoutNav = AppContentLayoutNav::Vertical;

/// Whether i18n is enabled by default
pub const DEFAULT_ENABLE_I18N: bool = true;

/// Default color theme
pub const DEFAULT_THEME: ThemeMode = ThemeMode::Light;

/// Whether the layout is right-to-left by default
pub const DEFAULT_IS_RTL: bool = false;

/// Default skin
pub const DEFAULT_SKIN: Skin = Skin::Default;

/// Default route transition
pub const DEFAULT_ROUTE_TRANSITION: Transition = Transition::Fade;

/// Default navbar type
pub const DEFAULT_NAVBAR_TYPE: NavbarType = NavbarType::Sticky;

/// Whether the navbar is blurred by default
pub const DEFAULT_NAVBAR_BLUR: bool = true;

/// Default footer type
pub const DEFAULT_FOOTER_TYPE: FooterType = FooterType::Static;

/// Whether the vertical nav starts collapsed
pub const DEFAULT_VERTICAL_NAV_COLLAPSED: bool = false;

/// Icon shown for vertical nav items that don't set one
pub const DEFAULT_NAV_ITEM_ICON: &str = "mdi-circle-outline";

/// Whether the vertical nav uses the semi-dark variant by default
pub const DEFAULT_VERTICAL_NAV_SEMI_DARK: bool = false;

/// Default horizontal nav type
pub const DEFAULT_HORIZONTAL_NAV_TYPE: HorizontalNavType = HorizontalNavType::Sticky;

/// Default transition of horizontal nav popups
pub const DEFAULT_HORIZONTAL_NAV_TRANSITION: Transition = Transition::SlideYReverse;
