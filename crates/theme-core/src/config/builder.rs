use super::defaults;
use super::theme_config::{
    AppSettings, FooterSettings, HorizontalNavSettings, NavbarSettings, ThemeConfiguration,
    VerticalNavSettings,
};
use crate::breakpoints::{overlay_nav_threshold, BreakpointTable};
use crate::error::{ConfigurationError, Result};
use crate::icons::{IconDescriptor, IconRendererHandle, IconSet};
use crate::logo::LogoMarkup;
use crate::options::{AppContentLayoutNav, ContentWidth, Skin, ThemeMode, Transition};

/// Builder for [`ThemeConfiguration`]
///
/// Starts from the default theme. Nothing is checked until [`build`], which
/// either returns the complete configuration or an error.
///
/// [`build`]: ThemeConfigBuilder::build
#[derive(Debug, Clone)]
pub struct ThemeConfigBuilder {
    pub(crate) breakpoints: BreakpointTable,
    pub(crate) title: String,
    pub(crate) logo: LogoMarkup,
    pub(crate) content_width: ContentWidth,
    pub(crate) content_layout_nav: AppContentLayoutNav,
    pub(crate) enable_i18n: bool,
    pub(crate) theme: ThemeMode,
    pub(crate) is_rtl: bool,
    pub(crate) skin: Skin,
    pub(crate) route_transition: Transition,
    pub(crate) icon_renderer: IconRendererHandle,
    pub(crate) navbar: NavbarSettings,
    pub(crate) footer: FooterSettings,
    pub(crate) vertical_nav: VerticalNavSettings,
    pub(crate) horizontal_nav: HorizontalNavSettings,
    pub(crate) icons: IconSet,
}

impl ThemeConfigBuilder {
    pub fn new(breakpoints: BreakpointTable) -> Self {
        Self {
            breakpoints,
            title: defaults::DEFAULT_TITLE.to_string(),
            logo: LogoMarkup::default(),
            content_width: defaults::DEFAULT_CONTENT_WIDTH,
            content_layout_nav: defaults::DEFAULT_CONTENT_LAYOUT_NAV,
            enable_i18n: defaults::DEFAULT_ENABLE_I18N,
            theme: defaults::DEFAULT_THEME,
            is_rtl: defaults::DEFAULT_IS_RTL,
            skin: defaults::DEFAULT_SKIN,
            route_transition: defaults::DEFAULT_ROUTE_TRANSITION,
            icon_renderer: IconRendererHandle::default(),
            navbar: NavbarSettings {
                kind: defaults::DEFAULT_NAVBAR_TYPE,
                navbar_blur: defaults::DEFAULT_NAVBAR_BLUR,
            },
            footer: FooterSettings {
                kind: defaults::DEFAULT_FOOTER_TYPE,
            },
            vertical_nav: VerticalNavSettings {
                is_vertical_nav_collapsed: defaults::DEFAULT_VERTICAL_NAV_COLLAPSED,
                default_nav_item_icon_props: IconDescriptor::new(defaults::DEFAULT_NAV_ITEM_ICON),
                is_vertical_nav_semi_dark: defaults::DEFAULT_VERTICAL_NAV_SEMI_DARK,
            },
            horizontal_nav: HorizontalNavSettings {
                kind: defaults::DEFAULT_HORIZONTAL_NAV_TYPE,
                transition: defaults::DEFAULT_HORIZONTAL_NAV_TRANSITION,
            },
            icons: IconSet::mdi(),
        }
    }

    pub fn breakpoints(mut self, breakpoints: BreakpointTable) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn logo(mut self, logo: LogoMarkup) -> Self {
        self.logo = logo;
        self
    }

    pub fn content_width(mut self, content_width: ContentWidth) -> Self {
        self.content_width = content_width;
        self
    }

    pub fn content_layout_nav(mut self, layout: AppContentLayoutNav) -> Self {
        self.content_layout_nav = layout;
        self
    }

    pub fn enable_i18n(mut self, enable: bool) -> Self {
        self.enable_i18n = enable;
        self
    }

    pub fn theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    pub fn rtl(mut self, is_rtl: bool) -> Self {
        self.is_rtl = is_rtl;
        self
    }

    pub fn skin(mut self, skin: Skin) -> Self {
        self.skin = skin;
        self
    }

    pub fn route_transition(mut self, transition: Transition) -> Self {
        self.route_transition = transition;
        self
    }

    pub fn icon_renderer(mut self, renderer: IconRendererHandle) -> Self {
        self.icon_renderer = renderer;
        self
    }

    pub fn navbar(mut self, navbar: NavbarSettings) -> Self {
        self.navbar = navbar;
        self
    }

    pub fn footer(mut self, footer: FooterSettings) -> Self {
        self.footer = footer;
        self
    }

    pub fn vertical_nav(mut self, vertical_nav: VerticalNavSettings) -> Self {
        self.vertical_nav = vertical_nav;
        self
    }

    pub fn horizontal_nav(mut self, horizontal_nav: HorizontalNavSettings) -> Self {
        self.horizontal_nav = horizontal_nav;
        self
    }

    pub fn icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }

    /// Validate and assemble the configuration
    pub fn build(self) -> Result<ThemeConfiguration> {
        let overlay_nav_from_breakpoint = overlay_nav_threshold(&self.breakpoints)?;

        self.logo.validate()?;
        self.icons.validate()?;
        if self
            .vertical_nav
            .default_nav_item_icon_props
            .icon
            .trim()
            .is_empty()
        {
            return Err(ConfigurationError::EmptyIcon(
                "defaultNavItemIconProps".to_string(),
            ));
        }

        Ok(ThemeConfiguration {
            app: AppSettings {
                title: self.title,
                logo: self.logo,
                content_width: self.content_width,
                content_layout_nav: self.content_layout_nav,
                overlay_nav_from_breakpoint,
                enable_i18n: self.enable_i18n,
                theme: self.theme,
                is_rtl: self.is_rtl,
                skin: self.skin,
                route_transition: self.route_transition,
                icon_renderer: self.icon_renderer,
            },
            navbar: self.navbar,
            footer: self.footer,
            vertical_nav: self.vertical_nav,
            horizontal_nav: self.horizontal_nav,
            icons: self.icons,
        })
    }
}
