use serde::Serialize;

use super::builder::ThemeConfigBuilder;
use super::layout::LayoutConfig;
use crate::breakpoints::BreakpointTable;
use crate::error::Result;
use crate::icons::{IconDescriptor, IconRendererHandle, IconRole, IconSet};
use crate::logo::LogoMarkup;
use crate::options::{
    AppContentLayoutNav, ContentWidth, FooterType, HorizontalNavType, NavbarType, Skin, ThemeMode,
    Transition,
};

/// Theme and layout configuration handed to the frontend
///
/// Built once at startup by [`ThemeConfigBuilder`] and never mutated. The
/// serialized form is camelCase JSON with the same shape the layout engine
/// reads (`app.contentWidth`, `navbar.type`, `icons.close.icon`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfiguration {
    pub app: AppSettings,
    pub navbar: NavbarSettings,
    pub footer: FooterSettings,
    pub vertical_nav: VerticalNavSettings,
    pub horizontal_nav: HorizontalNavSettings,
    pub icons: IconSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub title: String,
    pub logo: LogoMarkup,
    pub content_width: ContentWidth,
    pub content_layout_nav: AppContentLayoutNav,
    /// Viewport width (px) below which the vertical nav becomes an overlay
    pub overlay_nav_from_breakpoint: u32,
    pub enable_i18n: bool,
    pub theme: ThemeMode,
    pub is_rtl: bool,
    pub skin: Skin,
    pub route_transition: Transition,
    pub icon_renderer: IconRendererHandle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarSettings {
    #[serde(rename = "type")]
    pub kind: NavbarType,
    pub navbar_blur: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterSettings {
    #[serde(rename = "type")]
    pub kind: FooterType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalNavSettings {
    pub is_vertical_nav_collapsed: bool,
    pub default_nav_item_icon_props: IconDescriptor,
    pub is_vertical_nav_semi_dark: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HorizontalNavSettings {
    #[serde(rename = "type")]
    pub kind: HorizontalNavType,
    pub transition: Transition,
}

impl ThemeConfiguration {
    /// Start a builder seeded with the default theme values
    pub fn builder(breakpoints: BreakpointTable) -> ThemeConfigBuilder {
        ThemeConfigBuilder::new(breakpoints)
    }

    /// Render the icon of a role through the configured renderer
    pub fn render_icon(&self, role: IconRole) -> Option<String> {
        self.icons
            .get(role)
            .map(|desc| self.app.icon_renderer.render(&desc.icon))
    }

    /// Subset of the configuration read by the layout engine
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig::from(self)
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the theme configuration with the default values
///
/// `overlay_nav_from_breakpoint` is derived from the `md` entry of
/// `breakpoints`. Fails if that entry is missing.
pub fn build_theme_config(breakpoints: &BreakpointTable) -> Result<ThemeConfiguration> {
    ThemeConfigBuilder::new(breakpoints.clone()).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;
    use crate::icons::{FnRenderer, IconRendererHandle};

    fn md_only(px: u32) -> BreakpointTable {
        BreakpointTable::new().with("md", px)
    }

    #[test]
    fn test_overlay_threshold_from_md() {
        let config = build_theme_config(&md_only(960)).unwrap();
        assert_eq!(config.app.overlay_nav_from_breakpoint, 976);

        let config = build_theme_config(&BreakpointTable::vuetify_v3().with("md", 1000)).unwrap();
        assert_eq!(config.app.overlay_nav_from_breakpoint, 1016);
    }

    #[test]
    fn test_missing_md_fails() {
        let table = BreakpointTable::new().with("sm", 600);
        assert_eq!(
            build_theme_config(&table),
            Err(ConfigurationError::MissingBreakpoint("md".to_string()))
        );
    }

    #[test]
    fn test_defaults() {
        let config = build_theme_config(&BreakpointTable::vuetify_v2()).unwrap();

        assert_eq!(config.app.title, "intranet");
        assert_eq!(config.app.content_width, ContentWidth::Boxed);
        assert_eq!(config.app.content_layout_nav, AppContentLayoutNav::Vertical);
        assert!(config.app.enable_i18n);
        assert_eq!(config.app.theme, ThemeMode::Light);
        assert!(!config.app.is_rtl);
        assert_eq!(config.app.skin, Skin::Default);
        assert_eq!(config.app.route_transition, Transition::Fade);
        assert_eq!(config.app.icon_renderer.name(), "VIcon");

        assert_eq!(config.navbar.kind, NavbarType::Sticky);
        assert!(config.navbar.navbar_blur);
        assert_eq!(config.footer.kind, FooterType::Static);

        assert!(!config.vertical_nav.is_vertical_nav_collapsed);
        assert_eq!(
            config.vertical_nav.default_nav_item_icon_props.icon,
            "mdi-circle-outline"
        );
        assert!(!config.vertical_nav.is_vertical_nav_semi_dark);

        assert_eq!(config.horizontal_nav.kind, HorizontalNavType::Sticky);
        assert_eq!(config.horizontal_nav.transition, Transition::SlideYReverse);
    }

    #[test]
    fn test_icon_roles_complete() {
        let config = build_theme_config(&md_only(960)).unwrap();
        let roles: Vec<IconRole> = config.icons.iter().map(|(role, _)| role).collect();
        assert_eq!(roles, IconRole::ALL.to_vec());
        assert!(config.icons.iter().all(|(_, desc)| !desc.icon.is_empty()));
    }

    #[test]
    fn test_build_is_deterministic() {
        let table = BreakpointTable::vuetify_v2();
        assert_eq!(
            build_theme_config(&table).unwrap(),
            build_theme_config(&table).unwrap()
        );
    }

    #[test]
    fn test_renderer_difference_breaks_equality() {
        let default = build_theme_config(&md_only(960)).unwrap();
        let shouting = ThemeConfiguration::builder(md_only(960))
            .icon_renderer(IconRendererHandle::new(FnRenderer::new("VIcon", |icon: &str| {
                icon.to_uppercase()
            })))
            .build()
            .unwrap();

        assert_eq!(shouting.app.icon_renderer.name(), "VIcon");
        assert_ne!(
            shouting.render_icon(IconRole::Close),
            default.render_icon(IconRole::Close)
        );
        assert_ne!(shouting, default);
        assert_eq!(shouting, shouting.clone());
    }

    #[test]
    fn test_json_shape() {
        let json = build_theme_config(&md_only(960)).unwrap().to_json().unwrap();

        assert_eq!(json["app"]["contentWidth"], "boxed");
        assert_eq!(json["app"]["contentLayoutNav"], "vertical");
        assert_eq!(json["app"]["overlayNavFromBreakpoint"], 976);
        assert_eq!(json["app"]["enableI18n"], true);
        assert_eq!(json["app"]["isRtl"], false);
        assert_eq!(json["app"]["routeTransition"], "fade-transition");
        assert_eq!(json["app"]["iconRenderer"], "VIcon");
        assert_eq!(json["navbar"]["type"], "sticky");
        assert_eq!(json["navbar"]["navbarBlur"], true);
        assert_eq!(json["footer"]["type"], "static");
        assert_eq!(json["verticalNav"]["isVerticalNavCollapsed"], false);
        assert_eq!(
            json["verticalNav"]["defaultNavItemIconProps"]["icon"],
            "mdi-circle-outline"
        );
        assert_eq!(json["horizontalNav"]["transition"], "slide-y-reverse-transition");
        assert_eq!(json["icons"]["sectionTitlePlaceholder"]["icon"], "mdi-minus");
    }

    #[test]
    fn test_render_icon_uses_configured_renderer() {
        let config = build_theme_config(&md_only(960)).unwrap();
        let html = config.render_icon(IconRole::ChevronDown).unwrap();
        assert!(html.contains("mdi-chevron-down"));

        let config = ThemeConfiguration::builder(md_only(960))
            .icon_renderer(IconRendererHandle::new(FnRenderer::new("Plain", |icon: &str| {
                icon.to_uppercase()
            })))
            .build()
            .unwrap();
        assert_eq!(config.render_icon(IconRole::Close).unwrap(), "MDI-CLOSE");
    }
}
