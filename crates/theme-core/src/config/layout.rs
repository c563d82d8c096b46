//! Layout engine view of the configuration
//!
//! The layout engine only needs part of the theme configuration: navigation
//! and footer behavior, icons and the app chrome. Theme-level settings (color
//! mode, RTL, skin, route transition, semi-dark nav) are left out.

use serde::Serialize;

use super::theme_config::{
    FooterSettings, HorizontalNavSettings, NavbarSettings, ThemeConfiguration,
};
use crate::icons::{IconDescriptor, IconRendererHandle, IconSet};
use crate::logo::LogoMarkup;
use crate::options::{AppContentLayoutNav, ContentWidth};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub app: LayoutAppSettings,
    pub navbar: NavbarSettings,
    pub footer: FooterSettings,
    pub vertical_nav: LayoutVerticalNavSettings,
    pub horizontal_nav: HorizontalNavSettings,
    pub icons: IconSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutAppSettings {
    pub title: String,
    pub logo: LogoMarkup,
    pub content_width: ContentWidth,
    pub content_layout_nav: AppContentLayoutNav,
    pub overlay_nav_from_breakpoint: u32,
    pub i18n: I18nSettings,
    pub icon_renderer: IconRendererHandle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct I18nSettings {
    pub enable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutVerticalNavSettings {
    pub is_vertical_nav_collapsed: bool,
    pub default_nav_item_icon_props: IconDescriptor,
}

impl From<&ThemeConfiguration> for LayoutConfig {
    fn from(config: &ThemeConfiguration) -> Self {
        let app = &config.app;
        Self {
            app: LayoutAppSettings {
                title: app.title.clone(),
                logo: app.logo.clone(),
                content_width: app.content_width,
                content_layout_nav: app.content_layout_nav,
                overlay_nav_from_breakpoint: app.overlay_nav_from_breakpoint,
                i18n: I18nSettings {
                    enable: app.enable_i18n,
                },
                icon_renderer: app.icon_renderer.clone(),
            },
            navbar: config.navbar.clone(),
            footer: config.footer.clone(),
            vertical_nav: LayoutVerticalNavSettings {
                is_vertical_nav_collapsed: config.vertical_nav.is_vertical_nav_collapsed,
                default_nav_item_icon_props: config
                    .vertical_nav
                    .default_nav_item_icon_props
                    .clone(),
            },
            horizontal_nav: config.horizontal_nav.clone(),
            icons: config.icons.clone(),
        }
    }
}
