//! JSON theme overrides
//!
//! Deployments can adjust the default theme with a small JSON document
//! instead of rebuilding. Every field is optional; omitted fields keep their
//! default. The document mirrors the serialized configuration:
//!
//! ```json
//! {
//!   "breakpoints": { "md": 1024 },
//!   "app": { "title": "Portal", "contentWidth": "fluid", "skin": "bordered" },
//!   "navbar": { "type": "static" },
//!   "icons": { "close": { "icon": "mdi-close-circle" } }
//! }
//! ```
//!
//! `overlayNavFromBreakpoint` is always derived and cannot be overridden;
//! change `breakpoints.md` instead.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::builder::ThemeConfigBuilder;
use crate::breakpoints::BreakpointTable;
use crate::error::{ConfigurationError, Result};
use crate::icons::{IconDescriptor, IconRole};
use crate::logo::LogoMarkup;

const CONFIG_DIR: &str = "theme-config";
const OVERRIDES_FILENAME: &str = "theme.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ThemeOverrides {
    /// Entries merged over the caller's breakpoint table
    pub breakpoints: Option<BreakpointTable>,
    pub app: AppOverrides,
    pub navbar: NavbarOverrides,
    pub footer: FooterOverrides,
    pub vertical_nav: VerticalNavOverrides,
    pub horizontal_nav: HorizontalNavOverrides,
    /// Icons keyed by role name
    pub icons: BTreeMap<String, IconDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AppOverrides {
    pub title: Option<String>,
    /// Raw logo markup, wrapped with the default container style
    pub logo: Option<String>,
    pub content_width: Option<String>,
    pub content_layout_nav: Option<String>,
    pub enable_i18n: Option<bool>,
    pub theme: Option<String>,
    pub is_rtl: Option<bool>,
    pub skin: Option<String>,
    pub route_transition: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct NavbarOverrides {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub navbar_blur: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterOverrides {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct VerticalNavOverrides {
    pub is_vertical_nav_collapsed: Option<bool>,
    pub default_nav_item_icon_props: Option<IconDescriptor>,
    pub is_vertical_nav_semi_dark: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HorizontalNavOverrides {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub transition: Option<String>,
}

/// Parse an optional option-set value, reporting errors under `field`
fn parse_field<T>(value: &Option<String>, field: &str) -> Result<Option<T>>
where
    T: FromStr<Err = ConfigurationError>,
{
    value
        .as_deref()
        .map(|v| T::from_str(v).map_err(|_| ConfigurationError::invalid(field, v)))
        .transpose()
}

impl ThemeOverrides {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load overrides from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigurationError::IoError(format!("Failed to read {}: {e}", path.display()))
        })?;
        let overrides = Self::from_json_str(&contents)?;

        tracing::info!("Loaded theme overrides from {}", path.display());
        Ok(overrides)
    }

    /// Load overrides if the file exists
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            tracing::debug!("No theme overrides at {}", path.display());
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Default location of the overrides file
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(CONFIG_DIR);
        path.push(OVERRIDES_FILENAME);
        path
    }

    /// Apply every set field to `builder`
    ///
    /// Values are checked before anything is applied, so an invalid document
    /// leaves no partial result behind.
    pub fn apply(&self, mut builder: ThemeConfigBuilder) -> Result<ThemeConfigBuilder> {
        let app = &self.app;
        let content_width = parse_field(&app.content_width, "app.contentWidth")?;
        let content_layout_nav = parse_field(&app.content_layout_nav, "app.contentLayoutNav")?;
        let theme = parse_field(&app.theme, "app.theme")?;
        let skin = parse_field(&app.skin, "app.skin")?;
        let route_transition = parse_field(&app.route_transition, "app.routeTransition")?;
        let navbar_kind = parse_field(&self.navbar.kind, "navbar.type")?;
        let footer_kind = parse_field(&self.footer.kind, "footer.type")?;
        let horizontal_kind = parse_field(&self.horizontal_nav.kind, "horizontalNav.type")?;
        let horizontal_transition =
            parse_field(&self.horizontal_nav.transition, "horizontalNav.transition")?;

        let mut icons = Vec::with_capacity(self.icons.len());
        for (role, desc) in &self.icons {
            let role: IconRole = role
                .parse()
                .map_err(|_| ConfigurationError::invalid("icons", role.as_str()))?;
            icons.push((role, desc.icon.clone()));
        }

        if let Some(breakpoints) = &self.breakpoints {
            builder.breakpoints.merge(breakpoints);
        }

        if let Some(title) = &app.title {
            builder.title = title.clone();
        }
        if let Some(logo) = &app.logo {
            builder.logo = LogoMarkup::from_raw(logo.clone());
        }
        if let Some(v) = content_width {
            builder.content_width = v;
        }
        if let Some(v) = content_layout_nav {
            builder.content_layout_nav = v;
        }
        if let Some(v) = app.enable_i18n {
            builder.enable_i18n = v;
        }
        if let Some(v) = theme {
            builder.theme = v;
        }
        if let Some(v) = app.is_rtl {
            builder.is_rtl = v;
        }
        if let Some(v) = skin {
            builder.skin = v;
        }
        if let Some(v) = route_transition {
            builder.route_transition = v;
        }

        if let Some(v) = navbar_kind {
            builder.navbar.kind = v;
        }
        if let Some(v) = self.navbar.navbar_blur {
            builder.navbar.navbar_blur = v;
        }
        if let Some(v) = footer_kind {
            builder.footer.kind = v;
        }

        let vertical = &self.vertical_nav;
        if let Some(v) = vertical.is_vertical_nav_collapsed {
            builder.vertical_nav.is_vertical_nav_collapsed = v;
        }
        if let Some(v) = &vertical.default_nav_item_icon_props {
            builder.vertical_nav.default_nav_item_icon_props = v.clone();
        }
        if let Some(v) = vertical.is_vertical_nav_semi_dark {
            builder.vertical_nav.is_vertical_nav_semi_dark = v;
        }

        if let Some(v) = horizontal_kind {
            builder.horizontal_nav.kind = v;
        }
        if let Some(v) = horizontal_transition {
            builder.horizontal_nav.transition = v;
        }

        for (role, icon) in icons {
            builder.icons.set(role, icon);
        }

        Ok(builder)
    }
}

impl ThemeConfigBuilder {
    /// Apply a [`ThemeOverrides`] document
    pub fn overrides(self, overrides: &ThemeOverrides) -> Result<Self> {
        overrides.apply(self)
    }
}
