//! Icons
//!
//! The layout engine asks for a fixed set of semantic icons (chevrons, close
//! button, pin state of the vertical nav, ...). This module holds that
//! mapping plus the [`IconRenderer`] trait that abstracts the icon library
//! the hosting frontend uses.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{ConfigurationError, Result};

/// Icon properties passed to the icon component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconDescriptor {
    /// Icon identifier, e.g. `mdi-close`
    pub icon: String,
}

impl IconDescriptor {
    pub fn new(icon: impl Into<String>) -> Self {
        Self { icon: icon.into() }
    }
}

/// Semantic role of an icon in the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IconRole {
    ChevronDown,
    ChevronRight,
    Close,
    VerticalNavPinned,
    VerticalNavUnPinned,
    SectionTitlePlaceholder,
}

impl IconRole {
    /// Every role the layout engine expects
    pub const ALL: [IconRole; 6] = [
        IconRole::ChevronDown,
        IconRole::ChevronRight,
        IconRole::Close,
        IconRole::VerticalNavPinned,
        IconRole::VerticalNavUnPinned,
        IconRole::SectionTitlePlaceholder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconRole::ChevronDown => "chevronDown",
            IconRole::ChevronRight => "chevronRight",
            IconRole::Close => "close",
            IconRole::VerticalNavPinned => "verticalNavPinned",
            IconRole::VerticalNavUnPinned => "verticalNavUnPinned",
            IconRole::SectionTitlePlaceholder => "sectionTitlePlaceholder",
        }
    }

    /// Material Design icon used for this role by default
    pub fn default_icon(&self) -> &'static str {
        match self {
            IconRole::ChevronDown => "mdi-chevron-down",
            IconRole::ChevronRight => "mdi-chevron-right",
            IconRole::Close => "mdi-close",
            IconRole::VerticalNavPinned => "mdi-radiobox-marked",
            IconRole::VerticalNavUnPinned => "mdi-radiobox-blank",
            IconRole::SectionTitlePlaceholder => "mdi-minus",
        }
    }
}

impl fmt::Display for IconRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IconRole {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self> {
        IconRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ConfigurationError::invalid("icons", s))
    }
}

/// Mapping from icon role to icon descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IconSet {
    icons: BTreeMap<IconRole, IconDescriptor>,
}

impl IconSet {
    /// Empty set; fails [`IconSet::validate`] until every role is filled
    pub fn new() -> Self {
        Self::default()
    }

    /// Material Design Icons for every role
    pub fn mdi() -> Self {
        IconRole::ALL
            .into_iter()
            .map(|role| (role, IconDescriptor::new(role.default_icon())))
            .collect()
    }

    /// Builder method setting the icon for one role
    pub fn with(mut self, role: IconRole, icon: impl Into<String>) -> Self {
        self.set(role, icon);
        self
    }

    pub fn set(&mut self, role: IconRole, icon: impl Into<String>) {
        self.icons.insert(role, IconDescriptor::new(icon));
    }

    pub fn get(&self, role: IconRole) -> Option<&IconDescriptor> {
        self.icons.get(&role)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IconRole, &IconDescriptor)> {
        self.icons.iter().map(|(role, desc)| (*role, desc))
    }

    /// Check that every role is present with a non-empty identifier
    pub fn validate(&self) -> Result<()> {
        for role in IconRole::ALL {
            match self.icons.get(&role) {
                None => return Err(ConfigurationError::MissingIcon(role.to_string())),
                Some(desc) if desc.icon.trim().is_empty() => {
                    return Err(ConfigurationError::EmptyIcon(role.to_string()))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

impl FromIterator<(IconRole, IconDescriptor)> for IconSet {
    fn from_iter<I: IntoIterator<Item = (IconRole, IconDescriptor)>>(iter: I) -> Self {
        Self {
            icons: iter.into_iter().collect(),
        }
    }
}

/// Capability for rendering an icon by identifier
///
/// Implemented by whatever icon subsystem the frontend provides. The
/// configuration only stores a reference to it.
pub trait IconRenderer: Send + Sync {
    /// Stable name of the renderer, e.g. the component name `VIcon`
    fn name(&self) -> &str;

    /// Render the icon with the given identifier
    fn render(&self, icon: &str) -> String;
}

/// Vuetify `VIcon` markup renderer
#[derive(Debug, Default, Clone)]
pub struct VIconRenderer;

impl IconRenderer for VIconRenderer {
    fn name(&self) -> &str {
        "VIcon"
    }

    fn render(&self, icon: &str) -> String {
        format!(r#"<i class="v-icon notranslate mdi {icon}" aria-hidden="true"></i>"#)
    }
}

/// Renderer backed by a closure
pub struct FnRenderer<F> {
    name: String,
    render: F,
}

impl<F> FnRenderer<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    pub fn new(name: impl Into<String>, render: F) -> Self {
        Self {
            name: name.into(),
            render,
        }
    }
}

impl<F> IconRenderer for FnRenderer<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, icon: &str) -> String {
        (self.render)(icon)
    }
}

static VICON_RENDERER: Lazy<IconRendererHandle> =
    Lazy::new(|| IconRendererHandle(Arc::new(VIconRenderer)));

/// Shared reference to an [`IconRenderer`]
///
/// Two handles are equal only when they point at the same renderer
/// instance; clones and [`IconRendererHandle::default`] share one. `Debug`
/// and serialization go by the renderer's name.
#[derive(Clone)]
pub struct IconRendererHandle(Arc<dyn IconRenderer>);

impl IconRendererHandle {
    pub fn new<R: IconRenderer + 'static>(renderer: R) -> Self {
        Self(Arc::new(renderer))
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn render(&self, icon: &str) -> String {
        self.0.render(icon)
    }
}

impl Default for IconRendererHandle {
    /// The process-wide `VIcon` renderer
    fn default() -> Self {
        VICON_RENDERER.clone()
    }
}

impl From<Arc<dyn IconRenderer>> for IconRendererHandle {
    fn from(renderer: Arc<dyn IconRenderer>) -> Self {
        Self(renderer)
    }
}

impl PartialEq for IconRendererHandle {
    fn eq(&self, other: &Self) -> bool {
        // Data pointers only; vtable addresses are not stable
        std::ptr::eq(
            Arc::as_ptr(&self.0) as *const (),
            Arc::as_ptr(&other.0) as *const (),
        )
    }
}

impl Eq for IconRendererHandle {}

impl fmt::Debug for IconRendererHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IconRendererHandle").field(&self.name()).finish()
    }
}

impl Serialize for IconRendererHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mdi_set_has_every_role() {
        let icons = IconSet::mdi();
        assert_eq!(icons.len(), 6);
        assert!(icons.validate().is_ok());
        assert_eq!(icons.get(IconRole::Close).unwrap().icon, "mdi-close");
        assert_eq!(
            icons.get(IconRole::VerticalNavUnPinned).unwrap().icon,
            "mdi-radiobox-blank"
        );
    }

    #[test]
    fn test_validate_missing_role() {
        let icons = IconSet::new().with(IconRole::Close, "mdi-close");
        assert_eq!(
            icons.validate(),
            Err(ConfigurationError::MissingIcon("chevronDown".to_string()))
        );
    }

    #[test]
    fn test_validate_empty_identifier() {
        let icons = IconSet::mdi().with(IconRole::Close, "  ");
        assert_eq!(
            icons.validate(),
            Err(ConfigurationError::EmptyIcon("close".to_string()))
        );
    }

    #[test]
    fn test_role_names() {
        assert_eq!(
            "verticalNavUnPinned".parse::<IconRole>().unwrap(),
            IconRole::VerticalNavUnPinned
        );
        assert!("search".parse::<IconRole>().is_err());

        let json = serde_json::to_value(IconSet::mdi()).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        for role in IconRole::ALL {
            assert!(keys.iter().any(|k| *k == role.as_str()));
        }
        assert_eq!(json["chevronDown"]["icon"], "mdi-chevron-down");
    }

    #[test]
    fn test_vicon_renderer() {
        let handle = IconRendererHandle::default();
        assert_eq!(handle.name(), "VIcon");
        assert!(handle.render("mdi-close").contains("mdi mdi-close"));
        assert_eq!(serde_json::to_string(&handle).unwrap(), r#""VIcon""#);
    }

    #[test]
    fn test_fn_renderer_and_equality() {
        let svg = IconRendererHandle::new(FnRenderer::new("SvgSprite", |icon: &str| {
            format!("<svg><use href=\"#{icon}\"/></svg>")
        }));
        assert_eq!(svg.render("mdi-minus"), "<svg><use href=\"#mdi-minus\"/></svg>");
        assert_ne!(svg, IconRendererHandle::default());
        assert_eq!(svg, svg.clone());
        assert_eq!(IconRendererHandle::default(), IconRendererHandle::default());
        assert_eq!(format!("{svg:?}"), r#"IconRendererHandle("SvgSprite")"#);
    }

    #[test]
    fn test_same_name_different_renderer_not_equal() {
        let shouting = IconRendererHandle::new(FnRenderer::new("VIcon", |icon: &str| {
            icon.to_uppercase()
        }));
        let default = IconRendererHandle::default();

        assert_eq!(shouting.name(), default.name());
        assert_ne!(shouting, default);
        assert_ne!(
            IconRendererHandle::new(VIconRenderer),
            IconRendererHandle::new(VIconRenderer)
        );
    }

    #[test]
    fn test_descriptor_rejects_unknown_fields() {
        let desc: IconDescriptor = serde_json::from_str(r#"{ "icon": "mdi-x" }"#).unwrap();
        assert_eq!(desc, IconDescriptor::new("mdi-x"));
        let extra = r#"{ "icon": "mdi-x", "size": 4 }"#;
        assert!(serde_json::from_str::<IconDescriptor>(extra).is_err());
    }
}
