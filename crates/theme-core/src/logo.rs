//! Logo markup fragment
//!
//! The logo is raw HTML/SVG supplied by the asset pipeline. It is wrapped in
//! a `div` whose style makes an inline SVG follow the theme's primary color.

use serde::Serialize;

use crate::error::{ConfigurationError, Result};

/// Default logo image tag
pub const DEFAULT_LOGO_HTML: &str = r#"<img src="/logo.png" height="35px">"#;

/// Wrapper style applied to the logo container
pub const DEFAULT_LOGO_STYLE: &str = "line-height:0; color: rgb(var(--v-global-theme-primary))";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoMarkup {
    /// Raw inner HTML of the logo container
    pub inner_html: String,
    /// Inline style of the logo container
    pub style: String,
}

impl LogoMarkup {
    pub fn new(inner_html: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            inner_html: inner_html.into(),
            style: style.into(),
        }
    }

    /// Logo from an asset-loaded fragment with the default container style
    pub fn from_raw(inner_html: impl Into<String>) -> Self {
        Self::new(inner_html, DEFAULT_LOGO_STYLE)
    }

    pub fn validate(&self) -> Result<()> {
        if self.inner_html.trim().is_empty() {
            return Err(ConfigurationError::EmptyLogo);
        }
        Ok(())
    }

    /// Full markup of the logo container
    pub fn render(&self) -> String {
        if self.style.is_empty() {
            format!("<div>{}</div>", self.inner_html)
        } else {
            format!(
                "<div style=\"{}\">{}</div>",
                self.style.replace('"', "&quot;"),
                self.inner_html
            )
        }
    }
}

impl Default for LogoMarkup {
    fn default() -> Self {
        Self::from_raw(DEFAULT_LOGO_HTML)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_render() {
        assert_eq!(
            LogoMarkup::default().render(),
            "<div style=\"line-height:0; color: rgb(var(--v-global-theme-primary))\">\
             <img src=\"/logo.png\" height=\"35px\"></div>"
        );
    }

    #[test]
    fn test_render_without_style() {
        let logo = LogoMarkup::new("<svg/>", "");
        assert_eq!(logo.render(), "<div><svg/></div>");
    }

    #[test]
    fn test_empty_logo_rejected() {
        assert_eq!(
            LogoMarkup::from_raw(" \n").validate(),
            Err(ConfigurationError::EmptyLogo)
        );
        assert!(LogoMarkup::default().validate().is_ok());
    }
}
