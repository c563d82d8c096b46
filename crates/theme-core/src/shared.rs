//! Read-only sharing of the built configuration
//!
//! The configuration is written once at startup and read everywhere after.
//! [`SharedThemeConfig`] is a cheap clonable handle; [`install_global`]
//! additionally makes one instance reachable process-wide.

use once_cell::sync::OnceCell;
use std::ops::Deref;
use std::sync::Arc;

use crate::config::ThemeConfiguration;
use crate::error::{ConfigurationError, Result};

static GLOBAL: OnceCell<SharedThemeConfig> = OnceCell::new();

/// Shared, immutable theme configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedThemeConfig(Arc<ThemeConfiguration>);

impl SharedThemeConfig {
    pub fn new(config: ThemeConfiguration) -> Self {
        Self(Arc::new(config))
    }
}

impl Deref for SharedThemeConfig {
    type Target = ThemeConfiguration;

    fn deref(&self) -> &ThemeConfiguration {
        &self.0
    }
}

impl From<ThemeConfiguration> for SharedThemeConfig {
    fn from(config: ThemeConfiguration) -> Self {
        Self::new(config)
    }
}

/// Install the process-wide configuration
///
/// Can only succeed once.
pub fn install_global(config: ThemeConfiguration) -> Result<SharedThemeConfig> {
    let shared = SharedThemeConfig::new(config);
    GLOBAL
        .set(shared.clone())
        .map_err(|_| ConfigurationError::AlreadyInitialized)?;

    tracing::info!(
        "Installed theme configuration '{}' ({} nav, {} content)",
        shared.app.title,
        shared.app.content_layout_nav,
        shared.app.content_width
    );
    Ok(shared)
}

/// The process-wide configuration, if installed
pub fn global() -> Option<SharedThemeConfig> {
    GLOBAL.get().cloned()
}
