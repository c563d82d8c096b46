//! Theme configuration
//!
//! This module defines the configuration structure and how it is built:
//! - `theme_config`: Configuration structure and `build_theme_config`
//! - `builder`: Step-by-step construction with validation
//! - `layout`: Subset consumed by the layout engine
//! - `overrides`: Optional JSON overrides
//! - `defaults`: Default configuration values

pub mod builder;
pub mod defaults;
pub mod layout;
pub mod overrides;
pub mod theme_config;

// Re-export configuration types
pub use builder::ThemeConfigBuilder;
pub use layout::LayoutConfig;
pub use overrides::ThemeOverrides;
pub use theme_config::{
    build_theme_config, AppSettings, FooterSettings, HorizontalNavSettings, NavbarSettings,
    ThemeConfiguration, VerticalNavSettings,
};
