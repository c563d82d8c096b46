//! Theme Core Library
//!
//! Typed theme and layout configuration for a web application frontend.
//! This crate builds the configuration the layout engine reads at startup
//! and is independent of any GUI or rendering framework.
//!
//! # Modules
//!
//! - [`config`] - Configuration structure, builder, layout view and overrides
//! - [`breakpoints`] - Responsive breakpoint tables
//! - [`options`] - Enumerated option sets (content width, navbar type, ...)
//! - [`icons`] - Icon roles, icon set and the icon renderer capability
//! - [`logo`] - Logo markup fragment
//! - [`shared`] - Read-only sharing of the built configuration
//! - [`error`] - Error types

pub mod breakpoints;
pub mod config;
pub mod error;
pub mod icons;
pub mod logo;
pub mod options;
pub mod shared;

// Re-export commonly used types
pub use breakpoints::{overlay_nav_threshold, BreakpointTable, SCROLLBAR_WIDTH};
pub use config::{
    build_theme_config, LayoutConfig, ThemeConfigBuilder, ThemeConfiguration, ThemeOverrides,
};
pub use error::{ConfigurationError, Result};
pub use icons::{
    FnRenderer, IconDescriptor, IconRenderer, IconRendererHandle, IconRole, IconSet, VIconRenderer,
};
pub use logo::LogoMarkup;
pub use options::{
    AppContentLayoutNav, ContentWidth, FooterType, HorizontalNavType, NavbarType, Skin, ThemeMode,
    Transition,
};
pub use shared::{global, install_global, SharedThemeConfig};
