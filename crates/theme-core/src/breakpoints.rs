//! Responsive breakpoints
//!
//! A breakpoint table maps a size name (`xs`, `sm`, `md`, ...) to a pixel
//! width. The table is supplied by the responsive-layout utility; this
//! module only stores it and derives the overlay-navigation threshold.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigurationError, Result};

/// Breakpoint the overlay navigation threshold is derived from
pub const OVERLAY_NAV_BREAKPOINT: &str = "md";

/// Extra pixels added to the breakpoint to account for a vertical scrollbar
pub const SCROLLBAR_WIDTH: u32 = 16;

/// Named pixel-width thresholds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakpointTable {
    entries: BTreeMap<String, u32>,
}

impl BreakpointTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Vuetify 2 breakpoints
    pub fn vuetify_v2() -> Self {
        [("xs", 0), ("sm", 600), ("md", 960), ("lg", 1264), ("xl", 1904)]
            .into_iter()
            .collect()
    }

    /// Vuetify 3 breakpoints
    pub fn vuetify_v3() -> Self {
        [
            ("xs", 0),
            ("sm", 600),
            ("md", 960),
            ("lg", 1280),
            ("xl", 1920),
            ("xxl", 2560),
        ]
        .into_iter()
        .collect()
    }

    /// Builder method adding or replacing one entry
    pub fn with(mut self, name: impl Into<String>, px: u32) -> Self {
        self.insert(name, px);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, px: u32) -> Option<u32> {
        self.entries.insert(name.into(), px)
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries.get(name).copied()
    }

    /// Look up a breakpoint that must be present
    pub fn require(&self, name: &str) -> Result<u32> {
        self.get(name)
            .ok_or_else(|| ConfigurationError::MissingBreakpoint(name.to_string()))
    }

    /// Copy every entry of `other` over this table
    pub fn merge(&mut self, other: &BreakpointTable) {
        for (name, px) in &other.entries {
            self.entries.insert(name.clone(), *px);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for BreakpointTable {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Parses `"md=960,lg=1264"`
impl FromStr for BreakpointTable {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self> {
        let mut table = BreakpointTable::new();

        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, px) = entry
                .split_once('=')
                .ok_or_else(|| ConfigurationError::invalid("breakpoints", entry))?;

            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigurationError::invalid("breakpoints", entry));
            }

            let px: u32 = px
                .trim()
                .parse()
                .map_err(|_| ConfigurationError::invalid(format!("breakpoints.{name}"), px))?;

            table.insert(name, px);
        }

        Ok(table)
    }
}

impl fmt::Display for BreakpointTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}={v}")).collect();
        write!(f, "{}", parts.join(","))
    }
}

/// Width from which the vertical navigation is rendered as an overlay
///
/// `md` plus [`SCROLLBAR_WIDTH`].
pub fn overlay_nav_threshold(table: &BreakpointTable) -> Result<u32> {
    let base = table.require(OVERLAY_NAV_BREAKPOINT)?;
    base.checked_add(SCROLLBAR_WIDTH).ok_or_else(|| {
        ConfigurationError::invalid(
            format!("breakpoints.{OVERLAY_NAV_BREAKPOINT}"),
            base.to_string(),
        )
    })
}
