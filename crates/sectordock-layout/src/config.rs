#![forbid(unsafe_code)]

//! Tunable geometry for the panel manager.
//!
//! Every default matches the built-in panel behavior, so
//! `PanelConfig::default()` is what a host gets without a config file.
//!
//! # Loading
//!
//! ```toml
//! # sectordock.toml
//! snap_threshold = 64
//! wide_breakpoint = 1100
//! ```
//!
//! ```rust,ignore
//! let config = PanelConfig::from_toml_file("sectordock.toml")?;
//! let config = PanelConfig::from_json_str(r#"{"min_size": 240}"#)?;
//! ```
//!
//! Loaded configs are validated before they are returned.

#[cfg(feature = "config-file")]
use std::path::Path;

use sectordock_core::{
    DEFAULT_MIN_PANEL_SIZE, DEFAULT_SNAP_DOCK_WIDTH, DEFAULT_SNAP_STRIP_HEIGHT,
    DEFAULT_SNAP_THRESHOLD, SnapProfile,
};
use serde::{Deserialize, Serialize};

use crate::breakpoint::ViewportBreakpoint;

/// Viewport width at and above which the layout is considered wide.
pub const DEFAULT_WIDE_BREAKPOINT: u32 = 1024;

/// Docked panel width on a wide viewport.
pub const DEFAULT_DOCKED_WIDTH_WIDE: i32 = 220;

/// Docked panel width on a narrow viewport.
pub const DEFAULT_DOCKED_WIDTH_NARROW: i32 = 210;

/// Panel manager configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Floor for floating width and height.
    pub min_size: i32,
    /// Pixels from an edge within which a released move gesture snaps.
    pub snap_threshold: i32,
    /// Width separating narrow from wide viewports.
    pub wide_breakpoint: u32,
    pub docked_width_wide: i32,
    pub docked_width_narrow: i32,
    /// Width of the rect produced by a left/right snap.
    pub snap_dock_width: i32,
    /// Height of the rect produced by a top/bottom snap.
    pub snap_strip_height: i32,
    /// Pixels of a floating panel that must stay inside the viewport.
    pub min_visible_px: i32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_PANEL_SIZE,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            wide_breakpoint: DEFAULT_WIDE_BREAKPOINT,
            docked_width_wide: DEFAULT_DOCKED_WIDTH_WIDE,
            docked_width_narrow: DEFAULT_DOCKED_WIDTH_NARROW,
            snap_dock_width: DEFAULT_SNAP_DOCK_WIDTH,
            snap_strip_height: DEFAULT_SNAP_STRIP_HEIGHT,
            min_visible_px: 1,
        }
    }
}

impl PanelConfig {
    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), PanelConfigError> {
        let positive = [
            ("min_size", self.min_size),
            ("snap_threshold", self.snap_threshold),
            ("docked_width_wide", self.docked_width_wide),
            ("docked_width_narrow", self.docked_width_narrow),
            ("snap_dock_width", self.snap_dock_width),
            ("snap_strip_height", self.snap_strip_height),
            ("min_visible_px", self.min_visible_px),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(PanelConfigError::NonPositive { field, value });
            }
        }
        if self.wide_breakpoint == 0 {
            return Err(PanelConfigError::ZeroBreakpoint);
        }
        if self.min_visible_px > self.min_size {
            return Err(PanelConfigError::MinVisibleExceedsMinSize {
                min_visible_px: self.min_visible_px,
                min_size: self.min_size,
            });
        }
        Ok(())
    }

    /// Classify a viewport width.
    #[must_use]
    pub const fn breakpoint(&self, viewport_width: u32) -> ViewportBreakpoint {
        ViewportBreakpoint::classify(viewport_width, self.wide_breakpoint)
    }

    /// Docked panel width for a breakpoint.
    #[must_use]
    pub const fn docked_width(&self, breakpoint: ViewportBreakpoint) -> i32 {
        match breakpoint {
            ViewportBreakpoint::Wide => self.docked_width_wide,
            ViewportBreakpoint::Narrow => self.docked_width_narrow,
        }
    }

    /// Snap tunables derived from this config.
    #[must_use]
    pub const fn snap_profile(&self) -> SnapProfile {
        SnapProfile {
            threshold: self.snap_threshold,
            dock_width: self.snap_dock_width,
            strip_height: self.snap_strip_height,
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(s: &str) -> Result<Self, PanelConfigLoadError> {
        let config: Self = toml::from_str(s).map_err(PanelConfigLoadError::Toml)?;
        config.validate().map_err(PanelConfigLoadError::Invalid)?;
        Ok(config)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, PanelConfigLoadError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(PanelConfigLoadError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config-file")]
    pub fn from_json_str(s: &str) -> Result<Self, PanelConfigLoadError> {
        let config: Self = serde_json::from_str(s).map_err(PanelConfigLoadError::Json)?;
        config.validate().map_err(PanelConfigLoadError::Invalid)?;
        Ok(config)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PanelConfigLoadError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(PanelConfigLoadError::Io)?;
        Self::from_json_str(&content)
    }
}

/// A config value that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelConfigError {
    NonPositive { field: &'static str, value: i32 },
    ZeroBreakpoint,
    MinVisibleExceedsMinSize { min_visible_px: i32, min_size: i32 },
}

impl std::fmt::Display for PanelConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be > 0 (got {value})")
            }
            Self::ZeroBreakpoint => write!(f, "wide_breakpoint must be > 0"),
            Self::MinVisibleExceedsMinSize {
                min_visible_px,
                min_size,
            } => write!(
                f,
                "min_visible_px ({min_visible_px}) must not exceed min_size ({min_size})"
            ),
        }
    }
}

impl std::error::Error for PanelConfigError {}

/// Errors that can occur when loading a panel configuration.
#[cfg(feature = "config-file")]
#[derive(Debug)]
pub enum PanelConfigLoadError {
    /// File could not be read.
    Io(std::io::Error),
    /// TOML parse error.
    Toml(toml::de::Error),
    /// JSON parse error.
    Json(serde_json::Error),
    /// Parsed but failed validation.
    Invalid(PanelConfigError),
}

#[cfg(feature = "config-file")]
impl std::fmt::Display for PanelConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error reading panel config: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Invalid(e) => write!(f, "invalid panel config: {e}"),
        }
    }
}

#[cfg(feature = "config-file")]
impl std::error::Error for PanelConfigLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Invalid(e) => Some(e),
        }
    }
}
