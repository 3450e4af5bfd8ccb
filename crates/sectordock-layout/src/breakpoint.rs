#![forbid(unsafe_code)]

//! Wide/narrow viewport classification.
//!
//! [`ViewportBreakpoint`] is derived from the viewport width on demand and
//! never stored. Reconciliation is edge-triggered: it reacts to a
//! [`BreakpointTransition`], not to the breakpoint itself.

use serde::{Deserialize, Serialize};

/// Device class derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportBreakpoint {
    /// Mobile layout: panels start collapsed.
    Narrow,
    /// Desktop layout: panels start open.
    Wide,
}

impl ViewportBreakpoint {
    /// `Wide` when `width >= wide_threshold`, else `Narrow`.
    #[must_use]
    pub const fn classify(width: u32, wide_threshold: u32) -> Self {
        if width >= wide_threshold {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    /// Whether panels should be open after entering this breakpoint.
    #[must_use]
    pub const fn panels_open(self) -> bool {
        matches!(self, Self::Wide)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        }
    }
}

impl std::fmt::Display for ViewportBreakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A crossing between breakpoints caused by one resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointTransition {
    pub from: ViewportBreakpoint,
    pub to: ViewportBreakpoint,
}

impl BreakpointTransition {
    /// Returns `Some` only if the two widths classify differently.
    #[must_use]
    pub const fn detect(old_width: u32, new_width: u32, wide_threshold: u32) -> Option<Self> {
        let from = ViewportBreakpoint::classify(old_width, wide_threshold);
        let to = ViewportBreakpoint::classify(new_width, wide_threshold);
        if from as u8 == to as u8 {
            None
        } else {
            Some(Self { from, to })
        }
    }
}
