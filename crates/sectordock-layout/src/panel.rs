#![forbid(unsafe_code)]

//! Panel state store.
//!
//! [`PanelStore`] holds one [`PanelState`] per [`PanelId`] together with the
//! viewport they are laid out in. All mutation goes through reducer-style
//! methods that return whether anything changed.
//!
//! # Invariants
//!
//! 1. `floating_rect` is at least `min_size` wide and tall at all times.
//! 2. An open floating panel keeps at least `min_visible_px` pixels inside
//!    the viewport on both axes.
//! 3. A docked panel is rendered from the viewport and its native side only;
//!    the stored `floating_rect` is memory for the next switch to floating.
//!
//! # Failure Modes
//!
//! None. Illegal requests (for example writing a rect to a docked panel)
//! are ignored and reported as "unchanged".

use sectordock_core::{
    Edge, Rect, Viewport, clamp_rect_to_viewport, fit_rect_to_viewport, grow_rect,
};
use serde::{Deserialize, Serialize};

use crate::breakpoint::ViewportBreakpoint;
use crate::config::PanelConfig;

/// Inset of a fresh floating panel from its native side.
pub const DEFAULT_FLOATING_INSET: i32 = 24;
/// Top offset of a fresh floating panel.
pub const DEFAULT_FLOATING_TOP: i32 = 80;
pub const DEFAULT_FLOATING_WIDTH: i32 = 260;
pub const DEFAULT_FLOATING_HEIGHT: i32 = 480;

/// One of the two side panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    /// Navigation panel, docks to the left edge.
    Left,
    /// Status panel, docks to the right edge.
    Right,
}

impl PanelId {
    pub const ALL: [PanelId; 2] = [PanelId::Left, PanelId::Right];

    /// The only edge this panel can truly dock to.
    #[must_use]
    pub const fn native_edge(self) -> Edge {
        match self {
            Self::Left => Edge::Left,
            Self::Right => Edge::Right,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Docked panels are edge-anchored; floating panels carry their own rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelMode {
    Docked,
    Floating,
}

impl PanelMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Docked => Self::Floating,
            Self::Floating => Self::Docked,
        }
    }
}

/// State of a single panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelState {
    is_open: bool,
    mode: PanelMode,
    floating_rect: Rect,
}

impl PanelState {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub const fn mode(&self) -> PanelMode {
        self.mode
    }

    #[must_use]
    pub const fn is_floating(&self) -> bool {
        matches!(self.mode, PanelMode::Floating)
    }

    /// Floating geometry. While docked this is the remembered placement.
    #[must_use]
    pub const fn floating_rect(&self) -> Rect {
        self.floating_rect
    }
}

/// A broken store invariant, as found by [`PanelStore::invariant_violations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelInvariantViolation {
    BelowMinimumSize { panel: PanelId, rect: Rect },
    OffScreen { panel: PanelId, rect: Rect },
}

/// Owner of both panel states and the viewport they live in.
///
/// Serializes for hosts but is never deserialized: every store is built by
/// [`PanelStore::new`] and mutated through the reducers below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelStore {
    viewport: Viewport,
    config: PanelConfig,
    panels: [PanelState; 2],
}

impl PanelStore {
    /// Both panels start docked; they start open only on a wide viewport.
    #[must_use]
    pub fn new(viewport: Viewport, config: PanelConfig) -> Self {
        let open = config.breakpoint(viewport.width).panels_open();
        let panels = PanelId::ALL.map(|panel| PanelState {
            is_open: open,
            mode: PanelMode::Docked,
            floating_rect: clamp_rect_to_viewport(
                default_floating_rect(panel, viewport, config.min_size),
                viewport,
                config.min_visible_px,
            ),
        });
        Self {
            viewport,
            config,
            panels,
        }
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub const fn config(&self) -> &PanelConfig {
        &self.config
    }

    #[must_use]
    pub const fn breakpoint(&self) -> ViewportBreakpoint {
        self.config.breakpoint(self.viewport.width)
    }

    #[must_use]
    pub const fn state(&self, panel: PanelId) -> &PanelState {
        &self.panels[panel.index()]
    }

    fn state_mut(&mut self, panel: PanelId) -> &mut PanelState {
        &mut self.panels[panel.index()]
    }

    /// Show or hide a panel. Geometry memory is kept across close/open.
    pub fn set_open(&mut self, panel: PanelId, open: bool) -> bool {
        let viewport = self.viewport;
        let min_visible = self.config.min_visible_px;
        let state = self.state_mut(panel);
        if state.is_open == open {
            return false;
        }
        state.is_open = open;
        if open && state.is_floating() {
            state.floating_rect = clamp_rect_to_viewport(state.floating_rect, viewport, min_visible);
        }
        true
    }

    pub fn toggle_open(&mut self, panel: PanelId) -> bool {
        let open = self.state(panel).is_open;
        self.set_open(panel, !open)
    }

    /// Switch between docked and floating.
    ///
    /// Going floating re-clamps the remembered rect against the current
    /// viewport; going docked keeps it untouched.
    pub fn set_mode(&mut self, panel: PanelId, mode: PanelMode) -> bool {
        let viewport = self.viewport;
        let min_visible = self.config.min_visible_px;
        let state = self.state_mut(panel);
        if state.mode == mode {
            return false;
        }
        state.mode = mode;
        if mode == PanelMode::Floating {
            state.floating_rect = clamp_rect_to_viewport(state.floating_rect, viewport, min_visible);
        }
        true
    }

    pub fn toggle_mode(&mut self, panel: PanelId) -> bool {
        let mode = self.state(panel).mode.toggled();
        self.set_mode(panel, mode)
    }

    /// Store a new floating rect. Ignored while the panel is docked.
    ///
    /// The rect is floored to `min_size` and clamped into the viewport
    /// before it is stored.
    pub fn set_floating_rect(&mut self, panel: PanelId, rect: Rect) -> bool {
        let viewport = self.viewport;
        let PanelConfig {
            min_size,
            min_visible_px,
            ..
        } = self.config;
        let state = self.state_mut(panel);
        if !state.is_floating() {
            #[cfg(feature = "tracing")]
            tracing::trace!(panel = %panel, "floating rect write ignored: panel is docked");
            return false;
        }
        let next = clamp_rect_to_viewport(grow_rect(rect, 0, 0, min_size), viewport, min_visible_px);
        if state.floating_rect == next {
            return false;
        }
        state.floating_rect = next;
        true
    }

    /// Anchored geometry of `panel` if it were docked right now.
    #[must_use]
    pub fn docked_rect(&self, panel: PanelId) -> Rect {
        let width = self.config.docked_width(self.breakpoint());
        let height = self.viewport.height_px();
        match panel {
            PanelId::Left => Rect::new(0, 0, width, height),
            PanelId::Right => Rect::new(self.viewport.width_px().saturating_sub(width), 0, width, height),
        }
    }

    /// Geometry to render, or `None` when the panel is closed.
    #[must_use]
    pub fn rendered_rect(&self, panel: PanelId) -> Option<Rect> {
        let state = self.state(panel);
        if !state.is_open {
            return None;
        }
        Some(match state.mode {
            PanelMode::Docked => self.docked_rect(panel),
            PanelMode::Floating => state.floating_rect,
        })
    }

    pub(crate) fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Shrink an open floating panel and move it inside the current viewport.
    pub(crate) fn refit_floating(&mut self, panel: PanelId) -> bool {
        let viewport = self.viewport;
        let PanelConfig {
            min_size,
            min_visible_px,
            ..
        } = self.config;
        let state = self.state_mut(panel);
        if !(state.is_open && state.is_floating()) {
            return false;
        }
        let next = fit_rect_to_viewport(state.floating_rect, viewport, min_size, min_visible_px);
        if next == state.floating_rect {
            return false;
        }
        state.floating_rect = next;
        true
    }

    /// Every invariant currently broken. Empty on a healthy store.
    ///
    /// Visibility is not checked against an empty viewport, where no rect
    /// can be visible.
    #[must_use]
    pub fn invariant_violations(&self) -> Vec<PanelInvariantViolation> {
        let mut violations = Vec::new();
        let viewport_empty = self.viewport.bounds().is_empty();
        for panel in PanelId::ALL {
            let state = self.state(panel);
            let rect = state.floating_rect;
            if rect.width < self.config.min_size || rect.height < self.config.min_size {
                violations.push(PanelInvariantViolation::BelowMinimumSize { panel, rect });
            }
            if state.is_open
                && state.is_floating()
                && !viewport_empty
                && !rect.visible_in(self.viewport, 1)
            {
                violations.push(PanelInvariantViolation::OffScreen { panel, rect });
            }
        }
        violations
    }
}

fn default_floating_rect(panel: PanelId, viewport: Viewport, min_size: i32) -> Rect {
    let width = DEFAULT_FLOATING_WIDTH.max(min_size);
    let height = DEFAULT_FLOATING_HEIGHT.max(min_size);
    let x = match panel {
        PanelId::Left => DEFAULT_FLOATING_INSET,
        PanelId::Right => viewport
            .width_px()
            .saturating_sub(width)
            .saturating_sub(DEFAULT_FLOATING_INSET),
    };
    Rect::new(x, DEFAULT_FLOATING_TOP, width, height)
}
