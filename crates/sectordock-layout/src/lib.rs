#![forbid(unsafe_code)]

//! Dockable side-panel state for the sectordock game shell.
//!
//! Two panels (navigation on the left, status on the right) can each be
//! docked to their native edge or float at a user-chosen rect. This crate
//! owns the state and the rules:
//!
//! - [`PanelStore`]: per-panel open/mode/rect reducers with clamped writes.
//! - [`DragController`]: the single move/resize gesture slot and snap-on-release.
//! - [`reconcile_viewport`]: breakpoint open/close and floating refit on resize.
//! - [`PanelConfig`]: tunable sizes, thresholds and the breakpoint.
//!
//! Everything is synchronous and host-driven: the embedding shell pushes
//! pointer and viewport events in and reads geometry back out.

pub mod breakpoint;
pub mod config;
pub mod drag;
pub mod panel;
pub mod reconcile;

pub use sectordock_core::{Edge, EdgeSnap, Point, Rect, SnapProfile, Viewport};

pub use breakpoint::{BreakpointTransition, ViewportBreakpoint};
#[cfg(feature = "config-file")]
pub use config::PanelConfigLoadError;
pub use config::{
    DEFAULT_DOCKED_WIDTH_NARROW, DEFAULT_DOCKED_WIDTH_WIDE, DEFAULT_WIDE_BREAKPOINT, PanelConfig,
    PanelConfigError,
};
pub use drag::{
    DragController, DragEffect, DragGesture, DragKind, DragNoopReason, DragState, DragTransition,
    SnapResolution,
};
pub use panel::{PanelId, PanelInvariantViolation, PanelMode, PanelState, PanelStore};
pub use reconcile::{ReconcileOutcome, ViewportResize, reconcile_viewport};
