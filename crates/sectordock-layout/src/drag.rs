#![forbid(unsafe_code)]

//! Move/resize gesture lifecycle for floating panels.
//!
//! ```text
//! Idle -> Dragging -> Idle
//!          (update*)  (end: snap evaluation | force_cancel: none)
//! ```
//!
//! There is a single gesture slot shared by both panels. The rect captured
//! at [`DragController::begin_drag`] is never re-read from the store, so a
//! viewport resize in the middle of a gesture cannot disturb the delta math.
//! Every call returns a [`DragTransition`]; requests that make no sense in
//! the current state come back as [`DragEffect::Noop`] with a reason.

use sectordock_core::{Edge, Point, Rect, grow_rect, translate_rect};
use serde::{Deserialize, Serialize};

use crate::panel::{PanelId, PanelMode, PanelStore};

/// What a gesture does to the panel rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    /// Translate the panel; snaps on release.
    Move,
    /// Grow from the bottom-right corner; never snaps.
    Resize,
}

/// Snapshot of one in-progress gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragGesture {
    pub panel: PanelId,
    pub kind: DragKind,
    pub pointer_origin: Point,
    /// Floating rect at gesture start.
    pub initial_rect: Rect,
}

impl DragGesture {
    /// Candidate rect for the pointer at `pointer`.
    #[must_use]
    pub fn candidate(&self, pointer: Point, min_size: i32) -> Rect {
        let (dx, dy) = pointer.delta_from(self.pointer_origin);
        match self.kind {
            DragKind::Move => translate_rect(self.initial_rect, dx, dy),
            DragKind::Resize => grow_rect(self.initial_rect, dx, dy, min_size),
        }
    }
}

/// Drag controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", content = "gesture", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragGesture),
}

/// Why a request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragNoopReason {
    GestureAlreadyActive,
    PanelDocked,
    PanelClosed,
    IdleWithoutGesture,
}

/// How a finished move gesture settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "resolution", rename_all = "snake_case")]
pub enum SnapResolution {
    /// Released near the panel's native edge: panel is now docked.
    Docked { edge: Edge },
    /// Released near another edge: floating rect reshaped to the edge.
    Reshaped { edge: Edge },
    /// No snap: panel stays floating where it was released.
    Settled,
}

/// Effect of one controller step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DragEffect {
    Started {
        panel: PanelId,
        kind: DragKind,
        origin: Point,
    },
    Updated {
        panel: PanelId,
        kind: DragKind,
        rect: Rect,
    },
    Ended {
        panel: PanelId,
        kind: DragKind,
        resolution: SnapResolution,
    },
    Canceled {
        panel: PanelId,
        kind: DragKind,
    },
    Noop {
        reason: DragNoopReason,
    },
}

/// One controller step with before/after state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragTransition {
    pub transition_id: u64,
    pub from: DragState,
    pub to: DragState,
    pub effect: DragEffect,
}

/// The single process-wide gesture slot.
///
/// Serialize-only, like [`PanelStore`]: a gesture can only start through
/// [`DragController::begin_drag`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DragController {
    state: DragState,
    transition_counter: u64,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Panel under the active gesture, if any.
    #[must_use]
    pub const fn active_panel(&self) -> Option<PanelId> {
        match self.state {
            DragState::Dragging(gesture) => Some(gesture.panel),
            DragState::Idle => None,
        }
    }

    /// Start a gesture on an open floating panel.
    pub fn begin_drag(
        &mut self,
        store: &PanelStore,
        panel: PanelId,
        kind: DragKind,
        pointer_origin: Point,
    ) -> DragTransition {
        if self.is_active() {
            return self.noop(DragNoopReason::GestureAlreadyActive);
        }
        if let Some(reason) = not_draggable(store, panel) {
            return self.noop(reason);
        }
        let gesture = DragGesture {
            panel,
            kind,
            pointer_origin,
            initial_rect: store.state(panel).floating_rect(),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(panel = %panel, ?kind, x = pointer_origin.x, y = pointer_origin.y, "drag started");
        self.transition(
            DragState::Dragging(gesture),
            DragEffect::Started {
                panel,
                kind,
                origin: pointer_origin,
            },
        )
    }

    /// Recompute the candidate rect from the frozen snapshot and write it
    /// to the store.
    pub fn update_drag(&mut self, store: &mut PanelStore, pointer: Point) -> DragTransition {
        let DragState::Dragging(gesture) = self.state else {
            return self.noop(DragNoopReason::IdleWithoutGesture);
        };
        if let Some(reason) = not_draggable(store, gesture.panel) {
            return self.noop(reason);
        }
        let candidate = gesture.candidate(pointer, store.config().min_size);
        store.set_floating_rect(gesture.panel, candidate);
        self.transition(
            self.state,
            DragEffect::Updated {
                panel: gesture.panel,
                kind: gesture.kind,
                rect: store.state(gesture.panel).floating_rect(),
            },
        )
    }

    /// Finish the gesture, evaluating snap rules once for move gestures.
    ///
    /// Also the path for a pointer that leaves the surface without a
    /// release. Always returns to `Idle`.
    pub fn end_drag(&mut self, store: &mut PanelStore) -> DragTransition {
        let DragState::Dragging(gesture) = self.state else {
            return self.noop(DragNoopReason::IdleWithoutGesture);
        };
        let DragGesture { panel, kind, .. } = gesture;
        if not_draggable(store, panel).is_some() {
            return self.transition(DragState::Idle, DragEffect::Canceled { panel, kind });
        }
        // The viewport may have shrunk since the last update.
        let current = store.state(panel).floating_rect();
        store.set_floating_rect(panel, current);
        let resolution = match kind {
            DragKind::Resize => SnapResolution::Settled,
            DragKind::Move => resolve_snap(store, panel),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(panel = %panel, ?kind, ?resolution, "drag ended");
        self.transition(
            DragState::Idle,
            DragEffect::Ended {
                panel,
                kind,
                resolution,
            },
        )
    }

    /// Drop the active gesture without snap evaluation.
    ///
    /// Used when the dragged panel is closed or re-moded underneath the
    /// gesture. Returns `None` when already idle.
    pub fn force_cancel(&mut self) -> Option<DragTransition> {
        let DragState::Dragging(DragGesture { panel, kind, .. }) = self.state else {
            return None;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(panel = %panel, ?kind, "drag canceled");
        Some(self.transition(DragState::Idle, DragEffect::Canceled { panel, kind }))
    }

    fn noop(&mut self, reason: DragNoopReason) -> DragTransition {
        #[cfg(feature = "tracing")]
        tracing::trace!(?reason, "drag request ignored");
        self.transition(self.state, DragEffect::Noop { reason })
    }

    fn transition(&mut self, to: DragState, effect: DragEffect) -> DragTransition {
        let from = self.state;
        self.state = to;
        self.transition_counter = self.transition_counter.saturating_add(1);
        DragTransition {
            transition_id: self.transition_counter,
            from,
            to,
            effect,
        }
    }
}

fn not_draggable(store: &PanelStore, panel: PanelId) -> Option<DragNoopReason> {
    let state = store.state(panel);
    if !state.is_open() {
        Some(DragNoopReason::PanelClosed)
    } else if !state.is_floating() {
        Some(DragNoopReason::PanelDocked)
    } else {
        None
    }
}

fn resolve_snap(store: &mut PanelStore, panel: PanelId) -> SnapResolution {
    let rect = store.state(panel).floating_rect();
    match store.config().snap_profile().target(rect, store.viewport()) {
        Some(snap) if snap.edge == panel.native_edge() => {
            store.set_mode(panel, PanelMode::Docked);
            SnapResolution::Docked { edge: snap.edge }
        }
        Some(snap) => {
            store.set_floating_rect(panel, snap.docked_rect);
            SnapResolution::Reshaped { edge: snap.edge }
        }
        None => SnapResolution::Settled,
    }
}
