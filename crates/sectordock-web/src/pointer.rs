#![forbid(unsafe_code)]

//! Deterministic pointer-capture adapter for panel move/resize handles.
//!
//! This module bridges browser pointer lifecycle signals into
//! [`sectordock_layout::DragController`] calls while enforcing:
//! - one active pointer at a time,
//! - explicit capture acquire/release commands for JS hosts, and
//! - snap evaluation on every interruption path (blur/visibility/lost-capture),
//!   so a gesture can never be left dangling.

use sectordock_layout::{
    DragController, DragEffect, DragKind, DragNoopReason, DragState, DragTransition, PanelId,
    PanelStore, Point,
};

/// Pointer button reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Adapter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerAdapterConfig {
    /// Button required to begin a gesture.
    pub activation_button: PointerButton,
}

impl Default for PointerAdapterConfig {
    fn default() -> Self {
        Self {
            activation_button: PointerButton::Primary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureState {
    Requested,
    Acquired,
}

impl CaptureState {
    const fn is_acquired(self) -> bool {
        matches!(self, Self::Acquired)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActivePointer {
    pointer_id: u32,
    panel: PanelId,
    button: PointerButton,
    capture_state: CaptureState,
}

impl ActivePointer {
    fn release_command(self) -> Option<CaptureCommand> {
        self.capture_state
            .is_acquired()
            .then_some(CaptureCommand::Release {
                pointer_id: self.pointer_id,
            })
    }
}

/// Host command for DOM `setPointerCapture()` / `releasePointerCapture()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureCommand {
    Acquire { pointer_id: u32 },
    Release { pointer_id: u32 },
}

/// Lifecycle phase recorded for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    PointerLeave,
    Blur,
    VisibilityHidden,
    LostPointerCapture,
    CaptureAcquired,
    ShellCancel,
}

/// Why an incoming signal was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerIgnoredReason {
    InvalidPointerId,
    ButtonNotAllowed,
    ButtonMismatch,
    ActivePointerAlreadyInProgress,
    NoActivePointer,
    PointerMismatch,
    LeaveWhileCaptured,
    ControllerRejected(DragNoopReason),
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerLogOutcome {
    Forwarded,
    CaptureStateUpdated,
    Ignored(PointerIgnoredReason),
}

/// Structured log record for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerLogEntry {
    pub phase: PointerPhase,
    pub sequence: Option<u64>,
    pub pointer_id: Option<u32>,
    pub panel: Option<PanelId>,
    pub position: Option<Point>,
    pub capture_command: Option<CaptureCommand>,
    pub outcome: PointerLogOutcome,
}

/// Result of one pointer lifecycle dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDispatch {
    pub transition: Option<DragTransition>,
    /// Step applied at the release position before a pointer-up ends the
    /// gesture. `None` for every other phase.
    pub release_update: Option<DragTransition>,
    pub capture_command: Option<CaptureCommand>,
    pub log: PointerLogEntry,
}

impl PointerDispatch {
    fn ignored(
        phase: PointerPhase,
        reason: PointerIgnoredReason,
        pointer_id: Option<u32>,
        panel: Option<PanelId>,
        position: Option<Point>,
    ) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(?phase, ?reason, ?pointer_id, "pointer signal ignored");
        Self {
            transition: None,
            release_update: None,
            capture_command: None,
            log: PointerLogEntry {
                phase,
                sequence: None,
                pointer_id,
                panel,
                position,
                capture_command: None,
                outcome: PointerLogOutcome::Ignored(reason),
            },
        }
    }

    /// Whether the signal reached the drag controller.
    #[must_use]
    pub const fn is_forwarded(&self) -> bool {
        matches!(self.log.outcome, PointerLogOutcome::Forwarded)
    }
}

#[derive(Debug, Clone, Copy)]
struct DispatchContext {
    phase: PointerPhase,
    pointer_id: Option<u32>,
    panel: Option<PanelId>,
    position: Option<Point>,
}

/// Pointer-capture adapter that owns the single drag gesture slot.
#[derive(Debug, Clone, Default)]
pub struct PanelPointerAdapter {
    drag: DragController,
    config: PointerAdapterConfig,
    active: Option<ActivePointer>,
    next_sequence: u64,
}

impl PanelPointerAdapter {
    #[must_use]
    pub fn new(config: PointerAdapterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn config(&self) -> PointerAdapterConfig {
        self.config
    }

    #[must_use]
    pub fn active_pointer_id(&self) -> Option<u32> {
        self.active.map(|active| active.pointer_id)
    }

    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Panel under the active gesture.
    #[must_use]
    pub const fn active_panel(&self) -> Option<PanelId> {
        self.drag.active_panel()
    }

    /// Pointer-down on a panel's move or resize handle.
    pub fn pointer_down(
        &mut self,
        store: &PanelStore,
        panel: PanelId,
        kind: DragKind,
        pointer_id: u32,
        button: PointerButton,
        position: Point,
    ) -> PointerDispatch {
        let phase = PointerPhase::PointerDown;
        let ignore = |reason| {
            PointerDispatch::ignored(phase, reason, Some(pointer_id), Some(panel), Some(position))
        };
        if pointer_id == 0 {
            return ignore(PointerIgnoredReason::InvalidPointerId);
        }
        if button != self.config.activation_button {
            return ignore(PointerIgnoredReason::ButtonNotAllowed);
        }
        if self.active.is_some() {
            return ignore(PointerIgnoredReason::ActivePointerAlreadyInProgress);
        }

        let transition = self.drag.begin_drag(store, panel, kind, position);
        if let DragEffect::Noop { reason } = transition.effect {
            return ignore(PointerIgnoredReason::ControllerRejected(reason));
        }
        self.active = Some(ActivePointer {
            pointer_id,
            panel,
            button,
            capture_state: CaptureState::Requested,
        });
        self.forwarded(
            DispatchContext {
                phase,
                pointer_id: Some(pointer_id),
                panel: Some(panel),
                position: Some(position),
            },
            transition,
            Some(CaptureCommand::Acquire { pointer_id }),
        )
    }

    /// Mark browser pointer capture as successfully acquired.
    pub fn capture_acquired(&mut self, pointer_id: u32) -> PointerDispatch {
        let phase = PointerPhase::CaptureAcquired;
        let Some(mut active) = self.active else {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::NoActivePointer,
                Some(pointer_id),
                None,
                None,
            );
        };
        if active.pointer_id != pointer_id {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::PointerMismatch,
                Some(pointer_id),
                Some(active.panel),
                None,
            );
        }
        active.capture_state = CaptureState::Acquired;
        self.active = Some(active);
        PointerDispatch {
            transition: None,
            capture_command: None,
            release_update: None,
            log: PointerLogEntry {
                phase,
                sequence: None,
                pointer_id: Some(pointer_id),
                panel: Some(active.panel),
                position: None,
                capture_command: None,
                outcome: PointerLogOutcome::CaptureStateUpdated,
            },
        }
    }

    /// Pointer-move while a gesture is active.
    pub fn pointer_move(
        &mut self,
        store: &mut PanelStore,
        pointer_id: u32,
        position: Point,
    ) -> PointerDispatch {
        let phase = PointerPhase::PointerMove;
        let active = match self.matching_active(phase, Some(pointer_id), Some(position)) {
            Ok(active) => active,
            Err(ignored) => return ignored,
        };
        let transition = self.drag.update_drag(store, position);
        if let DragEffect::Noop { reason } = transition.effect {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::ControllerRejected(reason),
                Some(pointer_id),
                Some(active.panel),
                Some(position),
            );
        }
        self.forwarded(
            DispatchContext {
                phase,
                pointer_id: Some(pointer_id),
                panel: Some(active.panel),
                position: Some(position),
            },
            transition,
            None,
        )
    }

    /// Pointer-up: apply the release position, then end the gesture.
    pub fn pointer_up(
        &mut self,
        store: &mut PanelStore,
        pointer_id: u32,
        button: PointerButton,
        position: Point,
    ) -> PointerDispatch {
        let phase = PointerPhase::PointerUp;
        let active = match self.matching_active(phase, Some(pointer_id), Some(position)) {
            Ok(active) => active,
            Err(ignored) => return ignored,
        };
        if active.button != button {
            return PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::ButtonMismatch,
                Some(pointer_id),
                Some(active.panel),
                Some(position),
            );
        }
        let update = self.drag.update_drag(store, position);
        let mut dispatch = self.finish(store, phase, active, Some(position), true);
        dispatch.release_update = Some(update);
        dispatch
    }

    /// Browser `pointercancel`.
    pub fn pointer_cancel(&mut self, store: &mut PanelStore, pointer_id: Option<u32>) -> PointerDispatch {
        self.interrupt(store, PointerPhase::PointerCancel, pointer_id, true)
    }

    /// Pointer left the tracked surface.
    ///
    /// Ends the gesture unless capture is held: captured pointers keep
    /// delivering events from outside the surface and finish with
    /// pointer-up or `lostpointercapture`.
    pub fn pointer_leave(&mut self, store: &mut PanelStore, pointer_id: u32) -> PointerDispatch {
        let phase = PointerPhase::PointerLeave;
        let active = match self.matching_active(phase, Some(pointer_id), None) {
            Ok(active) => active,
            Err(ignored) => return ignored,
        };
        if !active.capture_state.is_acquired() {
            self.finish(store, phase, active, None, true)
        } else {
            PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::LeaveWhileCaptured,
                Some(pointer_id),
                Some(active.panel),
                None,
            )
        }
    }

    /// Window lost focus.
    pub fn blur(&mut self, store: &mut PanelStore) -> PointerDispatch {
        self.interrupt(store, PointerPhase::Blur, None, true)
    }

    /// Document became hidden.
    pub fn visibility_hidden(&mut self, store: &mut PanelStore) -> PointerDispatch {
        self.interrupt(store, PointerPhase::VisibilityHidden, None, true)
    }

    /// Browser `lostpointercapture`; capture is already gone, so no release.
    pub fn lost_pointer_capture(&mut self, store: &mut PanelStore, pointer_id: u32) -> PointerDispatch {
        self.interrupt(store, PointerPhase::LostPointerCapture, Some(pointer_id), false)
    }

    /// Drop the gesture without snap evaluation.
    ///
    /// Used by the shell when the dragged panel is closed or re-moded.
    pub fn force_cancel(&mut self) -> Option<PointerDispatch> {
        let active = self.active.take()?;
        let transition = self.drag.force_cancel()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            panel = %active.panel,
            pointer_id = active.pointer_id,
            "shell action interrupted active gesture"
        );
        Some(self.forwarded(
            DispatchContext {
                phase: PointerPhase::ShellCancel,
                pointer_id: Some(active.pointer_id),
                panel: Some(active.panel),
                position: None,
            },
            transition,
            active.release_command(),
        ))
    }

    fn interrupt(
        &mut self,
        store: &mut PanelStore,
        phase: PointerPhase,
        pointer_id: Option<u32>,
        release_capture: bool,
    ) -> PointerDispatch {
        match self.matching_active(phase, pointer_id, None) {
            Ok(active) => self.finish(store, phase, active, None, release_capture),
            Err(ignored) => ignored,
        }
    }

    fn matching_active(
        &self,
        phase: PointerPhase,
        pointer_id: Option<u32>,
        position: Option<Point>,
    ) -> Result<ActivePointer, PointerDispatch> {
        let Some(active) = self.active else {
            return Err(PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::NoActivePointer,
                pointer_id,
                None,
                position,
            ));
        };
        if let Some(id) = pointer_id
            && id != active.pointer_id
        {
            return Err(PointerDispatch::ignored(
                phase,
                PointerIgnoredReason::PointerMismatch,
                Some(id),
                Some(active.panel),
                position,
            ));
        }
        Ok(active)
    }

    fn finish(
        &mut self,
        store: &mut PanelStore,
        phase: PointerPhase,
        active: ActivePointer,
        position: Option<Point>,
        release_capture: bool,
    ) -> PointerDispatch {
        let transition = self.drag.end_drag(store);
        self.active = None;
        let command = if release_capture {
            active.release_command()
        } else {
            None
        };
        self.forwarded(
            DispatchContext {
                phase,
                pointer_id: Some(active.pointer_id),
                panel: Some(active.panel),
                position,
            },
            transition,
            command,
        )
    }

    fn forwarded(
        &mut self,
        context: DispatchContext,
        transition: DragTransition,
        capture_command: Option<CaptureCommand>,
    ) -> PointerDispatch {
        let sequence = self.next_sequence();
        PointerDispatch {
            transition: Some(transition),
            release_update: None,
            capture_command,
            log: PointerLogEntry {
                phase: context.phase,
                sequence: Some(sequence),
                pointer_id: context.pointer_id,
                panel: context.panel,
                position: context.position,
                capture_command,
                outcome: PointerLogOutcome::Forwarded,
            },
        }
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sectordock_layout::{Edge, PanelConfig, PanelMode, Rect, SnapResolution, Viewport};

    fn pos(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn floating_store() -> PanelStore {
        let mut store = PanelStore::new(Viewport::new(1280, 800), PanelConfig::default());
        store.set_mode(PanelId::Left, PanelMode::Floating);
        store.set_floating_rect(PanelId::Left, Rect::new(400, 300, 300, 300));
        store
    }

    fn down(adapter: &mut PanelPointerAdapter, store: &PanelStore, id: u32) -> PointerDispatch {
        adapter.pointer_down(store, PanelId::Left, DragKind::Move, id, PointerButton::Primary, pos(450, 310))
    }

    #[test]
    fn pointer_down_starts_gesture_and_requests_capture() {
        let store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        let dispatch = down(&mut adapter, &store, 7);
        assert_eq!(
            dispatch.capture_command,
            Some(CaptureCommand::Acquire { pointer_id: 7 })
        );
        assert!(dispatch.is_forwarded());
        assert_eq!(adapter.active_pointer_id(), Some(7));
        assert_eq!(adapter.active_panel(), Some(PanelId::Left));
    }

    #[test]
    fn pointer_down_on_docked_panel_is_rejected() {
        let store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        let dispatch = adapter.pointer_down(
            &store,
            PanelId::Right,
            DragKind::Move,
            3,
            PointerButton::Primary,
            pos(1_200, 10),
        );
        assert_eq!(
            dispatch.log.outcome,
            PointerLogOutcome::Ignored(PointerIgnoredReason::ControllerRejected(
                DragNoopReason::PanelDocked
            ))
        );
        assert_eq!(adapter.active_pointer_id(), None);
    }

    #[test]
    fn invalid_pointer_and_button_are_ignored() {
        let store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        assert_eq!(
            down(&mut adapter, &store, 0).log.outcome,
            PointerLogOutcome::Ignored(PointerIgnoredReason::InvalidPointerId)
        );
        let dispatch = adapter.pointer_down(
            &store,
            PanelId::Left,
            DragKind::Move,
            4,
            PointerButton::Secondary,
            pos(450, 310),
        );
        assert_eq!(
            dispatch.log.outcome,
            PointerLogOutcome::Ignored(PointerIgnoredReason::ButtonNotAllowed)
        );
    }

    #[test]
    fn second_pointer_is_rejected() {
        let store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        down(&mut adapter, &store, 1);
        assert_eq!(
            down(&mut adapter, &store, 2).log.outcome,
            PointerLogOutcome::Ignored(PointerIgnoredReason::ActivePointerAlreadyInProgress)
        );
    }

    #[test]
    fn move_with_other_pointer_is_ignored_without_mutation() {
        let mut store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        down(&mut adapter, &store, 1);
        let before = store.clone();
        let dispatch = adapter.pointer_move(&mut store, 9, pos(0, 0));
        assert_eq!(
            dispatch.log.outcome,
            PointerLogOutcome::Ignored(PointerIgnoredReason::PointerMismatch)
        );
        assert_eq!(store, before);
    }

    #[test]
    fn pointer_up_applies_release_position_and_snaps() {
        let mut store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        down(&mut adapter, &store, 1);
        adapter.capture_acquired(1);
        let dispatch = adapter.pointer_up(&mut store, 1, PointerButton::Primary, pos(70, 310));
        assert_eq!(
            dispatch.capture_command,
            Some(CaptureCommand::Release { pointer_id: 1 })
        );
        let update = dispatch.release_update.expect("release update");
        assert_eq!(
            update.effect,
            DragEffect::Updated {
                panel: PanelId::Left,
                kind: DragKind::Move,
                rect: Rect::new(20, 300, 300, 300),
            }
        );
        let transition = dispatch.transition.expect("end transition");
        assert!(matches!(
            transition.effect,
            DragEffect::Ended {
                resolution: SnapResolution::Docked { edge: Edge::Left },
                ..
            }
        ));
        assert_eq!(store.state(PanelId::Left).mode(), PanelMode::Docked);
        assert_eq!(adapter.active_pointer_id(), None);
        assert_eq!(adapter.drag_state(), DragState::Idle);
    }

    #[test]
    fn pointer_up_with_wrong_button_is_ignored() {
        let mut store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        down(&mut adapter, &store, 1);
        let dispatch = adapter.pointer_up(&mut store, 1, PointerButton::Middle, pos(0, 0));
        assert_eq!(
            dispatch.log.outcome,
            PointerLogOutcome::Ignored(PointerIgnoredReason::ButtonMismatch)
        );
        assert_eq!(adapter.active_pointer_id(), Some(1));
    }

    #[test]
    fn leave_before_capture_ack_ends_gesture() {
        let mut store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        down(&mut adapter, &store, 5);
        adapter.pointer_move(&mut store, 5, pos(480, 330));
        let dispatch = adapter.pointer_leave(&mut store, 5);
        assert!(dispatch.is_forwarded());
        assert_eq!(dispatch.capture_command, None);
        assert_eq!(adapter.drag_state(), DragState::Idle);
        assert_eq!(
            store.state(PanelId::Left).floating_rect(),
            Rect::new(430, 320, 300, 300)
        );
    }

    #[test]
    fn uncaptured_leave_frees_the_gesture_slot() {
        let mut store = floating_store();
        store.set_mode(PanelId::Right, PanelMode::Floating);
        let mut adapter = PanelPointerAdapter::new(PointerAdapterConfig::default());
        down(&mut adapter, &store, 1);
        adapter.pointer_leave(&mut store, 1);
        assert_eq!(adapter.active_pointer_id(), None);

        let next = adapter.pointer_down(
            &store,
            PanelId::Right,
            DragKind::Move,
            2,
            PointerButton::Primary,
            pos(1_100, 100),
        );
        assert!(next.is_forwarded());
        assert_eq!(adapter.active_panel(), Some(PanelId::Right));
    }

    #[test]
    fn pointer_cancel_with_matching_id_settles_gesture() {
        let mut store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        down(&mut adapter, &store, 4);
        adapter.pointer_move(&mut store, 4, pos(480, 330));
        let dispatch = adapter.pointer_cancel(&mut store, Some(4));
        assert_eq!(dispatch.log.phase, PointerPhase::PointerCancel);
        assert!(dispatch.is_forwarded());
        assert_eq!(dispatch.capture_command, None);
        assert!(matches!(
            dispatch.transition.map(|t| t.effect),
            Some(DragEffect::Ended {
                resolution: SnapResolution::Settled,
                ..
            })
        ));
        assert_eq!(adapter.drag_state(), DragState::Idle);
        assert_eq!(
            store.state(PanelId::Left).floating_rect(),
            Rect::new(430, 320, 300, 300)
        );
    }

    #[test]
    fn pointer_cancel_with_other_id_is_ignored() {
        let mut store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        down(&mut adapter, &store, 4);
        let dispatch = adapter.pointer_cancel(&mut store, Some(9));
        assert_eq!(
            dispatch.log.outcome,
            PointerLogOutcome::Ignored(PointerIgnoredReason::PointerMismatch)
        );
        assert_eq!(adapter.active_pointer_id(), Some(4));
    }

    #[test]
    fn pointer_cancel_without_id_ends_active_gesture() {
        let mut store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        down(&mut adapter, &store, 4);
        adapter.capture_acquired(4);
        let dispatch = adapter.pointer_cancel(&mut store, None);
        assert!(dispatch.is_forwarded());
        assert_eq!(
            dispatch.capture_command,
            Some(CaptureCommand::Release { pointer_id: 4 })
        );
        assert_eq!(adapter.active_pointer_id(), None);

        let idle = adapter.pointer_cancel(&mut store, None);
        assert_eq!(
            idle.log.outcome,
            PointerLogOutcome::Ignored(PointerIgnoredReason::NoActivePointer)
        );
    }

    #[test]
    fn leave_after_capture_ack_is_ignored() {
        let mut store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        down(&mut adapter, &store, 5);
        adapter.capture_acquired(5);
        let dispatch = adapter.pointer_leave(&mut store, 5);
        assert_eq!(
            dispatch.log.outcome,
            PointerLogOutcome::Ignored(PointerIgnoredReason::LeaveWhileCaptured)
        );
        assert_eq!(adapter.active_panel(), Some(PanelId::Left));
    }

    #[test]
    fn blur_releases_capture_and_ends() {
        let mut store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        down(&mut adapter, &store, 8);
        adapter.capture_acquired(8);
        let dispatch = adapter.blur(&mut store);
        assert_eq!(dispatch.log.phase, PointerPhase::Blur);
        assert_eq!(
            dispatch.capture_command,
            Some(CaptureCommand::Release { pointer_id: 8 })
        );
        assert_eq!(adapter.drag_state(), DragState::Idle);
    }

    #[test]
    fn lost_capture_ends_without_double_release() {
        let mut store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        down(&mut adapter, &store, 8);
        adapter.capture_acquired(8);
        let dispatch = adapter.lost_pointer_capture(&mut store, 8);
        assert!(dispatch.is_forwarded());
        assert_eq!(dispatch.capture_command, None);
        assert_eq!(adapter.active_pointer_id(), None);
    }

    #[test]
    fn force_cancel_releases_and_skips_snap() {
        let mut store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        down(&mut adapter, &store, 2);
        adapter.capture_acquired(2);
        adapter.pointer_move(&mut store, 2, pos(60, 310));
        let dispatch = adapter.force_cancel().expect("active gesture");
        assert_eq!(
            dispatch.capture_command,
            Some(CaptureCommand::Release { pointer_id: 2 })
        );
        assert_eq!(store.state(PanelId::Left).mode(), PanelMode::Floating);
        assert_eq!(adapter.force_cancel(), None);
    }

    #[test]
    fn sequences_only_advance_on_forwarded_dispatches() {
        let mut store = floating_store();
        let mut adapter = PanelPointerAdapter::default();
        let first = down(&mut adapter, &store, 1);
        let ignored = adapter.pointer_move(&mut store, 4, pos(0, 0));
        let second = adapter.pointer_move(&mut store, 1, pos(460, 320));
        assert_eq!(first.log.sequence, Some(0));
        assert_eq!(ignored.log.sequence, None);
        assert_eq!(second.log.sequence, Some(1));
    }
}
