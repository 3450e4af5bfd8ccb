#![forbid(unsafe_code)]

//! Panel shell: the single owner of panel state and the gesture slot.
//!
//! [`PanelShell`] renders each panel from its current state, routes pointer
//! signals through the [`PanelPointerAdapter`], and routes viewport resizes
//! through [`reconcile_viewport`]. Explicit user actions (open, close, dock,
//! float) that change the panel under an active gesture cancel that
//! gesture: a gesture never outlives its panel being closed or docked.

use std::fmt;

use sectordock_core::{Point, Rect, Viewport};
use sectordock_layout::{
    DragKind, DragState, PanelConfig, PanelConfigError, PanelId, PanelMode, PanelStore,
    ReconcileOutcome, ViewportBreakpoint, ViewportResize, reconcile_viewport,
};
use serde::{Deserialize, Serialize};

use crate::pointer::{
    PanelPointerAdapter, PointerAdapterConfig, PointerButton, PointerDispatch,
};

/// Renderable content injected into a panel.
///
/// The shell passes whether the panel is currently floating and hands the
/// result back untouched in [`PanelView::content`].
pub trait PanelContent {
    type View;

    fn render(&self, floating: bool) -> Self::View;
}

impl<V, F> PanelContent for F
where
    F: Fn(bool) -> V,
{
    type View = V;

    fn render(&self, floating: bool) -> V {
        self(floating)
    }
}

/// Everything a host needs to draw one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView<V> {
    pub panel: PanelId,
    pub is_open: bool,
    pub mode: PanelMode,
    /// Rendered geometry; `None` while closed.
    pub rect: Option<Rect>,
    /// Rendered content; `None` while closed.
    pub content: Option<V>,
}

/// Result of an explicit open/close/dock/float action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellAction {
    pub changed: bool,
    /// Set when the action interrupted the gesture on the same panel.
    pub canceled: Option<PointerDispatch>,
}

/// Result of a viewport resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeOutcome {
    pub reconcile: ReconcileOutcome,
    /// Set when a breakpoint crossing closed the panel under the gesture.
    pub canceled: Option<PointerDispatch>,
}

/// Serializable state of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub panel: PanelId,
    pub is_open: bool,
    pub mode: PanelMode,
    pub floating_rect: Rect,
    pub rendered_rect: Option<Rect>,
}

/// Serializable state of the whole shell, for JS hosts and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellSnapshot {
    pub viewport: Viewport,
    pub breakpoint: ViewportBreakpoint,
    pub panels: Vec<PanelSnapshot>,
    pub drag: DragState,
}

impl ShellSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Composition root for the two side panels.
pub struct PanelShell<V> {
    store: PanelStore,
    pointer: PanelPointerAdapter,
    left: Box<dyn PanelContent<View = V>>,
    right: Box<dyn PanelContent<View = V>>,
    on_navigate: Box<dyn FnMut(&str)>,
}

impl<V> fmt::Debug for PanelShell<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelShell")
            .field("store", &self.store)
            .field("pointer", &self.pointer)
            .finish_non_exhaustive()
    }
}

impl<V> PanelShell<V> {
    /// Build a shell for `viewport`, rejecting an invalid `config`.
    pub fn new(
        viewport: Viewport,
        config: PanelConfig,
        left: impl PanelContent<View = V> + 'static,
        right: impl PanelContent<View = V> + 'static,
        on_navigate: impl FnMut(&str) + 'static,
    ) -> Result<Self, PanelConfigError> {
        config.validate()?;
        Ok(Self {
            store: PanelStore::new(viewport, config),
            pointer: PanelPointerAdapter::default(),
            left: Box::new(left),
            right: Box::new(right),
            on_navigate: Box::new(on_navigate),
        })
    }

    /// Replace the pointer adapter configuration. Drops any active gesture.
    #[must_use]
    pub fn with_pointer_config(mut self, config: PointerAdapterConfig) -> Self {
        self.pointer = PanelPointerAdapter::new(config);
        self
    }

    #[must_use]
    pub const fn store(&self) -> &PanelStore {
        &self.store
    }

    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.pointer.drag_state()
    }

    #[must_use]
    pub fn active_pointer_id(&self) -> Option<u32> {
        self.pointer.active_pointer_id()
    }

    // ---- rendering ----

    pub fn render(&self, panel: PanelId) -> PanelView<V> {
        let state = self.store.state(panel);
        let content = state
            .is_open()
            .then(|| self.content(panel).render(state.is_floating()));
        PanelView {
            panel,
            is_open: state.is_open(),
            mode: state.mode(),
            rect: self.store.rendered_rect(panel),
            content,
        }
    }

    /// Views for both panels, left first.
    pub fn render_all(&self) -> [PanelView<V>; 2] {
        PanelId::ALL.map(|panel| self.render(panel))
    }

    /// Forward a navigation request from panel content to the host.
    pub fn navigate(&mut self, view_id: &str) {
        (self.on_navigate)(view_id);
    }

    #[must_use]
    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            viewport: self.store.viewport(),
            breakpoint: self.store.breakpoint(),
            panels: PanelId::ALL
                .iter()
                .map(|&panel| {
                    let state = self.store.state(panel);
                    PanelSnapshot {
                        panel,
                        is_open: state.is_open(),
                        mode: state.mode(),
                        floating_rect: state.floating_rect(),
                        rendered_rect: self.store.rendered_rect(panel),
                    }
                })
                .collect(),
            drag: self.pointer.drag_state(),
        }
    }

    // ---- explicit actions ----

    pub fn open(&mut self, panel: PanelId) -> ShellAction {
        self.act(panel, |store| store.set_open(panel, true))
    }

    pub fn close(&mut self, panel: PanelId) -> ShellAction {
        self.act(panel, |store| store.set_open(panel, false))
    }

    pub fn toggle_open(&mut self, panel: PanelId) -> ShellAction {
        self.act(panel, |store| store.toggle_open(panel))
    }

    pub fn dock(&mut self, panel: PanelId) -> ShellAction {
        self.act(panel, |store| store.set_mode(panel, PanelMode::Docked))
    }

    pub fn float(&mut self, panel: PanelId) -> ShellAction {
        self.act(panel, |store| store.set_mode(panel, PanelMode::Floating))
    }

    pub fn toggle_mode(&mut self, panel: PanelId) -> ShellAction {
        self.act(panel, |store| store.toggle_mode(panel))
    }

    // ---- pointer lifecycle ----

    pub fn pointer_down(
        &mut self,
        panel: PanelId,
        kind: DragKind,
        pointer_id: u32,
        button: PointerButton,
        position: Point,
    ) -> PointerDispatch {
        self.pointer
            .pointer_down(&self.store, panel, kind, pointer_id, button, position)
    }

    /// Begin a move gesture from the panel's title bar handle.
    pub fn begin_move(&mut self, panel: PanelId, pointer_id: u32, position: Point) -> PointerDispatch {
        let button = self.pointer.config().activation_button;
        self.pointer_down(panel, DragKind::Move, pointer_id, button, position)
    }

    /// Begin a resize gesture from the panel's corner handle.
    pub fn begin_resize(&mut self, panel: PanelId, pointer_id: u32, position: Point) -> PointerDispatch {
        let button = self.pointer.config().activation_button;
        self.pointer_down(panel, DragKind::Resize, pointer_id, button, position)
    }

    pub fn capture_acquired(&mut self, pointer_id: u32) -> PointerDispatch {
        self.pointer.capture_acquired(pointer_id)
    }

    pub fn pointer_move(&mut self, pointer_id: u32, position: Point) -> PointerDispatch {
        self.pointer.pointer_move(&mut self.store, pointer_id, position)
    }

    pub fn pointer_up(
        &mut self,
        pointer_id: u32,
        button: PointerButton,
        position: Point,
    ) -> PointerDispatch {
        self.pointer
            .pointer_up(&mut self.store, pointer_id, button, position)
    }

    pub fn pointer_cancel(&mut self, pointer_id: Option<u32>) -> PointerDispatch {
        self.pointer.pointer_cancel(&mut self.store, pointer_id)
    }

    pub fn pointer_leave(&mut self, pointer_id: u32) -> PointerDispatch {
        self.pointer.pointer_leave(&mut self.store, pointer_id)
    }

    pub fn blur(&mut self) -> PointerDispatch {
        self.pointer.blur(&mut self.store)
    }

    pub fn visibility_hidden(&mut self) -> PointerDispatch {
        self.pointer.visibility_hidden(&mut self.store)
    }

    pub fn lost_pointer_capture(&mut self, pointer_id: u32) -> PointerDispatch {
        self.pointer.lost_pointer_capture(&mut self.store, pointer_id)
    }

    // ---- viewport ----

    /// Apply a host resize to `width` x `height`.
    ///
    /// The panel under an active gesture is left for its next gesture write
    /// to re-clamp. If a breakpoint crossing closes it, the gesture is
    /// canceled.
    pub fn resize(&mut self, width: u32, height: u32) -> ResizeOutcome {
        let previous_width = self.store.viewport().width;
        let active = self.pointer.active_panel();
        let reconcile = reconcile_viewport(
            &mut self.store,
            ViewportResize::new(previous_width, width, height),
            active,
        );
        let canceled = match active {
            Some(panel) if !self.store.state(panel).is_open() => self.pointer.force_cancel(),
            _ => None,
        };
        ResizeOutcome {
            reconcile,
            canceled,
        }
    }

    fn act(&mut self, panel: PanelId, op: impl FnOnce(&mut PanelStore) -> bool) -> ShellAction {
        let changed = op(&mut self.store);
        let canceled = if changed && self.pointer.active_panel() == Some(panel) {
            self.pointer.force_cancel()
        } else {
            None
        };
        ShellAction { changed, canceled }
    }

    fn content(&self, panel: PanelId) -> &dyn PanelContent<View = V> {
        match panel {
            PanelId::Left => self.left.as_ref(),
            PanelId::Right => self.right.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use sectordock_layout::{DragEffect, SnapResolution};

    use super::*;
    use crate::pointer::CaptureCommand;

    fn label(name: &'static str) -> impl Fn(bool) -> String {
        move |floating| format!("{name}:{}", if floating { "floating" } else { "docked" })
    }

    fn shell(width: u32, height: u32) -> PanelShell<String> {
        PanelShell::new(
            Viewport::new(width, height),
            PanelConfig::default(),
            label("nav"),
            label("status"),
            |_: &str| {},
        )
        .expect("default config is valid")
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = PanelConfig {
            min_size: 0,
            ..PanelConfig::default()
        };
        let result = PanelShell::new(
            Viewport::new(1280, 800),
            config,
            label("nav"),
            label("status"),
            |_: &str| {},
        );
        assert!(matches!(
            result,
            Err(PanelConfigError::NonPositive {
                field: "min_size",
                ..
            })
        ));
    }

    #[test]
    fn wide_shell_renders_both_docked_panels() {
        let shell = shell(1280, 720);
        let [left, right] = shell.render_all();
        assert_eq!(left.rect, Some(Rect::new(0, 0, 220, 720)));
        assert_eq!(left.content.as_deref(), Some("nav:docked"));
        assert_eq!(right.rect, Some(Rect::new(1_060, 0, 220, 720)));
        assert_eq!(right.mode, PanelMode::Docked);
    }

    #[test]
    fn narrow_shell_starts_closed_without_content() {
        let shell = shell(800, 600);
        let view = shell.render(PanelId::Left);
        assert!(!view.is_open);
        assert_eq!(view.rect, None);
        assert_eq!(view.content, None);
    }

    #[test]
    fn float_switches_content_variant() {
        let mut shell = shell(1280, 800);
        let action = shell.float(PanelId::Right);
        assert!(action.changed);
        assert_eq!(action.canceled, None);
        let view = shell.render(PanelId::Right);
        assert_eq!(view.content.as_deref(), Some("status:floating"));
        assert_eq!(view.rect, Some(shell.store().state(PanelId::Right).floating_rect()));
    }

    #[test]
    fn navigate_is_passed_through_untouched() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut shell = PanelShell::new(
            Viewport::new(1280, 800),
            PanelConfig::default(),
            label("nav"),
            label("status"),
            move |view: &str| sink.borrow_mut().push(view.to_string()),
        )
        .expect("valid");
        shell.navigate("trade");
        shell.navigate("sector/42");
        assert_eq!(*seen.borrow(), vec!["trade".to_string(), "sector/42".to_string()]);
    }

    #[test]
    fn closing_dragged_panel_cancels_gesture_without_snap() {
        let mut shell = shell(1280, 800);
        shell.float(PanelId::Left);
        shell.begin_move(PanelId::Left, 1, Point::new(100, 100));
        shell.capture_acquired(1);
        shell.pointer_move(1, Point::new(-200, 100));

        let action = shell.close(PanelId::Left);
        assert!(action.changed);
        let canceled = action.canceled.expect("gesture canceled");
        assert_eq!(
            canceled.capture_command,
            Some(CaptureCommand::Release { pointer_id: 1 })
        );
        assert!(matches!(
            canceled.transition.map(|t| t.effect),
            Some(DragEffect::Canceled { .. })
        ));
        assert_eq!(shell.drag_state(), DragState::Idle);
        assert_eq!(shell.store().state(PanelId::Left).mode(), PanelMode::Floating);
    }

    #[test]
    fn acting_on_other_panel_keeps_gesture() {
        let mut shell = shell(1280, 800);
        shell.float(PanelId::Left);
        shell.begin_move(PanelId::Left, 1, Point::new(100, 100));
        let action = shell.toggle_mode(PanelId::Right);
        assert!(action.changed);
        assert_eq!(action.canceled, None);
        assert_eq!(shell.active_pointer_id(), Some(1));
    }

    #[test]
    fn unchanged_action_on_dragged_panel_keeps_gesture() {
        let mut shell = shell(1280, 800);
        shell.float(PanelId::Left);
        shell.begin_move(PanelId::Left, 1, Point::new(100, 100));
        let action = shell.open(PanelId::Left);
        assert!(!action.changed);
        assert_eq!(action.canceled, None);
        assert_eq!(shell.active_pointer_id(), Some(1));
    }

    #[test]
    fn pointer_up_near_native_edge_docks() {
        let mut shell = shell(1280, 800);
        shell.float(PanelId::Left);
        let start = shell.store().state(PanelId::Left).floating_rect();
        shell.begin_move(PanelId::Left, 3, Point::new(start.x, start.y));
        let up = shell.pointer_up(3, PointerButton::Primary, Point::new(0, start.y));
        assert!(matches!(
            up.transition.map(|t| t.effect),
            Some(DragEffect::Ended {
                resolution: SnapResolution::Docked { .. },
                ..
            })
        ));
        assert_eq!(shell.render(PanelId::Left).content.as_deref(), Some("nav:docked"));
    }

    #[test]
    fn breakpoint_close_cancels_active_gesture() {
        let mut shell = shell(1280, 800);
        shell.float(PanelId::Right);
        shell.begin_resize(PanelId::Right, 9, Point::new(0, 0));
        let outcome = shell.resize(900, 800);
        assert_eq!(outcome.reconcile.toggled, vec![PanelId::Left, PanelId::Right]);
        assert!(outcome.canceled.is_some());
        assert_eq!(shell.drag_state(), DragState::Idle);
    }

    #[test]
    fn same_class_resize_skips_dragged_panel() {
        let mut shell = shell(1600, 1000);
        shell.float(PanelId::Left);
        shell.float(PanelId::Right);
        let before = shell.store().state(PanelId::Right).floating_rect();
        shell.begin_move(PanelId::Right, 4, Point::new(0, 0));
        let outcome = shell.resize(1100, 300);
        assert_eq!(outcome.reconcile.refitted, vec![PanelId::Left]);
        assert_eq!(outcome.canceled, None);
        assert_eq!(shell.store().state(PanelId::Right).floating_rect(), before);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut shell = shell(1280, 800);
        shell.float(PanelId::Left);
        shell.begin_move(PanelId::Left, 2, Point::new(10, 10));
        let snapshot = shell.snapshot();
        assert_eq!(snapshot.breakpoint, ViewportBreakpoint::Wide);
        assert_eq!(snapshot.panels.len(), 2);
        let json = snapshot.to_json().expect("serialize snapshot");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse snapshot");
        assert_eq!(value["panels"][0]["panel"], "left");
        assert_eq!(value["panels"][0]["mode"], "floating");
        assert_eq!(value["panels"][1]["mode"], "docked");
        assert_eq!(value["drag"]["state"], "dragging");
        let back: ShellSnapshot = serde_json::from_str(&json).expect("deserialize snapshot");
        assert_eq!(back, snapshot);
    }
}
