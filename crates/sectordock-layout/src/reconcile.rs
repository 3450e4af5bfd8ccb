#![forbid(unsafe_code)]

//! Viewport reconciliation.
//!
//! Every host resize is fed through [`reconcile_viewport`] with explicit
//! dimensions. Two independent rules apply:
//!
//! 1. Crossing the wide/narrow breakpoint forces both panels open
//!    (narrow → wide) or closed (wide → narrow). Resizes inside one class
//!    leave `is_open` alone.
//! 2. Every open floating panel is shrunk (not below the size floor) and
//!    clamped back into the new viewport. This runs on every resize.
//!
//! Docked panels need no work: their geometry is derived from the viewport
//! whenever it is read.

use sectordock_core::Viewport;
use serde::{Deserialize, Serialize};

use crate::breakpoint::BreakpointTransition;
use crate::panel::{PanelId, PanelStore};

/// One host resize notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportResize {
    pub previous_width: u32,
    pub new_width: u32,
    pub new_height: u32,
}

impl ViewportResize {
    #[must_use]
    pub const fn new(previous_width: u32, new_width: u32, new_height: u32) -> Self {
        Self {
            previous_width,
            new_width,
            new_height,
        }
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        Viewport::new(self.new_width, self.new_height)
    }
}

/// What one reconciliation changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileOutcome {
    pub transition: Option<BreakpointTransition>,
    /// Panels whose `is_open` flipped because of the transition.
    pub toggled: Vec<PanelId>,
    /// Floating panels whose rect was shrunk or moved.
    pub refitted: Vec<PanelId>,
}

impl ReconcileOutcome {
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.transition.is_none() && self.toggled.is_empty() && self.refitted.is_empty()
    }
}

/// Apply a viewport resize to `store`.
///
/// `skip` names a panel whose rect must not be touched, normally the one
/// under an active drag gesture; its next gesture write re-clamps it.
pub fn reconcile_viewport(
    store: &mut PanelStore,
    resize: ViewportResize,
    skip: Option<PanelId>,
) -> ReconcileOutcome {
    let mut outcome = ReconcileOutcome::default();
    store.set_viewport(resize.viewport());

    outcome.transition = BreakpointTransition::detect(
        resize.previous_width,
        resize.new_width,
        store.config().wide_breakpoint,
    );
    if let Some(transition) = outcome.transition {
        #[cfg(feature = "tracing")]
        tracing::info!(
            from = %transition.from,
            to = %transition.to,
            width = resize.new_width,
            "viewport breakpoint crossed"
        );
        let open = transition.to.panels_open();
        for panel in PanelId::ALL {
            if store.set_open(panel, open) {
                outcome.toggled.push(panel);
            }
        }
    }

    for panel in PanelId::ALL {
        if Some(panel) == skip {
            continue;
        }
        if store.refit_floating(panel) {
            outcome.refitted.push(panel);
        }
    }

    #[cfg(feature = "tracing")]
    if !outcome.refitted.is_empty() {
        tracing::debug!(
            refitted = ?outcome.refitted,
            width = resize.new_width,
            height = resize.new_height,
            "floating panels refitted to viewport"
        );
    }
    outcome
}
