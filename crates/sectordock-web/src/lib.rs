#![forbid(unsafe_code)]

//! `sectordock-web` is the composition root of the sectordock panel manager.
//!
//! Design goals:
//! - **Host-driven**: the embedding environment (JS) pushes pointer and
//!   viewport events in; nothing reads ambient window state.
//! - **Single writer**: [`PanelShell`] owns the panel store and the gesture
//!   slot, and every handler runs to completion before the next.
//! - **Serializable output**: hosts can pull a [`ShellSnapshot`] as JSON.
//!
//! Panel content is injected as [`PanelContent`] collaborators and never
//! interpreted here.

pub mod pointer;
pub mod shell;

pub use pointer::{
    CaptureCommand, PanelPointerAdapter, PointerAdapterConfig, PointerButton, PointerDispatch,
    PointerIgnoredReason, PointerLogEntry, PointerLogOutcome, PointerPhase,
};
pub use shell::{
    PanelContent, PanelShell, PanelSnapshot, PanelView, ResizeOutcome, ShellAction, ShellSnapshot,
};
