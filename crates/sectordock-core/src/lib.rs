#![forbid(unsafe_code)]

//! Core: viewport geometry for the sectordock panel manager.
//!
//! # Role in sectordock
//! `sectordock-core` is the leaf layer. It owns the pixel-space [`Rect`],
//! [`Point`] and [`Viewport`] types plus the pure functions every other
//! layer uses to keep panels on screen: clamping, growing, translating and
//! computing edge-snap targets.
//!
//! # How it fits in the system
//! `sectordock-layout` builds the panel store, drag controller and viewport
//! reconciler on top of these primitives. Nothing in this crate holds state.

pub mod geometry;

pub use geometry::{
    DEFAULT_MIN_PANEL_SIZE, DEFAULT_SNAP_DOCK_WIDTH, DEFAULT_SNAP_STRIP_HEIGHT,
    DEFAULT_SNAP_THRESHOLD, Edge, EdgeSnap, Point, Rect, SnapProfile, Viewport,
    clamp_rect_to_viewport, compute_snap_target, fit_rect_to_viewport, grow_rect, translate_rect,
};
