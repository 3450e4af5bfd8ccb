#![forbid(unsafe_code)]

//! Geometric primitives in viewport pixel space.
//!
//! All coordinates are relative to the top-left corner of the viewport.
//! Rect positions may be negative: a floating panel is allowed to hang
//! partially off the left or top edge as long as some of it stays visible.
//!
//! # Invariants
//!
//! 1. [`clamp_rect_to_viewport`] never changes width or height.
//! 2. [`grow_rect`] never changes position and never goes below `min_size`.
//! 3. [`compute_snap_target`] checks edges in the fixed order
//!    left, right, top, bottom; the first match wins.
//!
//! # Failure Modes
//!
//! None. Every function is total and saturates instead of overflowing.

use serde::{Deserialize, Serialize};

/// Minimum floating panel width and height in pixels.
pub const DEFAULT_MIN_PANEL_SIZE: i32 = 200;

/// Distance from a viewport edge within which a released panel snaps.
pub const DEFAULT_SNAP_THRESHOLD: i32 = 50;

/// Width of the full-height rect produced by a left/right snap.
pub const DEFAULT_SNAP_DOCK_WIDTH: i32 = 220;

/// Height of the full-width rect produced by a top/bottom snap.
pub const DEFAULT_SNAP_STRIP_HEIGHT: i32 = 200;

/// A pointer or corner position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - origin`, saturating.
    #[must_use]
    pub const fn delta_from(self, origin: Point) -> (i32, i32) {
        (
            self.x.saturating_sub(origin.x),
            self.y.saturating_sub(origin.y),
        )
    }
}

/// Current size of the host viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width as a signed pixel extent.
    #[inline]
    #[must_use]
    pub const fn width_px(self) -> i32 {
        to_px(self.width)
    }

    /// Height as a signed pixel extent.
    #[inline]
    #[must_use]
    pub const fn height_px(self) -> i32 {
        to_px(self.height)
    }

    /// The viewport as a rect anchored at the origin.
    #[must_use]
    pub const fn bounds(self) -> Rect {
        Rect::new(0, 0, self.width_px(), self.height_px())
    }
}

const fn to_px(value: u32) -> i32 {
    if value > i32::MAX as u32 {
        i32::MAX
    } else {
        value as i32
    }
}

/// An axis-aligned rectangle in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero or negative area.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[must_use]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Whether at least `min_px` pixels of this rect are inside the viewport
    /// on both axes.
    #[must_use]
    pub fn visible_in(&self, viewport: Viewport, min_px: i32) -> bool {
        let min_px = min_px.max(1);
        self.intersection_opt(&viewport.bounds())
            .is_some_and(|visible| visible.width >= min_px && visible.height >= min_px)
    }
}

/// Shift `rect` so that it stays visible inside `viewport`.
///
/// Only `x`/`y` move. On each axis at least `max(min_visible_px, 1)` pixels
/// remain inside the viewport (capped to the rect and viewport extents).
/// A rect larger than the viewport on an axis is pinned to `0` on that axis.
#[must_use]
pub fn clamp_rect_to_viewport(rect: Rect, viewport: Viewport, min_visible_px: i32) -> Rect {
    Rect {
        x: clamp_axis(rect.x, rect.width, viewport.width_px(), min_visible_px),
        y: clamp_axis(rect.y, rect.height, viewport.height_px(), min_visible_px),
        ..rect
    }
}

fn clamp_axis(position: i32, size: i32, extent: i32, min_visible: i32) -> i32 {
    if size > extent {
        return 0;
    }
    let visible = min_visible.max(1).min(size).min(extent);
    // visible <= size and visible <= extent, so low <= high.
    let low = visible.saturating_sub(size);
    let high = extent.saturating_sub(visible);
    position.max(low).min(high)
}

/// Grow (or shrink, for negative deltas) a rect from its bottom-right corner.
#[must_use]
pub fn grow_rect(rect: Rect, dx: i32, dy: i32, min_size: i32) -> Rect {
    Rect {
        width: rect.width.saturating_add(dx).max(min_size),
        height: rect.height.saturating_add(dy).max(min_size),
        ..rect
    }
}

/// Move a rect by a pointer delta.
#[must_use]
pub const fn translate_rect(rect: Rect, dx: i32, dy: i32) -> Rect {
    Rect {
        x: rect.x.saturating_add(dx),
        y: rect.y.saturating_add(dy),
        ..rect
    }
}

/// Shrink `rect` so it fits inside `viewport` (never below `min_size`) and
/// move it fully inside on every axis where it now fits.
///
/// On an axis where the `min_size` floor is larger than the viewport the
/// rect falls back to [`clamp_rect_to_viewport`] semantics.
#[must_use]
pub fn fit_rect_to_viewport(
    rect: Rect,
    viewport: Viewport,
    min_size: i32,
    min_visible_px: i32,
) -> Rect {
    let (x, width) = fit_axis(rect.x, rect.width, viewport.width_px(), min_size, min_visible_px);
    let (y, height) = fit_axis(rect.y, rect.height, viewport.height_px(), min_size, min_visible_px);
    Rect::new(x, y, width, height)
}

fn fit_axis(position: i32, size: i32, extent: i32, min_size: i32, min_visible: i32) -> (i32, i32) {
    let size = size.min(extent).max(min_size);
    if size > extent {
        return (clamp_axis(position, size, extent, min_visible), size);
    }
    (position.clamp(0, extent - size), size)
}

/// Viewport edge a released panel can snap to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Snap evaluation order. Earlier edges win when several match.
    pub const PRIORITY: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A matched snap edge and the dock-shaped rect it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSnap {
    pub edge: Edge,
    pub docked_rect: Rect,
}

/// Tunables for edge snapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapProfile {
    /// Distance in pixels from an edge within which a rect snaps.
    pub threshold: i32,
    /// Width of left/right snap rects.
    pub dock_width: i32,
    /// Height of top/bottom snap rects.
    pub strip_height: i32,
}

impl Default for SnapProfile {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SNAP_THRESHOLD,
            dock_width: DEFAULT_SNAP_DOCK_WIDTH,
            strip_height: DEFAULT_SNAP_STRIP_HEIGHT,
        }
    }
}

impl SnapProfile {
    /// Evaluate edges in [`Edge::PRIORITY`] order and return the first match.
    #[must_use]
    pub fn target(self, rect: Rect, viewport: Viewport) -> Option<EdgeSnap> {
        let vw = viewport.width_px();
        let vh = viewport.height_px();
        Edge::PRIORITY
            .into_iter()
            .find(|edge| match edge {
                Edge::Left => rect.x < self.threshold,
                Edge::Right => rect.right() > vw.saturating_sub(self.threshold),
                Edge::Top => rect.y < self.threshold,
                Edge::Bottom => rect.bottom() > vh.saturating_sub(self.threshold),
            })
            .map(|edge| EdgeSnap {
                edge,
                docked_rect: self.docked_rect(edge, viewport),
            })
    }

    /// Dock-shaped rect for `edge` in `viewport`.
    #[must_use]
    pub fn docked_rect(self, edge: Edge, viewport: Viewport) -> Rect {
        let vw = viewport.width_px();
        let vh = viewport.height_px();
        match edge {
            Edge::Left => Rect::new(0, 0, self.dock_width, vh),
            Edge::Right => Rect::new(vw.saturating_sub(self.dock_width), 0, self.dock_width, vh),
            Edge::Top => Rect::new(0, 0, vw, self.strip_height),
            Edge::Bottom => Rect::new(0, vh.saturating_sub(self.strip_height), vw, self.strip_height),
        }
    }
}

/// Compute the snap target for `rect` with default dock/strip sizes.
#[must_use]
pub fn compute_snap_target(rect: Rect, viewport: Viewport, threshold: i32) -> Option<EdgeSnap> {
    SnapProfile {
        threshold,
        ..SnapProfile::default()
    }
    .target(rect, viewport)
}
