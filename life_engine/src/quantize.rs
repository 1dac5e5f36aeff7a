// quantize.rs - Snap a live window-resize drag to whole-cell client sizes

use crate::grid::{CELL_FILL, CELL_SIZE};

/// Smallest client size in cells, per axis.
pub const MIN_CELLS: i32 = 10;

const GUTTER: i32 = CELL_SIZE - CELL_FILL;

/// Screen-space rectangle proposed by a resize drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectPx {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Window chrome size: total window size minus client size. Captured
/// once when the window is first shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSize {
    pub width: i32,
    pub height: i32,
}

/// The edge or corner being dragged. Discriminants follow the Win32
/// WMSZ_* codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeHandle {
    Left = 1,
    Right = 2,
    Top = 3,
    TopLeft = 4,
    TopRight = 5,
    Bottom = 6,
    BottomLeft = 7,
    BottomRight = 8,
}

impl ResizeHandle {
    /// Which edge moves on each axis: (right edge, bottom edge). The
    /// axis a handle does not drag is treated as a left/top drag, so
    /// both axes always get quantized.
    fn dragged_edges(self) -> (bool, bool) {
        match self {
            ResizeHandle::Left | ResizeHandle::Top | ResizeHandle::TopLeft => (false, false),
            ResizeHandle::Right | ResizeHandle::TopRight => (true, false),
            ResizeHandle::Bottom | ResizeHandle::BottomLeft => (false, true),
            ResizeHandle::BottomRight => (true, true),
        }
    }
}

// Nearest whole-cell count for a raw client size, floored at MIN_CELLS.
fn snap(client: i32) -> i32 {
    ((client + CELL_SIZE / 2) / CELL_SIZE).max(MIN_CELLS)
}

/// Rewrites the dragged edges of `rect` so the client area lands on a
/// whole number of cells per axis, leaving the anchor edges untouched.
/// The resulting client size on each axis is `cells * 12 - 2`.
pub fn quantize(handle: ResizeHandle, rect: &mut RectPx, frame: FrameSize) {
    let (drags_right, drags_bottom) = handle.dragged_edges();

    if drags_right {
        let anchor = rect.left + frame.width;
        rect.right = anchor + snap(rect.right - anchor) * CELL_SIZE - GUTTER;
    } else {
        let anchor = rect.right - frame.width;
        rect.left = anchor - snap(anchor - rect.left) * CELL_SIZE + GUTTER;
    }

    if drags_bottom {
        let anchor = rect.top + frame.height;
        rect.bottom = anchor + snap(rect.bottom - anchor) * CELL_SIZE - GUTTER;
    } else {
        let anchor = rect.bottom - frame.height;
        rect.top = anchor - snap(anchor - rect.top) * CELL_SIZE + GUTTER;
    }
}
