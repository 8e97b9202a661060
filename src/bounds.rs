//! Containment rectangle.

use crate::float::Float;

/// Axis-aligned rectangle (screen coordinates, +y down).
///
/// Containment only uses `width` and `height`: points are kept inside
/// `[0, width] x [0, height]`. `left` and `top` are stored for renderers that
/// place the simulated region inside a larger scene.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds<F: Float> {
    pub left: F,
    pub top: F,
    pub width: F,
    pub height: F,
}

impl<F: Float> Bounds<F> {
    /// Rectangle anchored at the origin.
    pub fn from_size(width: F, height: F) -> Self {
        Bounds { left: F::zero(), top: F::zero(), width, height }
    }

    pub fn from_edges(left: F, top: F, right: F, bottom: F) -> Self {
        Bounds { left, top, width: right - left, height: bottom - top }
    }

    pub fn right(&self) -> F {
        self.left + self.width
    }

    pub fn bottom(&self) -> F {
        self.top + self.height
    }
}
