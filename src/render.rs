//! Render hints and the drawing seam used by [`System::draw`](crate::System::draw).
//!
//! The simulation never reads these; they ride along on points and springs so
//! a renderer can draw the scene without keeping a parallel table.

use crate::float::Float;
use crate::vec::Vec2;

/// 8-bit RGBA colour.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Packed as `0xRRGGBBAA`.
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// Drawing surface supplied by the rendering collaborator.
pub trait Canvas<F: Float> {
    /// Filled circle.
    fn draw_circle(&mut self, center: Vec2<F>, radius: F, color: Color);

    /// Stroked line segment.
    fn draw_line(&mut self, from: Vec2<F>, to: Vec2<F>, thickness: F, color: Color);
}
