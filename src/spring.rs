//! Distance constraints between two points.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::point::Point;
use crate::render::Color;
use crate::vec::Vec;

/// Below this separation a spring has no usable direction and is skipped.
pub const MIN_SPRING_LENGTH: f32 = 1e-5;

/// Holds two points of the same arena at `rest_length` by position correction.
#[derive(Clone, Debug)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    stiffness: F,
    /// Render hint.
    pub thickness: F,
    /// Render hint.
    pub color: Color,
}

impl<F: Float> Spring<F> {
    /// Connect `a` and `b`, taking the current distance between them as the
    /// rest length. Stiffness is clamped to `[0, 1]`.
    ///
    /// # Panics
    /// If `a` or `b` is not an index into `points`.
    pub fn new(a: usize, b: usize, points: &[Point<F>], stiffness: F) -> Self {
        let rest_length = points[a].pos.distance(points[b].pos);
        Spring {
            a,
            b,
            rest_length,
            stiffness: sanitize_stiffness(stiffness),
            thickness: F::two(),
            color: Color::TRANSPARENT,
        }
    }

    /// Strict constructor: checks both indices and the stiffness range.
    pub fn try_new(a: usize, b: usize, points: &[Point<F>], stiffness: F) -> Result<Self, PhysicsError> {
        check_index(a, points.len())?;
        check_index(b, points.len())?;
        if !(stiffness >= F::zero() && stiffness <= F::one()) {
            return Err(PhysicsError::InvalidStiffness);
        }
        Ok(Spring::new(a, b, points, stiffness))
    }

    /// Override the inferred rest length. Negative values become 0.
    pub fn with_rest_length(mut self, rest_length: F) -> Self {
        self.rest_length = rest_length.max(F::zero());
        self
    }

    pub fn with_thickness(mut self, thickness: F) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn stiffness(&self) -> F {
        self.stiffness
    }

    pub fn set_stiffness(&mut self, stiffness: F) {
        self.stiffness = sanitize_stiffness(stiffness);
    }

    /// Current distance between the endpoints.
    pub fn length(&self, points: &[Point<F>]) -> F {
        points[self.a].pos.distance(points[self.b].pos)
    }

    /// One relaxation pass. Each endpoint moves in inverse proportion to its
    /// share of the pair's mass; fixed endpoints stay put.
    pub fn satisfy(&self, points: &mut [Point<F>]) {
        let (pa, pb) = (&points[self.a], &points[self.b]);
        if pa.fixed && pb.fixed {
            return;
        }

        let delta = pb.pos - pa.pos;
        let dist = delta.length();
        if dist <= F::from_f32(MIN_SPRING_LENGTH) {
            return;
        }

        let diff = (dist - self.rest_length) / dist;
        let correction = delta.scale(diff * self.stiffness);

        let (mass_a, mass_b) = (pa.mass(), pb.mass());
        let total = mass_a + mass_b;

        if !points[self.a].fixed {
            points[self.a].pos += correction.scale(mass_b / total);
        }
        if !points[self.b].fixed {
            points[self.b].pos -= correction.scale(mass_a / total);
        }
    }
}

fn sanitize_stiffness<F: Float>(stiffness: F) -> F {
    let clamped = stiffness.clamp(F::zero(), F::one());
    if clamped != stiffness {
        tracing::debug!(stiffness = ?stiffness, clamped = ?clamped, "spring stiffness clamped");
    }
    clamped
}

pub(crate) fn check_index(index: usize, count: usize) -> Result<(), PhysicsError> {
    if index < count {
        Ok(())
    } else {
        Err(PhysicsError::PointOutOfBounds { index, count })
    }
}
