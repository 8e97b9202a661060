//! Verlet points with implicit velocity.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::render::Color;
use crate::vec::{Vec, Vec2};

/// Horizontal velocity kept per substep while a point rests on the floor.
pub const FLOOR_FRICTION: f32 = 0.98;

/// A Verlet point. Velocity is implicit: `pos - prev_pos`.
///
/// `mass` is kept private so it can never reach zero; every other field may be
/// edited directly between steps.
#[derive(Clone, Debug)]
pub struct Point<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    /// Force per mass accumulated since the last [`integrate`](Self::integrate).
    pub acceleration: Vec2<F>,
    mass: F,
    /// Collision and containment radius.
    pub radius: F,
    pub fixed: bool,
    /// Render hint.
    pub color: Color,
}

impl<F: Float> Point<F> {
    /// Create a free point at rest.
    ///
    /// A mass that is not strictly positive becomes 1.0 and a negative radius
    /// becomes 0; use [`try_new`](Self::try_new) to reject those instead.
    pub fn new(pos: Vec2<F>, radius: F, mass: F) -> Self {
        Point {
            pos,
            prev_pos: pos,
            acceleration: Vec2::zero(),
            mass: sanitize_mass(mass),
            radius: sanitize_radius(radius),
            fixed: false,
            color: Color::WHITE,
        }
    }

    /// Create an anchor that never moves.
    pub fn fixed(pos: Vec2<F>, radius: F, mass: F) -> Self {
        Point { fixed: true, ..Point::new(pos, radius, mass) }
    }

    /// Strict constructor: fails instead of coercing mass or radius.
    pub fn try_new(pos: Vec2<F>, radius: F, mass: F) -> Result<Self, PhysicsError> {
        if !(mass > F::zero()) || !mass.is_finite() {
            return Err(PhysicsError::InvalidMass);
        }
        if !(radius >= F::zero()) || !radius.is_finite() {
            return Err(PhysicsError::InvalidRadius);
        }
        Ok(Point::new(pos, radius, mass))
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn mass(&self) -> F {
        self.mass
    }

    /// Replace the mass, with the same coercion as [`new`](Self::new).
    pub fn set_mass(&mut self, mass: F) {
        self.mass = sanitize_mass(mass);
    }

    /// Accumulate `force / mass` for the next integration.
    pub fn apply_force(&mut self, force: Vec2<F>) {
        if !self.fixed {
            self.acceleration += force.unscale(self.mass);
        }
    }

    /// Störmer-Verlet step. Clears the accumulated acceleration.
    pub fn integrate(&mut self, dt: F) {
        if self.fixed {
            return;
        }
        let velocity = self.pos - self.prev_pos;
        self.prev_pos = self.pos;
        self.pos = self.pos + velocity + self.acceleration.scale(dt * dt);
        self.acceleration = Vec2::zero();
    }

    /// Add `delta` to the implicit velocity by moving `prev_pos`.
    pub fn adjust_velocity(&mut self, delta: Vec2<F>) {
        if self.fixed {
            return;
        }
        self.prev_pos = self.pos - (self.pos - self.prev_pos + delta);
    }

    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    pub fn set_velocity(&mut self, velocity: Vec2<F>) {
        if !self.fixed {
            self.prev_pos = self.pos - velocity;
        }
    }

    /// Keep the point's circle inside `[0, width] x [0, height]`, reflecting
    /// the clamped velocity component scaled by `bounce`.
    ///
    /// `height` is the floor; a point touching it also loses horizontal speed
    /// to [`FLOOR_FRICTION`].
    pub fn constrain_to_bounds(&mut self, width: F, height: F, bounce: F) {
        self.constrain_to_bounds_with(width, height, bounce, F::from_f32(FLOOR_FRICTION));
    }

    /// [`constrain_to_bounds`](Self::constrain_to_bounds) with an explicit floor friction.
    pub fn constrain_to_bounds_with(&mut self, width: F, height: F, bounce: F, floor_friction: F) {
        if self.fixed {
            return;
        }

        let velocity = self.velocity();
        let mut reflected = velocity;
        let mut collided = false;

        if self.pos.x < self.radius {
            self.pos.x = self.radius;
            reflected.x = -velocity.x * bounce;
            collided = true;
        } else if self.pos.x > width - self.radius {
            self.pos.x = width - self.radius;
            reflected.x = -velocity.x * bounce;
            collided = true;
        }

        if self.pos.y < self.radius {
            self.pos.y = self.radius;
            reflected.y = -velocity.y * bounce;
            collided = true;
        } else if self.pos.y > height - self.radius {
            self.pos.y = height - self.radius;
            reflected.y = -velocity.y * bounce;
            collided = true;
        }

        if !collided {
            return;
        }

        self.prev_pos = self.pos - reflected;
        if self.pos.y >= height - self.radius {
            self.prev_pos = self.pos - reflected.with_x(reflected.x * floor_friction);
        }
    }
}

fn sanitize_mass<F: Float>(mass: F) -> F {
    if mass > F::zero() {
        mass
    } else {
        tracing::debug!(mass = ?mass, "non-positive point mass coerced to 1.0");
        F::one()
    }
}

fn sanitize_radius<F: Float>(radius: F) -> F {
    if radius >= F::zero() {
        radius
    } else {
        tracing::debug!(radius = ?radius, "negative point radius coerced to 0");
        F::zero()
    }
}
