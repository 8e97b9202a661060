//! Simulation parameters for a [`System`](crate::System).

use crate::error::PhysicsError;
use crate::float::Float;
use crate::point::FLOOR_FRICTION;
use crate::vec::Vec2;

/// Configuration for stepping a [`System`](crate::System).
///
/// # Builder Pattern
/// ```
/// use jiggle::config::SystemConfig;
/// use jiggle::vec::Vec2;
///
/// let config: SystemConfig<f32> = SystemConfig::new()
///     .with_gravity(Vec2::new(0.0, 98.0))
///     .with_damping(0.3)
///     .with_sub_steps(4)
///     .with_spring_iterations(2);
/// assert_eq!(config.sub_steps, 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SystemConfig<F: Float> {
    /// Gravity acceleration, applied as `gravity * mass` each substep.
    /// Default: (0, 9.8 * 11), screen-space down.
    pub gravity: Vec2<F>,
    /// Bounce factor against the bounds and restitution between points,
    /// in [0, 1]. Default: 0.001.
    pub damping: F,
    /// Substeps per [`update`](crate::System::update). Default: 8.
    pub sub_steps: usize,
    /// Spring relaxation passes per substep. Default: 1.
    pub spring_iterations: usize,
    /// Horizontal velocity kept per substep on the floor. Default: 0.98.
    pub floor_friction: F,
}

impl<F: Float> SystemConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SystemConfig {
            gravity: Vec2::new(F::zero(), F::from_f32(9.8 * 11.0)),
            damping: F::from_f32(0.001),
            sub_steps: 8,
            spring_iterations: 1,
            floor_friction: F::from_f32(FLOOR_FRICTION),
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor, clamped to [0, 1].
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping.clamp(F::zero(), F::one());
        self
    }

    /// Substep count. 0 turns [`update`](crate::System::update) into a no-op.
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps;
        self
    }

    pub fn with_spring_iterations(mut self, iterations: usize) -> Self {
        self.spring_iterations = iterations;
        self
    }

    pub fn with_floor_friction(mut self, friction: F) -> Self {
        self.floor_friction = friction;
        self
    }

    /// Reject values the builder would otherwise let through or clamp.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.gravity.x.is_finite() || !self.gravity.y.is_finite() {
            return Err(PhysicsError::InvalidGravity);
        }
        if !(self.damping >= F::zero() && self.damping <= F::one()) {
            return Err(PhysicsError::InvalidDamping);
        }
        if !(self.floor_friction >= F::zero() && self.floor_friction <= F::one()) {
            return Err(PhysicsError::InvalidFriction);
        }
        Ok(())
    }
}

impl<F: Float> Default for SystemConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
