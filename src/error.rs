//! Error types for the strict construction paths.
//!
//! The simulation step itself never fails; bad input there is clamped or
//! skipped. These errors come from the `try_*` constructors,
//! `SystemConfig::validate`, spring registration and the shape factories.

use core::fmt;

/// Errors that can occur while building a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Radius must be non-negative and finite.
    InvalidRadius,
    /// Stiffness must be in [0, 1].
    InvalidStiffness,
    /// Damping must be in [0, 1].
    InvalidDamping,
    /// Floor friction must be in [0, 1].
    InvalidFriction,
    /// Gravity components must be finite.
    InvalidGravity,
    /// Point index is out of bounds.
    PointOutOfBounds { index: usize, count: usize },
    /// Chains need at least 1 segment, rings at least 3.
    InsufficientSegments { requested: usize, minimum: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidRadius => write!(f, "radius must be non-negative and finite"),
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be in [0, 1]"),
            PhysicsError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            PhysicsError::InvalidFriction => write!(f, "floor friction must be in [0, 1]"),
            PhysicsError::InvalidGravity => write!(f, "gravity must be finite"),
            PhysicsError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::InsufficientSegments { requested, minimum } => {
                write!(f, "shape needs at least {} segments, got {}", minimum, requested)
            }
        }
    }
}
