//! Narrow-phase circle-circle collision response between two points.

use crate::float::Float;
use crate::point::Point;
use crate::vec::{Vec, Vec2};

/// How an overlapping pair was resolved.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Contact<F: Float> {
    /// The pair was pushed apart; it was not approaching, so no impulse.
    Separation { overlap: F },
    /// The pair was pushed apart and an impulse of `impulse` along the
    /// contact normal was exchanged.
    Impulse { overlap: F, impulse: F },
}

impl<F: Float> Contact<F> {
    pub fn overlap(&self) -> F {
        match *self {
            Contact::Separation { overlap } | Contact::Impulse { overlap, .. } => overlap,
        }
    }
}

/// Resolve one pair. Returns `None` when the circles do not overlap or the
/// centres coincide (no usable normal).
///
/// Positional separation is split by mass share, so fixed points never move
/// and the heavier point moves less. An impulse is only exchanged when the
/// pair is closing along the normal; `restitution` scales the bounce.
pub fn resolve_pair<F: Float>(a: &mut Point<F>, b: &mut Point<F>, restitution: F) -> Option<Contact<F>> {
    let delta = b.pos - a.pos;
    let distance_sq = delta.length_sq();
    let min_distance = a.radius + b.radius;

    if !(distance_sq < min_distance * min_distance && distance_sq > F::zero()) {
        return None;
    }

    let distance = distance_sq.sqrt();
    let normal = delta.unscale(distance);
    let overlap = min_distance - distance;

    let (mass_a, mass_b) = (a.mass(), b.mass());
    let total = mass_a + mass_b;
    let factor_a = if a.fixed { F::zero() } else { mass_b / total };
    let factor_b = if b.fixed { F::zero() } else { mass_a / total };

    let push_a = normal.scale(overlap).scale(factor_a);
    let push_b = normal.scale(overlap).scale(factor_b);

    let velocity_along_normal = (b.velocity() - a.velocity()).dot(normal);

    if velocity_along_normal < F::zero() {
        let magnitude = -(F::one() + restitution) * velocity_along_normal
            / (F::one() / mass_a + F::one() / mass_b);
        let impulse: Vec2<F> = normal.scale(magnitude);

        if !a.fixed {
            a.pos -= push_a;
            a.adjust_velocity(-impulse.unscale(mass_a));
        }
        if !b.fixed {
            b.pos += push_b;
            b.adjust_velocity(impulse.unscale(mass_b));
        }
        Some(Contact::Impulse { overlap, impulse: magnitude })
    } else {
        if !a.fixed {
            a.pos -= push_a;
        }
        if !b.fixed {
            b.pos += push_b;
        }
        Some(Contact::Separation { overlap })
    }
}
