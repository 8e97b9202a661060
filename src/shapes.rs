//! Factories for common point/spring shapes: ropes and elastic rings.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::point::Point;
use crate::system::System;
use crate::vec::{Vec, Vec2};
use alloc::vec::Vec as AllocVec;

impl<F: Float> System<F> {
    /// A rope of `segments + 1` evenly spaced points from `start` to `end`,
    /// each joined to the next. Returns the point indices in order.
    ///
    /// Adjacent points overlap (and push apart) when `2 * point_radius`
    /// exceeds the segment length.
    pub fn create_chain(
        &mut self,
        start: Vec2<F>,
        end: Vec2<F>,
        segments: usize,
        point_radius: F,
        mass: F,
        stiffness: F,
    ) -> Result<AllocVec<usize>, PhysicsError> {
        if segments == 0 {
            return Err(PhysicsError::InsufficientSegments { requested: segments, minimum: 1 });
        }

        let count = F::from_usize(segments);
        let indices: AllocVec<usize> = (0..=segments)
            .map(|i| {
                let pos = start.lerp(end, F::from_usize(i) / count);
                self.add_point(Point::new(pos, point_radius, mass))
            })
            .collect();

        for pair in indices.windows(2) {
            self.create_spring(pair[0], pair[1], stiffness, F::two())?;
        }

        tracing::debug!(segments, first = indices[0], "chain created");
        Ok(indices)
    }

    /// An elastic ring of `segments` points around `center`.
    ///
    /// Neighbours are joined at `stiffness`. With four or more segments,
    /// opposite points are also joined at half stiffness so the ring keeps
    /// its shape when it lands.
    pub fn create_ring(
        &mut self,
        center: Vec2<F>,
        radius: F,
        segments: usize,
        point_radius: F,
        mass: F,
        stiffness: F,
    ) -> Result<AllocVec<usize>, PhysicsError> {
        if segments < 3 {
            return Err(PhysicsError::InsufficientSegments { requested: segments, minimum: 3 });
        }

        let two_pi = F::two() * F::pi();
        let count = F::from_usize(segments);
        let indices: AllocVec<usize> = (0..segments)
            .map(|i| {
                let angle = two_pi * F::from_usize(i) / count;
                let pos = center + Vec2::from_angle(angle).scale(radius);
                self.add_point(Point::new(pos, point_radius, mass))
            })
            .collect();

        for i in 0..segments {
            let j = (i + 1) % segments;
            self.create_spring(indices[i], indices[j], stiffness, F::two())?;
        }

        if segments >= 4 {
            let half = segments / 2;
            for i in 0..half {
                self.create_spring(indices[i], indices[i + half], stiffness * F::half(), F::two())?;
            }
        }

        tracing::debug!(segments, first = indices[0], "ring created");
        Ok(indices)
    }

    /// Mean position of the given points, or `None` for an empty slice.
    pub fn centroid(&self, indices: &[usize]) -> Option<Vec2<F>> {
        if indices.is_empty() {
            return None;
        }
        let sum = indices
            .iter()
            .fold(Vec2::zero(), |acc, &i| acc + self.point(i).pos);
        Some(sum.unscale(F::from_usize(indices.len())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_spring_count() {
        let mut system: System<f32> = System::new(500.0, 500.0);
        system.create_ring(Vec2::new(250.0, 250.0), 40.0, 8, 2.0, 1.0, 1.0).unwrap();
        // 8 edges + 4 cross springs.
        assert_eq!(system.spring_count(), 12);
        assert_eq!(system.point_count(), 8);
    }

    #[test]
    fn triangle_has_no_cross_springs() {
        let mut system: System<f32> = System::new(500.0, 500.0);
        system.create_ring(Vec2::new(250.0, 250.0), 40.0, 3, 2.0, 1.0, 1.0).unwrap();
        assert_eq!(system.spring_count(), 3);
    }

    #[test]
    fn centroid_of_empty_is_none() {
        let system: System<f32> = System::new(10.0, 10.0);
        assert_eq!(system.centroid(&[]), None);
    }
}
