//! The simulation container: owns points and springs and runs the step pipeline.

use crate::bounds::Bounds;
use crate::collision::resolve_pair;
use crate::config::SystemConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::point::Point;
use crate::render::{Canvas, Color};
use crate::spring::{check_index, Spring};
use crate::vec::{Vec, Vec2};
use alloc::vec::Vec as AllocVec;

/// Points, springs and the parameters that drive them.
///
/// Points live in one arena and are addressed by the index returned when
/// they are added; springs refer to their endpoints by those indices.
/// Nothing is ever removed, so indices stay valid for the system's lifetime.
///
/// ```
/// use jiggle::{Color, System, Vec2};
///
/// let mut system: System<f32> = System::new(400.0, 400.0);
/// let a = system.create_point(Vec2::new(180.0, 50.0), 8.0, 1.0, Color::WHITE, false);
/// let b = system.create_point(Vec2::new(220.0, 50.0), 8.0, 1.0, Color::WHITE, false);
/// system.create_spring(a, b, 1.0, 2.0).unwrap();
///
/// system.update(1.0 / 60.0);
/// assert!(system.point(a).pos.y > 50.0);
/// ```
#[derive(Clone, Debug)]
pub struct System<F: Float> {
    points: AllocVec<Point<F>>,
    springs: AllocVec<Spring<F>>,
    config: SystemConfig<F>,
    bounds: Bounds<F>,
}

impl<F: Float> System<F> {
    /// Empty system contained in `[0, width] x [0, height]` with default
    /// gravity and damping.
    pub fn new(width: F, height: F) -> Self {
        Self::with_config(width, height, SystemConfig::new())
    }

    /// Damping in `config` is clamped to [0, 1].
    pub fn with_config(width: F, height: F, config: SystemConfig<F>) -> Self {
        let damping = config.damping;
        let config = config.with_damping(damping);
        tracing::debug!(width = ?width, height = ?height, sub_steps = config.sub_steps, "system created");
        System {
            points: AllocVec::new(),
            springs: AllocVec::new(),
            config,
            bounds: Bounds::from_size(width, height),
        }
    }

    pub fn config(&self) -> &SystemConfig<F> {
        &self.config
    }

    /// Replace the configuration. Damping is clamped to [0, 1].
    pub fn set_config(&mut self, config: SystemConfig<F>) {
        let damping = config.damping;
        self.config = config.with_damping(damping);
    }

    pub fn set_gravity(&mut self, gravity: Vec2<F>) {
        self.config.gravity = gravity;
    }

    /// Clamped to [0, 1].
    pub fn set_damping(&mut self, damping: F) {
        self.config.damping = damping.clamp(F::zero(), F::one());
    }

    pub fn bounds(&self) -> Bounds<F> {
        self.bounds
    }

    /// Replace the containment rectangle from its edges. Only the resulting
    /// width and height affect containment.
    pub fn set_bounds(&mut self, left: F, top: F, right: F, bottom: F) {
        self.bounds = Bounds::from_edges(left, top, right, bottom);
    }

    /// Resize after the drawing surface changed.
    pub fn update_screen_size(&mut self, width: F, height: F) {
        self.bounds = Bounds::from_size(width, height);
    }

    /// Append a point and return its index.
    pub fn add_point(&mut self, point: Point<F>) -> usize {
        let idx = self.points.len();
        self.points.push(point);
        idx
    }

    pub fn create_point(&mut self, pos: Vec2<F>, radius: F, mass: F, color: Color, fixed: bool) -> usize {
        let mut point = Point::new(pos, radius, mass).with_color(color);
        point.fixed = fixed;
        self.add_point(point)
    }

    /// Connect two existing points; the rest length is their current distance.
    pub fn create_spring(&mut self, a: usize, b: usize, stiffness: F, thickness: F) -> Result<usize, PhysicsError> {
        check_index(a, self.points.len())?;
        check_index(b, self.points.len())?;
        let spring = Spring::new(a, b, &self.points, stiffness).with_thickness(thickness);
        Ok(self.push_spring(spring))
    }

    /// Register a spring built elsewhere. Its endpoints must be points of this system.
    pub fn add_spring(&mut self, spring: Spring<F>) -> Result<usize, PhysicsError> {
        check_index(spring.a, self.points.len())?;
        check_index(spring.b, self.points.len())?;
        Ok(self.push_spring(spring))
    }

    fn push_spring(&mut self, spring: Spring<F>) -> usize {
        let idx = self.springs.len();
        self.springs.push(spring);
        idx
    }

    /// Advance by `dt` using the configured number of substeps.
    pub fn update(&mut self, dt: F) {
        let sub_steps = self.config.sub_steps;
        self.step(dt, sub_steps, &mut NoOpStepObserver);
    }

    /// Advance by `dt` split into `sub_steps` equal substeps. Each substep
    /// runs, in order: forces, integration, springs, bounds, collisions.
    ///
    /// Zero substeps leaves the system untouched.
    pub fn step<O: StepObserver<F>>(&mut self, dt: F, sub_steps: usize, observer: &mut O) {
        tracing::trace!(dt = ?dt, sub_steps, points = self.points.len(), "step");
        if sub_steps == 0 {
            return;
        }
        let sub_dt = dt / F::from_usize(sub_steps);

        for sub in 0..sub_steps {
            self.apply_forces();
            self.integrate_points(sub_dt);
            observer.on_integrate();
            self.satisfy_springs_observed(observer);
            self.apply_bounds();
            self.resolve_collisions_observed(observer);
            observer.on_substep_complete(sub);
        }

        observer.on_step_complete();
    }

    /// Accumulate `gravity * mass` on every point.
    pub fn apply_forces(&mut self) {
        let gravity = self.config.gravity;
        for p in self.points.iter_mut() {
            let mass = p.mass();
            p.apply_force(gravity.scale(mass));
        }
    }

    pub fn integrate_points(&mut self, dt: F) {
        for p in self.points.iter_mut() {
            p.integrate(dt);
        }
    }

    /// Run the configured number of relaxation passes over every spring.
    pub fn satisfy_springs(&mut self) {
        self.satisfy_springs_observed(&mut NoOpStepObserver);
    }

    fn satisfy_springs_observed<O: StepObserver<F>>(&mut self, observer: &mut O) {
        for i in 0..self.config.spring_iterations {
            for spring in self.springs.iter() {
                spring.satisfy(&mut self.points);
            }
            observer.on_spring_iteration(i);
        }
    }

    /// Keep every point inside the bounds.
    pub fn apply_bounds(&mut self) {
        let Bounds { width, height, .. } = self.bounds;
        let bounce = self.config.damping;
        let friction = self.config.floor_friction;
        for p in self.points.iter_mut() {
            p.constrain_to_bounds_with(width, height, bounce, friction);
        }
    }

    /// Pairwise collision pass over all `i < j`, in index order.
    pub fn resolve_collisions(&mut self) {
        self.resolve_collisions_observed(&mut NoOpStepObserver);
    }

    fn resolve_collisions_observed<O: StepObserver<F>>(&mut self, observer: &mut O) {
        let restitution = self.config.damping;
        let n = self.points.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = pair_mut(&mut self.points, i, j);
                if let Some(contact) = resolve_pair(a, b, restitution) {
                    observer.on_contact(i, j, &contact);
                }
            }
        }
    }

    /// Index of the point whose centre is closest to `pos`.
    pub fn nearest_point(&self, pos: Vec2<F>) -> Option<usize> {
        let mut nearest: Option<(usize, F)> = None;
        for (i, p) in self.points.iter().enumerate() {
            let d = p.pos.distance_sq(pos);
            match nearest {
                Some((_, best)) if best <= d => {}
                _ => nearest = Some((i, d)),
            }
        }
        nearest.map(|(i, _)| i)
    }

    /// Add `delta_velocity` to the non-fixed point nearest to `pos` and
    /// return its index.
    pub fn poke(&mut self, pos: Vec2<F>, delta_velocity: Vec2<F>) -> Option<usize> {
        let mut nearest: Option<(usize, F)> = None;
        for (i, p) in self.points.iter().enumerate().filter(|(_, p)| !p.fixed) {
            let d = p.pos.distance_sq(pos);
            match nearest {
                Some((_, best)) if best <= d => {}
                _ => nearest = Some((i, d)),
            }
        }
        let (idx, _) = nearest?;
        self.points[idx].adjust_velocity(delta_velocity);
        Some(idx)
    }

    /// Draw free points as circles, then springs as lines.
    pub fn draw<C: Canvas<F>>(&self, canvas: &mut C) {
        for p in self.points.iter().filter(|p| !p.fixed) {
            canvas.draw_circle(p.pos, p.radius, p.color);
        }
        for s in self.springs.iter() {
            canvas.draw_line(self.points[s.a].pos, self.points[s.b].pos, s.thickness, s.color);
        }
    }

    pub fn points(&self) -> &[Point<F>] { &self.points }
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
    pub fn point(&self, index: usize) -> &Point<F> { &self.points[index] }
    pub fn point_mut(&mut self, index: usize) -> &mut Point<F> { &mut self.points[index] }
    pub fn spring(&self, index: usize) -> &Spring<F> { &self.springs[index] }
    pub fn spring_mut(&mut self, index: usize) -> &mut Spring<F> { &mut self.springs[index] }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }
}

/// Two distinct mutable elements, `i < j`.
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    let (head, tail) = items.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_mut_returns_requested_elements() {
        let mut items = [1, 2, 3, 4];
        let (a, b) = pair_mut(&mut items, 1, 3);
        *a += 10;
        *b += 20;
        assert_eq!(items, [1, 12, 3, 24]);
    }

    #[test]
    fn poke_skips_fixed_points() {
        let mut system: System<f32> = System::new(100.0, 100.0);
        let anchor = system.create_point(Vec2::new(10.0, 10.0), 1.0, 1.0, Color::WHITE, true);
        let free = system.create_point(Vec2::new(50.0, 50.0), 1.0, 1.0, Color::WHITE, false);
        assert_eq!(system.nearest_point(Vec2::new(11.0, 11.0)), Some(anchor));
        assert_eq!(system.poke(Vec2::new(11.0, 11.0), Vec2::new(3.0, 0.0)), Some(free));
        assert_eq!(system.point(free).velocity(), Vec2::new(3.0, 0.0));
    }

    #[test]
    fn poke_empty_system() {
        let mut system: System<f64> = System::new(10.0, 10.0);
        assert_eq!(system.poke(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)), None);
    }

    #[test]
    fn set_damping_clamps() {
        let mut system: System<f32> = System::new(10.0, 10.0);
        system.set_damping(2.0);
        assert_eq!(system.config().damping, 1.0);
    }
}
