//! Step observer trait for monitoring the simulation pipeline.

use crate::collision::Contact;
use crate::float::Float;

/// Trait for observing simulation steps.
///
/// Implement this to watch solver progress (debug overlays, profiling,
/// sound triggers on impacts). All methods default to no-ops.
pub trait StepObserver<F: Float> {
    /// Called after all points have been integrated in a substep.
    fn on_integrate(&mut self) {}

    /// Called after each spring relaxation pass.
    fn on_spring_iteration(&mut self, _iteration: usize) {}

    /// Called for every pair that needed collision resolution.
    fn on_contact(&mut self, _a: usize, _b: usize, _contact: &Contact<F>) {}

    /// Called once a substep has run all stages.
    fn on_substep_complete(&mut self, _substep: usize) {}

    /// Called when a full update is complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

/// Emits `tracing` events for every stage and a per-update summary.
#[derive(Debug, Default)]
pub struct TracingStepObserver {
    substeps: usize,
    contacts: usize,
    impulses: usize,
}

impl TracingStepObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: Float> StepObserver<F> for TracingStepObserver {
    fn on_spring_iteration(&mut self, iteration: usize) {
        tracing::trace!(iteration, "spring pass");
    }

    fn on_contact(&mut self, a: usize, b: usize, contact: &Contact<F>) {
        self.contacts += 1;
        if let Contact::Impulse { .. } = contact {
            self.impulses += 1;
        }
        tracing::trace!(a, b, contact = ?contact, "contact");
    }

    fn on_substep_complete(&mut self, substep: usize) {
        self.substeps += 1;
        tracing::trace!(substep, "substep complete");
    }

    fn on_step_complete(&mut self) {
        tracing::debug!(
            substeps = self.substeps,
            contacts = self.contacts,
            impulses = self.impulses,
            "step complete"
        );
        *self = Self::default();
    }
}
