use super::Step;

/// Event emitted by the secant solver after each update.
///
/// The event is emitted after the non-negativity safeguard and before the
/// convergence test, so `step.next` is the iterate the solver is about to
/// test against the tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The update that produced the current iterate.
    pub step: Step,
}

impl Event {
    /// Returns the current iterate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.step.next
    }

    /// Returns the residual at the iterate the update started from.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.step.residual
    }
}
