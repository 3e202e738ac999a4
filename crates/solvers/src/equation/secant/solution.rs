use super::Step;

/// Indicates why the solver returned a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The displacement between successive iterates fell below the tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    ///
    /// The displacement tolerance was not checked for the returned iterate.
    StoppedByObserver,
}

/// The result of a secant solve.
///
/// Only [`Status::Converged`] means the tolerance was met. A solve without an
/// observer always returns that status; an observer stop returns
/// [`Status::StoppedByObserver`] with the iterate the solver had reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Accepted plastic-multiplier increment.
    pub x: f64,

    /// Iterate immediately before `x`.
    pub previous: f64,

    /// Number of secant updates performed.
    pub iters: usize,
}

impl Solution {
    pub(super) fn from_step(step: &Step, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: step.next,
            previous: step.previous,
            iters,
        }
    }

    /// Returns true if the displacement tolerance was met.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the displacement of the final update.
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.x - self.previous).abs()
    }
}
