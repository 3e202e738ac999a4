/// Default bound on the iteration counter.
pub const MAX_ITERS: usize = 100;

/// Configuration for the secant solver.
///
/// Tolerances are taken as given: a negative or NaN `x_tol` is accepted and
/// simply never converges, ending the solve in
/// [`Error::NonConvergence`](super::Error::NonConvergence).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    x_tol: f64,
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(1e-12)
    }
}

impl Config {
    /// Creates a config with the given displacement tolerance and the default
    /// iteration bound.
    #[must_use]
    pub fn new(x_tol: f64) -> Self {
        Self {
            x_tol,
            max_iters: MAX_ITERS,
        }
    }

    /// Replaces the iteration bound.
    #[must_use]
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Returns the tolerance on successive iterate displacement.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }

    /// Returns the bound on the iteration counter.
    ///
    /// The counter starts at zero and the solver gives up once it exceeds this
    /// bound, so at most `max_iters + 2` updates are performed.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
