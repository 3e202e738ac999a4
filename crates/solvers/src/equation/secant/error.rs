use thiserror::Error;

/// Errors that can occur during a secant solve.
///
/// Slow convergence, divergence and non-finite residuals are not told apart;
/// all of them end in [`Error::NonConvergence`] once the bound is exhausted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("radial return failed to converge after {iters} iterations")]
    NonConvergence { iters: usize },
}
