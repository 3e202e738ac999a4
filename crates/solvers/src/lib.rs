//! Solvers for the radial-return plastic multiplier.
//!
//! See [`equation::secant`] for the probe-based secant iteration used to
//! drive the yield residual to zero.

pub mod equation;
