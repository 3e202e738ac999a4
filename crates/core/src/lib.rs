//! Core traits shared by the radial-return solvers and observers.
//!
//! - [`Residual`] — a scalar yield residual `g(λ)` evaluated at a candidate
//!   plastic-multiplier increment
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod residual;

pub use observer::Observer;
pub use residual::Residual;
