//! Solvers for scalar equations — finding the root of a yield residual.
//!
//! A [`Residual`] maps a candidate plastic-multiplier increment to the
//! yield-condition mismatch. Solvers in this module drive that residual
//! toward zero.
//!
//! # Solvers
//!
//! - [`secant`] — probe-based secant iteration with a non-negativity safeguard
//!
//! [`Residual`]: radial_core::Residual

pub mod secant;
