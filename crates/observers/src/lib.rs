//! Reusable observers for the radial-return solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver event exposing an iterate and a residual.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIterate`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceObserver`] — logs each event through `tracing` at `DEBUG`
//! - [`History`] — records each event, optionally stopping after a fixed count
//!
//! [`Observer`]: radial_core::Observer
//! [`HasIterate`]: traits::HasIterate
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod trace;

pub use history::{History, Record};
pub use trace::TraceObserver;
