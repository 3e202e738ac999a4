//! Secant iteration for the radial-return plastic multiplier.
//!
//! # Algorithm
//!
//! Starting from an initial guess, each update evaluates the residual at the
//! current iterate and at a multiplicative probe `x * 1.01`, forms the
//! forward-difference slope between the two and takes the secant step
//! `x - g(x) / slope`. The plastic-multiplier increment cannot be negative,
//! so an update that lands below zero is reflected and damped to
//! `-0.1 * x`. The solve converges once successive iterates are closer than
//! the configured tolerance.
//!
//! # Limitations
//!
//! - **Displacement only**: Convergence is judged on `|x_next - x|`, not on
//!   the residual magnitude.
//! - **Zero start**: An iterate of exactly zero has a zero-width probe, a
//!   `0/0` slope and a NaN successor. This is not guarded.
//! - **Oscillation**: Repeated reflections near zero are only caught by the
//!   iteration bound.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per update, after the safeguard and before
//! the convergence test. Observers can return [`Action::StopEarly`] to accept
//! the current iterate immediately.
//!
//! # Failure
//!
//! Exhausting the iteration bound returns [`Error::NonConvergence`] and emits
//! a single `WARN` diagnostic through `tracing`. Nothing else is logged.

mod action;
mod config;
mod error;
mod event;
mod solution;
mod step;


pub use action::Action;
pub use config::{Config, MAX_ITERS};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use step::{PROBE_FACTOR, REFLECTION, Step, project_non_negative};

use radial_core::{Observer, Residual};

/// Finds a non-negative root of the residual using the secant iteration.
///
/// The observer receives an [`Event`] after every update.
/// See the [module docs](self) for details on event timing.
///
/// # Errors
///
/// Returns [`Error::NonConvergence`] if the iteration counter exceeds
/// [`Config::max_iters`] before the displacement tolerance is met.
pub fn solve<R, Obs>(
    residual: &R,
    init: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    R: Residual + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut x = init;
    let mut iter = 0;

    loop {
        let step = Step::take(residual, x);
        x = step.next;

        let event = Event {
            iter: iter + 1,
            step,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_step(
                &step,
                Status::StoppedByObserver,
                iter + 1,
            ));
        }

        if step.is_converged(config.x_tol()) {
            return Ok(Solution::from_step(&step, Status::Converged, iter + 1));
        }

        if iter > config.max_iters() {
            tracing::warn!(
                iters = iter + 1,
                x_tol = config.x_tol(),
                "radial return failed to converge"
            );
            return Err(Error::NonConvergence { iters: iter + 1 });
        }

        iter += 1;
    }
}

/// Finds a non-negative root of the residual without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::NonConvergence`] if the iteration counter exceeds
/// [`Config::max_iters`] before the displacement tolerance is met.
pub fn solve_unobserved<R>(residual: &R, init: f64, config: &Config) -> Result<Solution, Error>
where
    R: Residual + ?Sized,
{
    solve(residual, init, config, ())
}
