use radial_core::Residual;

/// Multiplicative offset used to build the finite-difference probe.
pub const PROBE_FACTOR: f64 = 1.01;

/// Factor applied to a negative update to reflect it back onto `x >= 0`.
pub const REFLECTION: f64 = -0.1;

/// One secant update, from the previous iterate to the next.
///
/// The slope is a forward difference built from a multiplicative probe
/// `previous * PROBE_FACTOR`. A zero iterate therefore has a zero-width probe
/// and a `0/0` slope; that case is not guarded and produces non-finite values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Iterate the update started from.
    pub previous: f64,
    /// Residual at `previous`.
    pub residual: f64,
    /// Probe point `previous * PROBE_FACTOR`.
    pub probe: f64,
    /// Residual at `probe`.
    pub probe_residual: f64,
    /// Finite-difference slope between `previous` and `probe`.
    pub slope: f64,
    /// Secant update before the non-negativity safeguard.
    pub unconstrained: f64,
    /// Iterate after the safeguard.
    pub next: f64,
}

impl Step {
    /// Performs one secant update starting from `x`.
    pub fn take<R: Residual + ?Sized>(residual: &R, x: f64) -> Self {
        let g0 = residual.residual(x);
        let probe = x * PROBE_FACTOR;
        let g1 = residual.residual(probe);

        let slope = (g0 - g1) / (x - probe);
        let unconstrained = x - g0 / slope;

        Self {
            previous: x,
            residual: g0,
            probe,
            probe_residual: g1,
            slope,
            unconstrained,
            next: project_non_negative(unconstrained),
        }
    }

    /// Returns true if the safeguard replaced a negative update.
    #[must_use]
    pub fn is_reflected(&self) -> bool {
        self.unconstrained < 0.0
    }

    /// Returns the distance moved by this update.
    #[must_use]
    pub fn displacement(&self) -> f64 {
        (self.next - self.previous).abs()
    }

    /// Returns true if the displacement is strictly below `x_tol`.
    ///
    /// A non-finite displacement never converges.
    #[must_use]
    pub fn is_converged(&self, x_tol: f64) -> bool {
        self.displacement() < x_tol
    }
}

/// Reflects a negative increment onto the positive side, damped by
/// [`REFLECTION`].
///
/// Non-negative values (including `-0.0`) and NaN pass through unchanged.
#[must_use]
pub fn project_non_negative(x: f64) -> f64 {
    if x < 0.0 { REFLECTION * x } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn probe_is_multiplicative() {
        let step = Step::take(&|x: f64| x - 2.0, 4.0);

        assert_relative_eq!(step.probe, 4.04);
        assert_relative_eq!(step.residual, 2.0);
        assert_relative_eq!(step.probe_residual, 2.04, epsilon = 1e-12);
    }

    #[test]
    fn linear_slope_is_recovered() {
        let step = Step::take(&|x: f64| 3.0 * x - 6.0, 1.0);

        assert_relative_eq!(step.slope, 3.0, epsilon = 1e-10);
        assert_relative_eq!(step.next, 2.0, epsilon = 1e-10);
        assert!(!step.is_reflected());
    }

    #[test]
    fn negative_update_is_reflected_and_damped() {
        // Root at -1 pulls the raw update below zero.
        let step = Step::take(&|x: f64| x + 1.0, 1.0);

        assert!(step.is_reflected());
        assert!(step.unconstrained < 0.0);
        assert_eq!(step.next, -0.1 * step.unconstrained);
        assert_relative_eq!(step.next, 0.1, epsilon = 1e-10);
    }

    #[test]
    fn zero_iterate_gives_nan_slope() {
        let step = Step::take(&|x: f64| x - 1.0, 0.0);

        assert_eq!(step.probe, 0.0);
        assert!(step.slope.is_nan());
        assert!(step.unconstrained.is_nan());
        assert!(step.next.is_nan());
        assert!(!step.is_converged(1.0));
    }

    #[test]
    fn flat_residual_overshoots_to_infinity() {
        let step = Step::take(&|_x: f64| 1.0, 1.0);

        assert_eq!(step.slope, 0.0);
        assert!(step.next.is_infinite());
        assert!(!step.is_converged(f64::MAX));
    }

    #[test]
    fn convergence_is_strict() {
        let step = Step::take(&|x: f64| x - 2.0, 2.0);

        assert_eq!(step.displacement(), 0.0);
        assert!(!step.is_converged(0.0));
        assert!(step.is_converged(1e-300));
    }

    #[test]
    fn projection_leaves_non_negative_values() {
        assert_eq!(project_non_negative(0.5), 0.5);
        assert_eq!(project_non_negative(0.0), 0.0);
        assert!(project_non_negative(f64::NAN).is_nan());
        assert_relative_eq!(project_non_negative(-2.0), 0.2);
    }

    proptest! {
        #[test]
        fn safeguarded_iterate_is_non_negative(
            root in -100.0..-1e-3_f64,
            slope in 0.1..10.0_f64,
            x in 1e-3..100.0_f64,
        ) {
            let step = Step::take(&|v: f64| slope * (v - root), x);

            prop_assert!(step.unconstrained < 0.0);
            prop_assert!(step.next >= 0.0);
            prop_assert_eq!(step.next, REFLECTION * step.unconstrained);
        }
    }
}
