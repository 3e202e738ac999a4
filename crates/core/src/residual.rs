/// A scalar residual evaluated at a candidate plastic-multiplier increment.
///
/// Implementations are expected to be pure: the solver may evaluate the same
/// point more than once and relies on getting the same value back.
///
/// Any `Fn(f64) -> f64` implements this trait, so most callers pass a closure
/// that captures the trial stress state.
pub trait Residual {
    /// Evaluates the residual at `x`.
    fn residual(&self, x: f64) -> f64;
}

impl<F> Residual for F
where
    F: Fn(f64) -> f64,
{
    fn residual(&self, x: f64) -> f64 {
        self(x)
    }
}
