use radial_core::Observer;

use crate::traits::{CanStopEarly, HasIterate, HasResidual};

/// A single recorded solver event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Iteration counter of the event.
    pub iter: usize,
    /// Iterate produced by the event.
    pub x: f64,
    /// Residual carried by the event.
    pub residual: f64,
}

/// An observer that records every event it sees.
///
/// With [`History::stop_after`], the observer also requests an early stop once
/// a fixed number of events has been recorded.
///
/// Pass `&mut History` to the solver to keep access to the records afterwards:
///
/// ```rust
/// use radial_observers::History;
/// use radial_solvers::equation::secant::{self, Config};
///
/// let mut history = History::new();
/// let g = |x: f64| x * x - 4.0;
/// let solution = secant::solve(&g, 1.0, &Config::new(1e-10), &mut history).unwrap();
///
/// assert_eq!(history.len(), solution.iters);
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<Record>,
    limit: Option<usize>,
}

impl History {
    /// Creates an empty history with no event limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history that stops the solver after `limit` events.
    #[must_use]
    pub fn stop_after(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Returns the recorded events in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the recorded iterates.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|record| record.x)
    }

    /// Returns the recorded residuals.
    pub fn residuals(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|record| record.residual)
    }

    /// Records a single event.
    pub fn record(&mut self, record: Record) {
        self.records.push(record);
    }

    fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.records.len() >= limit)
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasIterate + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(Record {
            iter: event.iter(),
            x: event.x(),
            residual: event.residual(),
        });
        self.is_full().then(A::stop_early)
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the records can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut History
where
    E: HasIterate + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use radial_solvers::equation::secant::{self, Config, Status};

    #[test]
    fn records_every_update() {
        let mut history = History::new();
        let g = |x: f64| x * x - 4.0;

        let solution =
            secant::solve(&g, 1.0, &Config::new(1e-10), &mut history).expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(history.len(), solution.iters);

        let iters: Vec<usize> = history.records().iter().map(|r| r.iter).collect();
        let expected: Vec<usize> = (1..=solution.iters).collect();
        assert_eq!(iters, expected);

        let last = history.xs().last().expect("at least one record");
        assert_relative_eq!(last, solution.x);
    }

    #[test]
    fn residuals_shrink_toward_root() {
        let mut history = History::new();
        let g = |x: f64| x * x - 4.0;

        secant::solve(&g, 5.0, &Config::new(1e-10), &mut history).expect("should converge");

        let residuals: Vec<f64> = history.residuals().map(f64::abs).collect();
        assert!(residuals.len() >= 2);
        assert!(residuals[residuals.len() - 1] < residuals[0]);
    }

    #[test]
    fn stop_after_limits_iterations() {
        let mut history = History::stop_after(3);
        let g = |_x: f64| 1.0;

        let solution =
            secant::solve(&g, 1.0, &Config::default(), &mut history).expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn empty_history() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.xs().count(), 0);
    }
}
