use radial_core::Observer;

use crate::traits::{HasIterate, HasResidual};

/// An observer that logs each event at `DEBUG` through `tracing`.
///
/// Every event is tagged with a `label` field so that logs from many
/// material points can be told apart. The observer never requests an action.
#[derive(Debug, Clone)]
pub struct TraceObserver {
    label: String,
}

impl TraceObserver {
    /// Creates a tracing observer with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the label attached to each event.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        tracing::debug!(
            label = %self.label,
            iter = event.iter(),
            x = event.x(),
            residual = event.residual(),
            "secant update"
        );
        None
    }
}

impl<E, A> Observer<E, A> for &mut TraceObserver
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use radial_solvers::equation::secant::{self, Config, Status};
    use tracing::{Level, Subscriber};
    use tracing_subscriber::{
        Layer,
        layer::{Context, SubscriberExt},
        registry::Registry,
    };

    /// Counts events per level while installed.
    #[derive(Clone, Default)]
    struct LevelCounter {
        debug: Arc<AtomicUsize>,
        warn: Arc<AtomicUsize>,
    }

    impl<S: Subscriber> Layer<S> for LevelCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            match *event.metadata().level() {
                Level::DEBUG => self.debug.fetch_add(1, Ordering::SeqCst),
                Level::WARN => self.warn.fetch_add(1, Ordering::SeqCst),
                _ => 0,
            };
        }
    }

    #[test]
    fn logs_one_debug_event_per_update() {
        let counter = LevelCounter::default();
        let subscriber = Registry::default().with(counter.clone());

        let solution = tracing::subscriber::with_default(subscriber, || {
            let g = |x: f64| x * x - 4.0;
            secant::solve(&g, 1.0, &Config::new(1e-10), TraceObserver::new("point-0"))
        })
        .expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(counter.debug.load(Ordering::SeqCst), solution.iters);
        assert_eq!(counter.warn.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failure_adds_single_warning() {
        let counter = LevelCounter::default();
        let subscriber = Registry::default().with(counter.clone());
        let config = Config::default().with_max_iters(4);

        let mut observer = TraceObserver::new("point-1");
        let result = tracing::subscriber::with_default(subscriber, || {
            let g = |_x: f64| 1.0;
            secant::solve(&g, 1.0, &config, &mut observer)
        });

        assert!(result.is_err());
        assert_eq!(counter.debug.load(Ordering::SeqCst), 6);
        assert_eq!(counter.warn.load(Ordering::SeqCst), 1);
        assert_eq!(observer.label(), "point-1");
    }
}
