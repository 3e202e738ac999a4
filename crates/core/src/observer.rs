/// Hook a solver calls once per iteration with a solver-specific event.
///
/// A solver passes each event `E` to the observer. The observer may return
/// `Some(action)` to steer the solve (for the secant solver, to stop early)
/// or `None` to leave it untouched. Loggers and iteration recorders are
/// observers that always return `None`.
///
/// Pass `()` when no observation is needed, or a closure taking `&E`.
pub trait Observer<E, A> {
    /// Inspects one event and returns the action to apply, if any.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Closures taking `&E` can be passed directly as observers.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// `()` observes nothing and never acts.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
