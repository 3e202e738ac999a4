/// Actions an observer can take during a secant solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and accept the current iterate.
    StopEarly,
}
