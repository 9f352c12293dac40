use girder_core::Snapshot;

/// Why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The probes converged according to the configured tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a golden section search.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the optimum x.
    pub x: f64,

    /// Objective value at the reported x.
    pub objective: f64,

    /// Constraint margin at the reported x.
    pub margin: f64,

    /// Whether the reported point satisfies the constraint within tolerance.
    pub feasible: bool,

    /// Snapshot at the reported x.
    pub snapshot: Snapshot<I, O>,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns `true` if the search converged on a feasible point.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == Status::Converged && self.feasible
    }
}
