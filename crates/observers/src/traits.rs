//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types so an
//! observer can be written once and used with any solver whose events expose
//! the values it needs.
//!
//! # Event traits
//!
//! - [`HasObjective`]: events that carry an objective value
//! - [`HasMargin`]: events that carry a constraint margin
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//! - [`CanAssumeWorse`]: actions that can rank a point below its competitor
//!
//! # Example
//!
//! ```rust
//! use girder_core::Observer;
//! use girder_observers::traits::{CanStopEarly, HasMargin, HasObjective};
//!
//! /// Stops as soon as a feasible point is cheaper than `budget`.
//! struct WithinBudget {
//!     budget: f64,
//! }
//!
//! impl<E: HasObjective + HasMargin, A: CanStopEarly> Observer<E, A> for WithinBudget {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let affordable = event.objective() <= self.budget && event.margin() >= 0.0;
//!         affordable.then(A::stop_early)
//!     }
//! }
//! ```

use girder_core::{Model, OptimizationProblem};
use girder_solvers::optimization::golden_section;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// An event that carries a constraint margin.
pub trait HasMargin {
    /// Returns the constraint margin for this event; non-negative is feasible.
    ///
    /// Returns `f64::NAN` when the event represents an error and no margin is
    /// available.
    fn margin(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can rank an evaluation below its competitor.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as the worse one.
    fn assume_worse() -> Self;
}

// --- golden_section::Event ---

impl<M, P> HasObjective for golden_section::Event<'_, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn objective(&self) -> f64 {
        self.point().map_or(f64::NAN, |point| point.objective)
    }
}

impl<M, P> HasMargin for golden_section::Event<'_, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn margin(&self) -> f64 {
        self.point().map_or(f64::NAN, |point| point.margin)
    }
}

// --- golden_section::Action ---

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for golden_section::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}
