//! Golden section search with feasibility ranking.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum of a unimodal function on a closed
//! interval. It keeps two interior probes positioned by the golden ratio,
//! compares them, and discards the part of the interval beyond the worse one.
//! Probes always lie strictly inside the original interval, so the bounds are
//! never violated.
//!
//! Constrained problems report a margin alongside the objective. Two probes
//! are compared by feasibility first: a point whose margin is within
//! [`Config::margin_tol`] of non-negative beats any point that is not, and
//! between two infeasible points the smaller violation wins. Objectives only
//! break ties between feasible points. This keeps the search unimodal when the
//! feasible region is a sub-interval and the violation shrinks toward it.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation after the first:
//!
//! - [`Event::Evaluated`]: evaluation succeeded
//! - [`Event::ModelFailed`]: the model returned an error
//! - [`Event::ProblemFailed`]: the problem returned an error
//!
//! Each event carries `other`, the probe it is being compared against. The
//! first of the two opening probes produces no event because it has nothing
//! to be compared with yet.
//!
//! Observers can return [`Action::StopEarly`] to halt with the best point so
//! far, or [`Action::AssumeWorse`] to rank the point below `other`.

mod action;
mod config;
mod error;
mod event;
mod interval;
mod point;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use girder_core::{Model, Observer, OptimizationProblem};

/// Minimizes the objective over `bracket` subject to the problem's margin.
///
/// The observer receives an [`Event`] for each evaluation after the first.
/// See the [module docs](self) for event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation and the
/// observer does not return [`Action::AssumeWorse`] or [`Action::StopEarly`].
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search::search(model, problem, bracket, config, observer)
}

/// Minimizes the objective without observer support.
///
/// A convenience wrapper around [`minimize`] with a no-op observer.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, bracket, config, ())
}
