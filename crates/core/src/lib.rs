//! Core traits and types for the Girder workspace.
//!
//! This crate defines the abstractions the solvers and the design optimizer
//! share:
//!
//! - [`Model`] maps a typed input to a typed output
//! - [`Snapshot`] is a captured input/output pair from a model call
//! - [`Observer`] receives solver events and may return control actions
//! - [`OptimizationProblem`] adapts solver variables to model inputs and
//!   extracts an objective and a constraint margin from outputs

mod model;
mod observer;
mod problems;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problems::OptimizationProblem;
