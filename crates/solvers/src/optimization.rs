//! Solvers for bounded, constrained minimization problems.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective plus a constraint
//! margin. Solvers in this module search for the `x` that minimizes the
//! objective while keeping the margin non-negative.
//!
//! # Solvers
//!
//! - [`golden_section`]: derivative-free bracketed search for a single
//!   variable, ranking points by feasibility before objective
//!
//! [`OptimizationProblem`]: girder_core::OptimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod golden_section;
