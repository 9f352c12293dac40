//! Numerical solvers for Girder problems.
//!
//! Solvers take a [`Model`] and a problem describing how solver variables map
//! onto model inputs, then search for the variables that best satisfy the
//! problem. Every solver accepts an [`Observer`] so callers can trace or steer
//! the search without a global logger.
//!
//! [`Model`]: girder_core::Model
//! [`Observer`]: girder_core::Observer

pub mod optimization;
