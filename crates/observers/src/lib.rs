//! Reusable observers for Girder.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers and the design optimizer.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasMargin`], [`CanStopEarly`], [`CanAssumeWorse`])
//! - [`Trace`]: records the objective and margin of every event, e.g. to plot
//!   cost against safety margin
//!
//! [`Observer`]: girder_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasMargin`]: traits::HasMargin
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod trace;

pub use trace::{Sample, Trace};
