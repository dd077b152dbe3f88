//! Reusable observers for the numeth root-finding solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver in [`numeth_solvers::equation`].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIteration`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — writes one `log` record per iteration
//! - [`History`] — keeps every iteration record in memory
//!
//! [`Observer`]: numeth_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod logging;

pub use history::History;
pub use logging::LogObserver;
