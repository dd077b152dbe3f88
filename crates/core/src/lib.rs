//! Core traits for the numeth root-finding solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Equation`] — a scalar function `f: ℝ → ℝ` whose root is sought
//! - [`Observer`] — receives solver events and optionally returns control actions

mod equation;
mod observer;

pub use equation::Equation;
pub use observer::Observer;
