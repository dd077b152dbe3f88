//! Classical root-finding solvers.
//!
//! Every solver in [`equation`] drives a scalar [`Equation`] toward a root
//! under the same contract: a validated [`Config`] bounds the iteration count
//! and sets the tolerance of the dual stopping criterion, an [`Observer`]
//! sees one event per iteration, and the outcome is a [`Solution`] whose
//! [`Status`] distinguishes convergence from an exhausted budget.
//!
//! [`Equation`]: numeth_core::Equation
//! [`Observer`]: numeth_core::Observer
//! [`Config`]: equation::Config
//! [`Solution`]: equation::Solution
//! [`Status`]: equation::Status

pub mod equation;
