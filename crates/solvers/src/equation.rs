//! Solvers for scalar equations: finding `x` such that `f(x) = 0`.
//!
//! An [`Equation`] maps `x` to a residual. Solvers in this module drive that
//! residual toward zero and all share one convergence policy:
//!
//! - At most [`Config::max_iters`] iterations run, numbered from 1.
//! - Each iteration produces an estimate `x`, its residual `f(x)`, and a
//!   step (the change in `x`, or half the bracket width for bisection).
//! - The solve converges when **both** `|step| <= tolerance` and
//!   `|f(x)| <= tolerance` hold ([`Config::is_converged`]).
//! - Exhausting the budget is not an error: the solver returns the last
//!   estimate with [`Status::MaxIters`].
//!
//! Precondition violations (no sign change, coincident starting points) fail
//! before the first iteration. Degeneracies met mid-iteration (a zero
//! denominator, a negative discriminant, a non-finite residual) are returned
//! as errors rather than producing a wrong answer.
//!
//! # Solvers
//!
//! Bracketing, keeping a sign change across an interval:
//!
//! - [`bisection`] — halves the bracket, linear and guaranteed
//! - [`regula_falsi`] — false position, may stagnate on one endpoint
//! - [`pegasus`] — false position with a weighted retained endpoint
//!
//! Open, keeping a few recent points and no sign change:
//!
//! - [`secant`] — two points, order ≈ 1.618
//! - [`newton`] — one point plus the derivative, quadratic
//! - [`muller`] — three points fitted with a parabola
//!
//! # Observers
//!
//! Each solver emits its own `Event` after evaluating the new estimate and
//! before testing convergence. Every event carries an [`Iteration`] record.
//! Returning [`Action::StopEarly`] ends the solve with
//! [`Status::StoppedByObserver`] at the current estimate.
//!
//! [`Equation`]: numeth_core::Equation

mod action;
mod config;
mod error;
mod evaluate;
mod iteration;
mod solution;

pub mod bracket;

pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError};
pub use error::{Degeneracy, Error};
pub use evaluate::{Point, evaluate};
pub use iteration::Iteration;
pub use solution::{Solution, Status};

pub mod bisection;
pub mod muller;
pub mod newton;
pub mod pegasus;
pub mod regula_falsi;
pub mod secant;
