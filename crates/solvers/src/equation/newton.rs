//! Newton's method for scalar equations.
//!
//! Each iteration steps by `-f(x)/f'(x)`, the zero of the tangent line, then
//! re-evaluates both the equation and its derivative at the new estimate.
//! Near a simple root convergence is quadratic. From a poor starting point
//! the iterates can diverge or cycle; that surfaces as [`Status::MaxIters`]
//! or a non-finite residual error.
//!
//! # Zero derivative
//!
//! The derivative is checked at the starting point and after every
//! iteration. When it is exactly zero the next step is undefined and the
//! solver stops:
//!
//! - with [`Status::Converged`] if `|f(x)|` is already within tolerance,
//! - otherwise with [`Status::ZeroDerivative`], which does not count as
//!   converged.
//!
//! A zero derivative at the starting point returns with `iters == 0`.

use numeth_core::{Equation, Observer};

use super::{
    Action, Config, Error, Iteration, Point, Solution, Status, evaluate,
    evaluate::{evaluate_derivative, finite_start},
};

/// Event emitted by Newton's method once per iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The new estimate and the Newton step that produced it.
    pub iteration: Iteration,

    /// The derivative at the new estimate.
    pub derivative: f64,
}

/// Finds a root of the equation from `x0` using Newton's method.
///
/// `derivative` must evaluate `f'(x)` for the same equation.
///
/// # Errors
///
/// Returns an error if `x0` is non-finite, or if the equation or its
/// derivative produces a non-finite value.
pub fn solve<F, D, Obs>(
    equation: &F,
    derivative: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Equation,
    D: Equation,
    Obs: Observer<Event, Action>,
{
    let mut point = evaluate(equation, finite_start(x0)?)?;
    let mut slope = evaluate_derivative(derivative, point.x)?;

    #[allow(clippy::float_cmp)]
    if slope == 0.0 {
        return Ok(stalled(point, 0, config));
    }

    for iter in 1..=config.max_iters() {
        let step = -point.residual / slope;
        point = evaluate(equation, point.x + step)?;
        slope = evaluate_derivative(derivative, point.x)?;

        let event = Event {
            iteration: Iteration::new(iter, point, step),
            derivative: slope,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, point, iter));
        }

        if config.is_converged(step, point.residual) {
            return Ok(Solution::new(Status::Converged, point, iter));
        }

        #[allow(clippy::float_cmp)]
        if slope == 0.0 {
            return Ok(stalled(point, iter, config));
        }
    }

    Ok(Solution::new(Status::MaxIters, point, config.max_iters()))
}

/// Finds a root of the equation from `x0` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `x0` is non-finite, or if the equation or its
/// derivative produces a non-finite value.
pub fn solve_unobserved<F, D>(
    equation: &F,
    derivative: &D,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Equation,
    D: Equation,
{
    solve(equation, derivative, x0, config, ())
}

/// Outcome when the derivative vanishes at `point`.
fn stalled(point: Point, iters: usize, config: &Config) -> Solution {
    let status = if point.residual.abs() <= config.tolerance() {
        Status::Converged
    } else {
        Status::ZeroDerivative
    };
    Solution::new(status, point, iters)
}
