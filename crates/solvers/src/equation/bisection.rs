//! Bisection for scalar equations.
//!
//! # Algorithm
//!
//! Bisection starts from a bracket `[a, b]` with `f(a)·f(b) <= 0`, evaluates
//! the midpoint, and keeps whichever half still changes sign. The step is
//! half the current bracket width, so after `k` iterations the bracket is
//! exactly `(b - a) / 2^k` wide regardless of `f`.
//!
//! # When to Use
//!
//! - A sign-changing bracket is known (see [`bracket::scan`])
//! - Guaranteed, predictable convergence matters more than speed
//! - The equation is continuous but may be poorly behaved
//!
//! Convergence is linear. Faster bracketing alternatives are
//! [`regula_falsi`] and [`pegasus`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after evaluating the
//! midpoint and before testing convergence. The event reports the bracket
//! the midpoint was taken from.
//!
//! [`bracket::scan`]: super::bracket::scan
//! [`regula_falsi`]: super::regula_falsi
//! [`pegasus`]: super::pegasus

mod event;


pub use event::Event;

use numeth_core::{Equation, Observer};

use super::{Action, Config, Error, Iteration, Solution, Status, bracket::Bounds, evaluate};

/// Finds a root of the equation within `bracket` using bisection.
///
/// The endpoints may be given in either order.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the equation produces a
/// non-finite residual.
pub fn solve<F, Obs>(
    equation: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Equation,
    Obs: Observer<Event, Action>,
{
    let mut bracket = Bounds::new(bracket)?.evaluate(equation)?;
    let mut step = bracket.half_width();

    // Overwritten on the first iteration.
    let mut point = bracket.a();

    for iter in 1..=config.max_iters() {
        let before = bracket.as_array();

        point = evaluate(equation, bracket.midpoint())?;

        let event = Event {
            iteration: Iteration::new(iter, point, step),
            bracket: before,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, point, iter));
        }

        if config.is_converged(step, point.residual) {
            return Ok(Solution::new(Status::Converged, point, iter));
        }

        bracket.bisect(point);
        step *= 0.5;
    }

    Ok(Solution::new(Status::MaxIters, point, config.max_iters()))
}

/// Finds a root of the equation within `bracket` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the equation produces a
/// non-finite residual.
pub fn solve_unobserved<F: Equation>(
    equation: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, bracket, config, ())
}
