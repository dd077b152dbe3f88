//! Regula falsi (false position) for scalar equations.
//!
//! Like bisection, regula falsi keeps a sign-changing bracket. Instead of
//! the midpoint it takes the zero of the chord through both endpoints, then
//! replaces the endpoint whose residual has the same sign as the new one.
//!
//! On strongly curved equations one endpoint can stay fixed for many
//! iterations, and convergence then becomes slower than bisection. This is
//! the method's known behavior and is left as is; [`pegasus`] is the
//! accelerated variant.
//!
//! The step reported to observers and used for convergence is the change
//! from the previous estimate. Before the first iteration that estimate is
//! the initial `b`.
//!
//! [`pegasus`]: super::pegasus

use numeth_core::{Equation, Observer};

use super::{
    Action, Bracket, Config, Error, Iteration, Solution, Status,
    bracket::{Bounds, false_position},
    evaluate,
};

/// Event emitted by the regula falsi solver once per iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The chord estimate and its change from the previous estimate.
    pub iteration: Iteration,

    /// The bracket the chord was drawn through, with `f(a) <= 0 <= f(b)`.
    pub bracket: Bracket,
}

/// Finds a root of the equation within `bracket` using regula falsi.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the chord becomes flat, or
/// the equation produces a non-finite residual.
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
    let mut bracket = Bounds::new(bracket)?.evaluate(equation)?.negative_first();
    let mut point = bracket.b();

    for iter in 1..=config.max_iters() {
        let x = false_position(bracket.a(), bracket.b())?;
        let previous = point.x;
        point = evaluate(equation, x)?;
        let step = point.x - previous;

        let event = Event {
            iteration: Iteration::new(iter, point, step),
            bracket,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, point, iter));
        }

        if config.is_converged(step, point.residual) {
            return Ok(Solution::new(Status::Converged, point, iter));
        }

        bracket.replace_same_sign(point);
    }

    Ok(Solution::new(Status::MaxIters, point, config.max_iters()))
}

/// Finds a root of the equation within `bracket` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the chord becomes flat, or
/// the equation produces a non-finite residual.
pub fn solve_unobserved<F: Equation>(
    equation: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, bracket, config, ())
}
