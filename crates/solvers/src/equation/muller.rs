//! Muller's method for scalar equations.
//!
//! # Algorithm
//!
//! Muller's method fits the parabola
//!
//! ```text
//! p(x) = A·(x - b)² + B·(x - b) + f(b)
//! ```
//!
//! through three points `a`, `b`, `c` and steps from `b` to the parabola's
//! nearer zero:
//!
//! ```text
//! x = b - 2·f(b) / (B ± √(B² - 4·A·f(b)))
//! ```
//!
//! The sign in the denominator matches the sign of `B` (and is `+` when
//! `B == 0`), which keeps the denominator as large as possible.
//!
//! After each step the solver drops whichever of `a` and `c` lies farther
//! from the new estimate. The old `b` takes the dropped slot and the new
//! estimate becomes `b`. Only distances matter, so the guesses may be given
//! in any order.
//!
//! # Limitations
//!
//! - **Real roots only**: a negative discriminant fails with
//!   [`Error::ComplexRoot`] instead of continuing in complex arithmetic
//! - **No bracket**: like the secant method it can diverge from poor guesses

use numeth_core::{Equation, Observer};

use super::{
    Action, Config, Degeneracy, Error, Iteration, Point, Solution, Status, evaluate,
    evaluate::finite_start,
};

/// Event emitted by Muller's method once per iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The new estimate and its step from `b`.
    pub iteration: Iteration,

    /// The points `[a, b, c]` the parabola was fitted through.
    pub points: [Point; 3],
}

/// Finds a root of the equation from three guesses using Muller's method.
///
/// The guesses are `[a, b, c]` in any order; the first step is taken
/// from `b`.
///
/// # Errors
///
/// Returns an error if the guesses are non-finite or not pairwise distinct,
/// if the fitted parabola has no real zero or is flat, or if the equation
/// produces a non-finite residual.
pub fn solve<F, Obs>(
    equation: &F,
    guesses: [f64; 3],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Equation,
    Obs: Observer<Event, Action>,
{
    let [a, b, c] = guesses;
    let [a, b, c] = [finite_start(a)?, finite_start(b)?, finite_start(c)?];

    #[allow(clippy::float_cmp)]
    if a == b || b == c {
        return Err(Degeneracy::CoincidentPoints { x: b }.into());
    }
    #[allow(clippy::float_cmp)]
    if a == c {
        return Err(Degeneracy::CoincidentPoints { x: a }.into());
    }

    let mut a = evaluate(equation, a)?;
    let mut b = evaluate(equation, b)?;
    let mut c = evaluate(equation, c)?;

    for iter in 1..=config.max_iters() {
        let step = parabola_step(a, b, c)?;
        let point = evaluate(equation, b.x + step)?;

        let event = Event {
            iteration: Iteration::new(iter, point, step),
            points: [a, b, c],
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, point, iter));
        }

        if config.is_converged(step, point.residual) {
            return Ok(Solution::new(Status::Converged, point, iter));
        }

        if (point.x - a.x).abs() > (point.x - c.x).abs() {
            a = b;
        } else {
            c = b;
        }
        b = point;
    }

    Ok(Solution::new(Status::MaxIters, b, config.max_iters()))
}

/// Finds a root of the equation from three guesses without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Equation>(
    equation: &F,
    guesses: [f64; 3],
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, guesses, config, ())
}

/// Returns the step from `b` to the nearer zero of the parabola through
/// `a`, `b`, `c`.
fn parabola_step(a: Point, b: Point, c: Point) -> Result<f64, Error> {
    let h0 = a.x - b.x;
    let h1 = c.x - b.x;
    let span = c.x - a.x;

    #[allow(clippy::float_cmp)]
    if h0 == 0.0 || h1 == 0.0 || span == 0.0 {
        return Err(Degeneracy::CoincidentPoints { x: b.x }.into());
    }

    let d0 = (a.residual - b.residual) / h0;
    let d1 = (c.residual - b.residual) / h1;

    let quad = (d1 - d0) / span;
    let slope = d0 - quad * h0;

    let discriminant = slope * slope - 4.0 * quad * b.residual;
    if discriminant < 0.0 {
        return Err(Error::ComplexRoot {
            x: b.x,
            discriminant,
        });
    }

    let root = discriminant.sqrt();
    let denom = if slope >= 0.0 { slope + root } else { slope - root };

    #[allow(clippy::float_cmp)]
    if denom == 0.0 {
        return Err(Degeneracy::FlatParabola { x: b.x }.into());
    }

    Ok(-2.0 * b.residual / denom)
}
