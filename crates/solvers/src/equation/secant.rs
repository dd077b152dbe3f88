//! The secant method for scalar equations.
//!
//! The secant method keeps the two most recent points and steps to the zero
//! of the line through them. No bracket is maintained, so the method can
//! diverge; it converges superlinearly (order ≈ 1.618) near a simple root.
//!
//! Before iterating, the point with the larger residual magnitude becomes
//! `a`, so the first step starts from the better of the two guesses.

use numeth_core::{Equation, Observer};

use super::{
    Action, Config, Degeneracy, Error, Iteration, Point, Solution, Status,
    evaluate,
    evaluate::finite_start,
};

/// Event emitted by the secant solver once per iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The new estimate and the step that produced it.
    pub iteration: Iteration,

    /// The previous and current points the secant line was drawn through.
    pub points: [Point; 2],
}

/// Finds a root of the equation starting from two guesses.
///
/// # Errors
///
/// Fails before iterating if the guesses are non-finite, coincide, or have
/// equal residuals. Fails during iteration if the residuals of the two
/// latest points become equal or the equation produces a non-finite
/// residual.
pub fn solve<F, Obs>(
    equation: &F,
    guesses: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Equation,
    Obs: Observer<Event, Action>,
{
    let [a, b] = guesses;
    let (a, b) = (finite_start(a)?, finite_start(b)?);

    #[allow(clippy::float_cmp)]
    if a == b {
        return Err(Degeneracy::CoincidentPoints { x: a }.into());
    }

    let mut a = evaluate(equation, a)?;
    let mut b = evaluate(equation, b)?;
    secant_step(a, b)?;

    if a.residual.abs() < b.residual.abs() {
        std::mem::swap(&mut a, &mut b);
    }

    for iter in 1..=config.max_iters() {
        let step = secant_step(a, b)?;
        let point = evaluate(equation, b.x + step)?;

        let event = Event {
            iteration: Iteration::new(iter, point, step),
            points: [a, b],
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, point, iter));
        }

        if config.is_converged(step, point.residual) {
            return Ok(Solution::new(Status::Converged, point, iter));
        }

        a = b;
        b = point;
    }

    Ok(Solution::new(Status::MaxIters, b, config.max_iters()))
}

/// Finds a root of the equation from two guesses without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Equation>(
    equation: &F,
    guesses: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, guesses, config, ())
}

/// Returns `-f(b)·(b - a)/(f(b) - f(a))`.
fn secant_step(a: Point, b: Point) -> Result<f64, Error> {
    let denom = b.residual - a.residual;

    #[allow(clippy::float_cmp)]
    if denom == 0.0 {
        return Err(Degeneracy::EqualResiduals {
            a: a.x,
            b: b.x,
            residual: b.residual,
        }
        .into());
    }

    Ok(-b.residual * (b.x - a.x) / denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;

    #[test]
    fn finds_root_of_cubic() {
        let f = |x: f64| x * x * x - x - 2.0;
        let config = Config::new(50, 1e-10).unwrap();

        let solution = solve_unobserved(&f, [1.0, 2.0], &config).unwrap();

        assert!(solution.converged());
        assert!(solution.iters <= 10);
        assert!(solution.residual.abs() <= config.tolerance());
        assert_relative_eq!(solution.x, 1.521_379_706_804_567_6, epsilon = 1e-10);
    }

    #[test]
    fn starts_from_smaller_residual() {
        let f = |x: f64| x * x - 2.0;

        let mut first = None;
        let observer = |event: &Event| -> Option<Action> {
            first.get_or_insert(event.points);
            None
        };

        solve(&f, [1.5, 5.0], &Config::default(), observer).unwrap();

        let [a, b] = first.expect("at least one iteration");
        assert_relative_eq!(a.x, 5.0);
        assert_relative_eq!(b.x, 1.5);
    }

    #[test]
    fn equal_residuals_fail_before_iterating() {
        let f = |x: f64| x * x;

        let mut events = 0;
        let observer = |_: &Event| -> Option<Action> {
            events += 1;
            None
        };

        let result = solve(&f, [-1.0, 1.0], &Config::default(), observer);

        assert_eq!(
            result,
            Err(Error::Degenerate(Degeneracy::EqualResiduals {
                a: -1.0,
                b: 1.0,
                residual: 1.0,
            }))
        );
        assert_eq!(events, 0);
    }

    #[test]
    fn coincident_guesses_fail_without_evaluating() {
        let calls = Cell::new(0);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x - 1.0
        };

        let result = solve_unobserved(&f, [2.0, 2.0], &Config::default());

        assert_eq!(
            result,
            Err(Error::Degenerate(Degeneracy::CoincidentPoints { x: 2.0 }))
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn rejects_non_finite_guess() {
        let f = |x: f64| x;
        let result = solve_unobserved(&f, [f64::NAN, 1.0], &Config::default());
        assert!(matches!(
            result,
            Err(Error::Degenerate(Degeneracy::NonFinitePoint { .. }))
        ));
    }

    #[test]
    fn divergence_outside_domain_is_an_error() {
        // The first step lands on x = -1, where sqrt is undefined.
        let f = |x: f64| x.sqrt() - 1.0;

        let result = solve_unobserved(&f, [4.0, 9.0], &Config::default());

        assert!(matches!(result, Err(Error::NonFiniteResidual { x, .. }) if x == -1.0));
    }

    #[test]
    fn reports_max_iters_for_slow_start() {
        let f = |x: f64| x.atan();
        let config = Config::new(3, 1e-12).unwrap();

        let solution = solve_unobserved(&f, [0.5, 0.4], &config).unwrap();

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 3);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let f = |x: f64| x.cos() - x;
        let config = Config::new(50, 1e-12).unwrap();
        let first = solve_unobserved(&f, [0.0, 1.0], &config).unwrap();
        let second = solve_unobserved(&f, [0.0, 1.0], &config).unwrap();
        assert_eq!(first, second);
        assert!(first.converged());
    }
}
