//! The Pegasus method for scalar equations.
//!
//! Pegasus is regula falsi with a fix for one-sided stagnation. The solver
//! keeps a retained endpoint and the latest estimate, which always straddle
//! a root. Each new estimate is the zero of the chord between them:
//!
//! - If the new residual changes sign relative to the latest estimate, the
//!   latest estimate becomes the retained endpoint.
//! - Otherwise the retained endpoint stays, but its residual is scaled by
//!   `f(b)/(f(b) + f(x))`. The scaled residual tilts the next chord toward
//!   the stale side.
//!
//! Either way, the new estimate becomes the latest one. The convergence
//! step is the change from the latest estimate.
//!
//! Unlike some textbook statements of the method, the initial pair must
//! bracket a sign change; otherwise [`solve`] fails before iterating.

use numeth_core::{Equation, Observer};

use super::{
    Action, Config, Error, Iteration, Point, Solution, Status,
    bracket::{Bounds, false_position},
    evaluate,
};

/// Event emitted by the Pegasus solver once per iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The chord estimate and its change from `latest`.
    pub iteration: Iteration,

    /// The retained endpoint, carrying its possibly scaled residual.
    pub retained: Point,

    /// The latest estimate before this iteration.
    pub latest: Point,
}

/// Finds a root of the equation within `bracket` using the Pegasus method.
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
    let bracket = Bounds::new(bracket)?.evaluate(equation)?;
    let mut retained = bracket.a();
    let mut latest = bracket.b();

    for iter in 1..=config.max_iters() {
        let point = evaluate(equation, false_position(retained, latest)?)?;
        let step = point.x - latest.x;

        let event = Event {
            iteration: Iteration::new(iter, point, step),
            retained,
            latest,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, point, iter));
        }

        if config.is_converged(step, point.residual) {
            return Ok(Solution::new(Status::Converged, point, iter));
        }

        if point.residual * latest.residual < 0.0 {
            retained = latest;
        } else {
            retained.residual *= latest.residual / (latest.residual + point.residual);
        }
        latest = point;
    }

    Ok(Solution::new(Status::MaxIters, latest, config.max_iters()))
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::equation::{BracketError, regula_falsi};

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
    fn retained_and_latest_straddle_root() {
        let f = |x: f64| x.powi(10) - 1.0;
        let config = Config::new(100, 1e-6).unwrap();

        let observer = |event: &Event| -> Option<Action> {
            assert!(event.retained.residual * event.latest.residual <= 0.0);
            None
        };

        let solution = solve(&f, [0.0, 2.0], &config, observer).unwrap();
        assert!(solution.converged());
        assert_relative_eq!(solution.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn avoids_regula_falsi_stagnation() {
        let f = |x: f64| x.powi(10) - 1.0;
        let config = Config::new(10_000, 1e-6).unwrap();

        let pegasus = solve_unobserved(&f, [0.0, 2.0], &config).unwrap();
        let falsi = regula_falsi::solve_unobserved(&f, [0.0, 2.0], &config).unwrap();

        assert!(pegasus.converged());
        assert!(pegasus.iters < 50);
        assert!(pegasus.iters * 20 < falsi.iters);
    }

    #[test]
    fn scales_retained_residual_when_sign_repeats() {
        let f = |x: f64| x.powi(10) - 1.0;
        let config = Config::new(3, 1e-12).unwrap();

        let mut events = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            events.push(*event);
            None
        };

        solve(&f, [0.0, 2.0], &config, observer).unwrap();

        // The first chord lands near zero with a negative residual, opposite
        // to f(2), so x = 2 becomes the retained endpoint. The second chord
        // lands on the negative side again and x = 2 is rescaled.
        let [first, second, third] = events[..] else {
            panic!("expected three events");
        };
        assert!(first.iteration.residual < 0.0);
        assert_relative_eq!(second.retained.x, 2.0);
        assert_relative_eq!(second.retained.residual, 1023.0);
        assert_relative_eq!(second.latest.x, first.iteration.x);

        let (f1, f2) = (first.iteration.residual, second.iteration.residual);
        assert!(f2 < 0.0);
        assert_relative_eq!(third.retained.x, 2.0);
        assert_relative_eq!(
            third.retained.residual,
            1023.0 * f1 / (f1 + f2),
            max_relative = 1e-12
        );
        assert!(third.retained.residual < 1023.0);
    }

    #[test]
    fn observer_can_stop_early() {
        let f = |x: f64| x * x * x - x - 2.0;
        let observer = |event: &Event| (event.iteration.iter == 2).then_some(Action::StopEarly);

        let solution = solve(&f, [1.0, 2.0], &Config::default(), observer).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
    }

    #[test]
    fn full_range_bracket_gives_finite_chord() {
        let f = |x: f64| x - 1.0;
        let config = Config::new(200, 1e-9).unwrap();

        let solution = solve_unobserved(&f, [-f64::MAX, f64::MAX], &config).unwrap();

        assert!(solution.converged());
        assert_relative_eq!(solution.x, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_bracket_without_sign_change() {
        let f = |x: f64| x * x - 4.0;
        let result = solve_unobserved(&f, [3.0, 5.0], &Config::default());
        assert_eq!(
            result,
            Err(Error::InvalidBracket(BracketError::NoSignChange))
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        let f = |x: f64| x.exp() - 3.0;
        let config = Config::new(100, 1e-10).unwrap();
        let first = solve_unobserved(&f, [0.0, 2.0], &config).unwrap();
        let second = solve_unobserved(&f, [0.0, 2.0], &config).unwrap();
        assert_eq!(first, second);
        assert_relative_eq!(first.x, 3.0_f64.ln(), epsilon = 1e-10);
    }
}
