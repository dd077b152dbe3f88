use numeth_core::Observer;
use numeth_solvers::equation::Iteration;

use crate::traits::HasIteration;

/// An observer that records every [`Iteration`] a solver reports.
///
/// Pass `&mut History` as the observer to inspect the trace once the solve
/// returns. It never requests an action.
///
/// # Example
///
/// ```rust
/// use numeth_observers::History;
/// use numeth_solvers::equation::{Config, newton};
///
/// let mut history = History::new();
/// let solution = newton::solve(
///     &|x: f64| x * x - 2.0,
///     &|x: f64| 2.0 * x,
///     1.0,
///     &Config::default(),
///     &mut history,
/// )?;
///
/// assert_eq!(history.len(), solution.iters);
/// # Ok::<(), numeth_solvers::equation::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    iterations: Vec<Iteration>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded iterations in order.
    #[must_use]
    pub fn iterations(&self) -> &[Iteration] {
        &self.iterations
    }

    /// Returns the most recent iteration, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Iteration> {
        self.iterations.last()
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iterations.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }

    /// Returns the recorded steps, in order.
    pub fn steps(&self) -> impl Iterator<Item = f64> + '_ {
        self.iterations.iter().map(|iteration| iteration.step)
    }

    /// Removes all recorded iterations so the history can be reused.
    pub fn clear(&mut self) {
        self.iterations.clear();
    }

    /// Consumes the history and returns the recorded iterations.
    #[must_use]
    pub fn into_inner(self) -> Vec<Iteration> {
        self.iterations
    }
}

impl<E: HasIteration, A> Observer<E, A> for History {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.iterations.push(*event.iteration());
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the trace can be read after the solve completes.
impl<E: HasIteration, A> Observer<E, A> for &mut History {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numeth_solvers::equation::{Config, Status, bisection, muller, pegasus};

    #[test]
    fn records_one_entry_per_iteration() {
        let f = |x: f64| x * x * x - x - 2.0;
        let config = Config::new(100, 1e-10).unwrap();

        let mut history = History::new();
        let solution = pegasus::solve(&f, [1.0, 2.0], &config, &mut history).unwrap();

        assert!(solution.converged());
        assert_eq!(history.len(), solution.iters);

        let numbers: Vec<usize> = history.iterations().iter().map(|i| i.iter).collect();
        let expected: Vec<usize> = (1..=solution.iters).collect();
        assert_eq!(numbers, expected);

        let last = history.last().expect("at least one iteration");
        assert_relative_eq!(last.x, solution.x);
        assert_relative_eq!(last.residual, solution.residual);
    }

    #[test]
    fn bisection_steps_halve() {
        let f = |x: f64| x - 0.3;
        let config = Config::new(12, 1e-12).unwrap();

        let mut history = History::new();
        let solution = bisection::solve(&f, [0.0, 1.0], &config, &mut history).unwrap();

        assert_eq!(solution.status, Status::MaxIters);
        let steps: Vec<f64> = history.steps().collect();
        for pair in steps.windows(2) {
            assert_relative_eq!(pair[1], 0.5 * pair[0]);
        }
    }

    #[test]
    fn clear_allows_reuse() {
        let f = |x: f64| x * x - 4.0;
        let config = Config::default();

        let mut history = History::new();
        muller::solve(&f, [0.0, 1.0, 3.0], &config, &mut history).unwrap();
        assert_eq!(history.len(), 2);

        history.clear();
        assert!(history.is_empty());

        muller::solve(&f, [0.0, 1.0, 3.0], &config, &mut history).unwrap();
        assert_eq!(history.into_inner().len(), 2);
    }

    #[test]
    fn records_nothing_when_solver_fails_early() {
        let f = |x: f64| x * x + 1.0;

        let mut history = History::new();
        let result = bisection::solve(&f, [-1.0, 1.0], &Config::default(), &mut history);

        assert!(result.is_err());
        assert!(history.is_empty());
    }
}
