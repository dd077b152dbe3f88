use log::Level;
use numeth_core::Observer;

use crate::traits::HasIteration;

/// An observer that writes one [`log`] record per solver iteration.
///
/// Each record carries the iteration number, estimate, residual, and step.
/// Records go to the `numeth` target at [`Level::Debug`] unless configured
/// otherwise; the application's logger decides whether they are shown.
///
/// # Example
///
/// ```rust
/// use log::Level;
/// use numeth_observers::LogObserver;
/// use numeth_solvers::equation::{Config, secant};
///
/// let observer = LogObserver::new().target("root").level(Level::Info);
/// let solution = secant::solve(&|x: f64| x.cos() - x, [0.0, 1.0], &Config::default(), observer)?;
///
/// assert!(solution.converged());
/// # Ok::<(), numeth_solvers::equation::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogObserver {
    target: String,
    level: Level,
    records: usize,
}

impl LogObserver {
    /// Creates a log observer with the `numeth` target at debug level.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: "numeth".to_owned(),
            level: Level::Debug,
            records: 0,
        }
    }

    /// Sets the log target.
    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets the log level.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Returns the number of iterations observed so far.
    ///
    /// Counted even when the logger filters the records out.
    #[must_use]
    pub fn records(&self) -> usize {
        self.records
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: HasIteration, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        let it = event.iteration();
        log::log!(
            target: &self.target,
            self.level,
            "iter {}: x = {:e}, residual = {:e}, step = {:e}",
            it.iter,
            it.x,
            it.residual,
            it.step
        );
        self.records += 1;
        None
    }
}

/// Allows `&mut LogObserver` to be passed to solvers that take an observer by
/// value, so [`LogObserver::records`] can be read after the solve completes.
impl<E: HasIteration, A> Observer<E, A> for &mut LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
