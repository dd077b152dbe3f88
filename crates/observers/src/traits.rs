//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across the root-finding solvers.
//!
//! - [`HasIteration`] — events that carry an [`Iteration`] record
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use numeth_core::Observer;
//! use numeth_observers::traits::{CanStopEarly, HasIteration};
//! use numeth_solvers::equation::{Config, Status, bisection, secant};
//!
//! /// Stops once the residual is small, whatever the step.
//! struct GoodEnough {
//!     residual: f64,
//! }
//!
//! impl<E: HasIteration, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.iteration().residual.abs() < self.residual).then(A::stop_early)
//!     }
//! }
//!
//! let f = |x: f64| x * x - 2.0;
//! let config = Config::default();
//!
//! let a = bisection::solve(&f, [0.0, 2.0], &config, GoodEnough { residual: 1e-3 })?;
//! let b = secant::solve(&f, [1.0, 2.0], &config, GoodEnough { residual: 1e-3 })?;
//!
//! assert_eq!(a.status, Status::StoppedByObserver);
//! assert_eq!(b.status, Status::StoppedByObserver);
//! # Ok::<(), numeth_solvers::equation::Error>(())
//! ```

use numeth_solvers::equation::{
    Action, Iteration, bisection, muller, newton, pegasus, regula_falsi, secant,
};

/// An event that carries the per-iteration trace record.
pub trait HasIteration {
    /// Returns the iteration record for this event.
    fn iteration(&self) -> &Iteration;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

macro_rules! impl_has_iteration {
    ($($solver:ident),+ $(,)?) => {
        $(
            impl HasIteration for $solver::Event {
                fn iteration(&self) -> &Iteration {
                    &self.iteration
                }
            }
        )+
    };
}

impl_has_iteration!(bisection, regula_falsi, pegasus, secant, newton, muller);

impl HasIteration for Iteration {
    fn iteration(&self) -> &Iteration {
        self
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
