use super::Point;

/// Indicates how an equation solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Step and residual both met the tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Newton's method reached a zero derivative with the residual still
    /// outside the tolerance.
    ZeroDerivative,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an equation solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Last estimate of the root.
    pub x: f64,

    /// Residual at the reported estimate.
    pub residual: f64,

    /// Number of iterations performed.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(status: Status, point: Point, iters: usize) -> Self {
        Self {
            status,
            x: point.x,
            residual: point.residual,
            iters,
        }
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
