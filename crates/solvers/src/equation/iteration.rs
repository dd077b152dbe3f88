use super::Point;

/// Trace record of one solver iteration.
///
/// Every solver event carries one of these, so observers can trace any
/// method the same way.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iteration {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The estimate produced by this iteration.
    pub x: f64,

    /// Residual at the estimate.
    pub residual: f64,

    /// Step size used by the convergence check.
    pub step: f64,
}

impl Iteration {
    pub(super) fn new(iter: usize, point: Point, step: f64) -> Self {
        Self {
            iter,
            x: point.x,
            residual: point.residual,
            step,
        }
    }
}
