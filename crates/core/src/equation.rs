/// A scalar equation `f(x) = 0` that solvers drive toward a root.
///
/// The residual `f(x)` is all a solver sees of the equation. Any
/// `Fn(f64) -> f64` closure or function pointer is an `Equation`, so the
/// common case needs no wrapper type:
///
/// ```
/// use numeth_core::Equation;
///
/// let f = |x: f64| x * x - 2.0;
/// assert_eq!(f.residual(2.0), 2.0);
/// ```
///
/// Evaluation takes `&self`, so an equation is never mutated by a solve and
/// repeated solves with the same inputs see the same residuals. Newton's
/// method takes its derivative as a second `Equation`.
pub trait Equation {
    /// Evaluates the residual `f(x)`.
    fn residual(&self, x: f64) -> f64;
}

impl<F> Equation for F
where
    F: Fn(f64) -> f64,
{
    fn residual(&self, x: f64) -> f64 {
        self(x)
    }
}
