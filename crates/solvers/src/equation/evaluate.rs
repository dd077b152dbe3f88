use numeth_core::Equation;

use super::{Degeneracy, Error};

/// An abscissa together with its residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The residual `f(x)`.
    pub residual: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, residual: f64) -> Self {
        Self { x, residual }
    }
}

/// Evaluates the equation at `x`.
///
/// # Errors
///
/// Returns [`Error::NonFiniteResidual`] if the residual is NaN or infinite.
pub fn evaluate<F: Equation + ?Sized>(equation: &F, x: f64) -> Result<Point, Error> {
    let residual = equation.residual(x);
    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }
    Ok(Point::new(x, residual))
}

/// Evaluates a derivative at `x`.
///
/// # Errors
///
/// Returns [`Error::NonFiniteDerivative`] if the value is NaN or infinite.
pub(super) fn evaluate_derivative<D: Equation + ?Sized>(
    derivative: &D,
    x: f64,
) -> Result<f64, Error> {
    let value = derivative.residual(x);
    if !value.is_finite() {
        return Err(Error::NonFiniteDerivative {
            x,
            derivative: value,
        });
    }
    Ok(value)
}

/// Checks that a caller-supplied starting point is finite.
pub(super) fn finite_start(x: f64) -> Result<f64, Error> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(Degeneracy::NonFinitePoint { x }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_returns_point() {
        let point = evaluate(&|x: f64| 2.0 * x, 1.5).expect("finite residual");
        assert_eq!(point, Point::new(1.5, 3.0));
    }

    #[test]
    fn evaluate_rejects_non_finite_residual() {
        let result = evaluate(&|x: f64| 1.0 / x, 0.0);
        assert!(matches!(result, Err(Error::NonFiniteResidual { x, .. }) if x == 0.0));

        let result = evaluate(&|x: f64| x.ln(), -1.0);
        assert!(matches!(result, Err(Error::NonFiniteResidual { .. })));
    }

    #[test]
    fn derivative_rejects_non_finite_value() {
        let result = evaluate_derivative(&|x: f64| x.sqrt(), -4.0);
        assert!(matches!(result, Err(Error::NonFiniteDerivative { .. })));
    }

    #[test]
    fn finite_start_rejects_nan_and_infinity() {
        assert!(finite_start(2.0).is_ok());
        assert!(matches!(
            finite_start(f64::NAN),
            Err(Error::Degenerate(Degeneracy::NonFinitePoint { .. }))
        ));
        assert!(finite_start(f64::NEG_INFINITY).is_err());
    }
}
