use thiserror::Error;

use super::{BracketError, ConfigError};

/// Errors that can occur while solving an equation.
///
/// Running out of iterations is not an error; see [`Status::MaxIters`].
///
/// [`Status::MaxIters`]: super::Status::MaxIters
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("degenerate input: {0}")]
    Degenerate(#[from] Degeneracy),

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("non-finite derivative {derivative} at x = {x}")]
    NonFiniteDerivative { x: f64, derivative: f64 },

    #[error("no real root near x = {x}: discriminant {discriminant} is negative")]
    ComplexRoot { x: f64, discriminant: f64 },
}

/// Starting points or iterates that make an update formula undefined.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Degeneracy {
    #[error("non-finite starting point {x}")]
    NonFinitePoint { x: f64 },

    #[error("coincident points at x = {x}")]
    CoincidentPoints { x: f64 },

    #[error("equal residuals {residual} at x = {a} and x = {b}")]
    EqualResiduals { a: f64, b: f64, residual: f64 },

    #[error("flat parabola through x = {x}")]
    FlatParabola { x: f64 },
}
