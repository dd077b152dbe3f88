//! Sign-changing intervals for the bracketing solvers.
//!
//! A [`Bracket`] holds two evaluated endpoints whose residuals satisfy
//! `f(a)·f(b) <= 0`, so a continuous equation has a root between them.
//! Use [`scan`] to find one when only a search interval is known.

use numeth_core::Equation;
use thiserror::Error;

use super::{Degeneracy, Error, Point, evaluate};

/// Errors that can occur when creating a [`Bracket`] or validating bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
    /// Residual signs do not bracket a root.
    #[error("no sign change")]
    NoSignChange,
    /// Scan window is not a finite positive width.
    #[error("scan window must be finite and positive")]
    InvalidWindow,
}

/// Two evaluated endpoints with `f(a)·f(b) <= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    a: Point,
    b: Point,
}

impl Bracket {
    /// Creates a validated bracket from two evaluated endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if `f(a)·f(b) > 0`.
    pub fn new(a: Point, b: Point) -> Result<Self, BracketError> {
        if a.residual * b.residual > 0.0 {
            return Err(BracketError::NoSignChange);
        }
        Ok(Self { a, b })
    }

    /// Returns the `a` endpoint.
    #[must_use]
    pub fn a(&self) -> Point {
        self.a
    }

    /// Returns the `b` endpoint.
    #[must_use]
    pub fn b(&self) -> Point {
        self.b
    }

    /// Returns the bracket abscissas as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.a.x, self.b.x]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * self.a.x + 0.5 * self.b.x
    }

    /// Returns the bracket width.
    ///
    /// This is infinite when the endpoints are more than `f64::MAX` apart;
    /// [`half_width`](Bracket::half_width) is always finite.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.b.x - self.a.x).abs()
    }

    /// Returns half the bracket width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        (0.5 * self.b.x - 0.5 * self.a.x).abs()
    }

    /// Returns true if the endpoint residuals still change sign.
    #[must_use]
    pub fn has_sign_change(&self) -> bool {
        self.a.residual * self.b.residual <= 0.0
    }

    /// Reorients the bracket so that `f(a) <= 0 <= f(b)`.
    #[must_use]
    pub(super) fn negative_first(self) -> Self {
        if self.a.residual > 0.0 || self.b.residual < 0.0 {
            Self {
                a: self.b,
                b: self.a,
            }
        } else {
            self
        }
    }

    /// Keeps the half that still changes sign after evaluating the midpoint.
    ///
    /// `a` moves when `f(a)·f(mid) > 0`, otherwise `b` moves.
    pub(super) fn bisect(&mut self, mid: Point) {
        if self.a.residual * mid.residual > 0.0 {
            self.a = mid;
        } else {
            self.b = mid;
        }
    }

    /// Replaces the endpoint on the same side of zero as `point`.
    ///
    /// Assumes the `f(a) <= 0 <= f(b)` orientation from [`negative_first`].
    ///
    /// [`negative_first`]: Bracket::negative_first
    pub(super) fn replace_same_sign(&mut self, point: Point) {
        if point.residual < 0.0 {
            self.a = point;
        } else {
            self.b = point;
        }
    }
}

/// The abscissa where the chord through `a` and `b` crosses zero.
///
/// Computed as the weighted mean `(a·f(b) - b·f(a))/(f(b) - f(a))` with
/// halved residuals, so endpoints near `±f64::MAX` do not overflow. Returns
/// `b` itself when `f(b)` is exactly zero.
///
/// # Errors
///
/// Returns `Degeneracy::EqualResiduals` if the chord is horizontal.
pub(super) fn false_position(a: Point, b: Point) -> Result<f64, Error> {
    #[allow(clippy::float_cmp)]
    if b.residual == 0.0 {
        return Ok(b.x);
    }

    let (fa, fb) = (0.5 * a.residual, 0.5 * b.residual);
    let denom = fb - fa;

    #[allow(clippy::float_cmp)]
    if denom == 0.0 {
        return Err(Degeneracy::EqualResiduals {
            a: a.x,
            b: b.x,
            residual: b.residual,
        }
        .into());
    }

    Ok(a.x * (fb / denom) - b.x * (fa / denom))
}

/// Scans `[lo, hi]` in steps of `window` and returns the first sub-interval
/// whose endpoint residuals change sign.
///
/// The last window is clipped to `hi`. Returns `Ok(None)` if no sign change
/// is found. For a discontinuous equation the returned bracket may hold a
/// singularity instead of a root.
///
/// # Errors
///
/// Returns an error if the bounds or window are invalid, or if the equation
/// produces a non-finite residual at a scanned point.
pub fn scan<F: Equation>(
    equation: &F,
    bounds: [f64; 2],
    window: f64,
) -> Result<Option<Bracket>, Error> {
    let [lo, hi] = Bounds::new(bounds)?.as_array();
    if !window.is_finite() || window <= 0.0 {
        return Err(BracketError::InvalidWindow.into());
    }

    let mut left = evaluate(equation, lo)?;
    while left.x < hi {
        let next = (left.x + window).min(hi);
        if next <= left.x {
            // Window is below the float spacing at `left`.
            return Err(BracketError::InvalidWindow.into());
        }

        let right = evaluate(equation, next)?;
        if let Ok(bracket) = Bracket::new(left, right) {
            return Ok(Some(bracket));
        }
        left = right;
    }

    Ok(None)
}

/// Ordered finite bounds for a bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Evaluates both bounds and checks for a sign change.
    ///
    /// # Errors
    ///
    /// Returns an error if either residual is non-finite or the residuals
    /// do not change sign.
    pub(super) fn evaluate<F: Equation>(self, equation: &F) -> Result<Bracket, Error> {
        let a = evaluate(equation, self.left)?;
        let b = evaluate(equation, self.right)?;
        Ok(Bracket::new(a, b)?)
    }
}
