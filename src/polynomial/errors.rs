//! Polynomial algebra error types.
//!
//! ┌ [`PolynomialError::EmptyCoefficients`]    : length >= 1 invariant violated
//! ├ [`PolynomialError::DivisionByZero`]       : denominator is the zero polynomial
//! ├ [`PolynomialError::NumericInconsistency`] : square-free residual above tolerance
//! ├ [`PolynomialError::InvalidTolerance`]     : `allowed_err` not finite or <= 0
//! ├ [`PolynomialError::InvalidInterval`]      : NaN bounds or max < min
//! └ [`PolynomialError::DegreeMismatch`]       : Bernstein operands not compatible

use thiserror::Error;


#[derive(Debug, Error, PartialEq)]
pub enum PolynomialError {
    #[error("empty coefficient sequence: a polynomial needs at least one coefficient")]
    EmptyCoefficients,

    #[error("division by the zero polynomial")]
    DivisionByZero,

    #[error("numeric inconsistency: residual {residual} >= allowed_err {allowed_err} after gcd division")]
    NumericInconsistency { residual: f64, allowed_err: f64 },

    #[error("invalid `allowed_err` tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid interval: bounds must not be NaN and max >= min. got [{min}, {max}]")]
    InvalidInterval { min: f64, max: f64 },

    #[error("incompatible bernstein operands: degree {left} over {left_interval} vs degree {right} over {right_interval}")]
    DegreeMismatch {
        left: usize,
        right: usize,
        left_interval: String,
        right_interval: String,
    },
}
