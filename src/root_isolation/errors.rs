//! Root-isolation error types.
//!
//! ┌ [`IsolationError::Polynomial`]             : algebra failures (square-free step)
//! ├ [`IsolationError::InvalidStartZone`]       : start interval unusable
//! ├ [`IsolationError::ZeroPolynomial`]         : every point is a root
//! │
//! └ configuration errors
//!     ├ [`IsolationError::InvalidMinWidth`]
//!     ├ [`IsolationError::InvalidAcceptThreshold`]
//!     └ [`IsolationError::InvalidMaxIter`]

use thiserror::Error;
use crate::polynomial::errors::PolynomialError;


#[derive(Debug, Error, PartialEq)]
pub enum IsolationError {
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),

    #[error("invalid start zone: bounds must be finite with min < max. got [{min}, {max}]")]
    InvalidStartZone { min: f64, max: f64 },

    #[error("the zero polynomial has no isolated roots")]
    ZeroPolynomial,

    #[error("invalid `min_width`: must be finite and > 0. got {got}")]
    InvalidMinWidth { got: f64 },

    #[error("invalid accept threshold: must be finite and > 0. got {got}")]
    InvalidAcceptThreshold { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
