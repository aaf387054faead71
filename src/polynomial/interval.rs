//! Closed search interval `[min, max]`.

use std::fmt;
use super::errors::PolynomialError;


/// Closed interval `[min, max]` with `max >= min`.
///
/// Fields are public so callers can build literals; [`Interval::new`]
/// is the validated constructor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// # Errors
    /// └ [`PolynomialError::InvalidInterval`] if either bound is NaN or `max < min`.
    pub fn new(min: f64, max: f64) -> Result<Self, PolynomialError> {
        if min.is_nan() || max.is_nan() || max < min {
            return Err(PolynomialError::InvalidInterval { min, max });
        }
        Ok(Self { min, max })
    }

    /// `max(0, max - min)`
    #[inline]
    pub fn width(&self) -> f64 {
        (self.max - self.min).max(0.0)
    }

    /// Arithmetic midpoint `(min + max) / 2`, halved first so that
    /// wide finite bounds cannot overflow.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        self.min / 2.0 + self.max / 2.0
    }

    /// Closed membership, `min <= x <= max`.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Membership as an isolating interval: half-open `min <= x < max`, or
    /// `x == min` for a point interval. Adjacent isolating intervals never
    /// both own a shared endpoint.
    #[inline]
    pub fn owns(&self, x: f64) -> bool {
        self.min <= x && (x < self.max || self.min == self.max)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Splits at [`Interval::midpoint`] into `([min, m], [m, max])`.
    pub fn bisect(&self) -> (Interval, Interval) {
        let m = self.midpoint();
        (
            Interval { min: self.min, max: m },
            Interval { min: m, max: self.max },
        )
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
