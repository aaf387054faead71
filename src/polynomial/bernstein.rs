//! Polynomials in the Bernstein basis over a finite interval.
//!
//! For coefficients `b_0 .. b_n` over `[a, b]`
//!
//! ```text
//! P(x) = Σ b_k C(n, k) (x - a)^k (b - x)^(n - k) / (b - a)^n
//! ```
//!
//! The control coefficients bound the polynomial on `[a, b]`, and their
//! sign variations bound the number of roots there (Descartes' rule in
//! this basis). [`Bernstein::de_casteljau_split`] halves the interval
//! without changing the function.

use std::ops::AddAssign;
use super::binomial::BinomialCache;
use super::errors::PolynomialError;
use super::interval::Interval;
use super::monomial::{line_pow, Monomials};
use super::signs::{leading_zeros, sign_variations};


#[derive(Debug, Clone, PartialEq)]
pub struct Bernstein {
    coeffs: Vec<f64>,
    interval: Interval,
}

impl Bernstein {
    /// # Errors
    /// ┌ [`PolynomialError::EmptyCoefficients`] if `coeffs` is empty.
    /// └ [`PolynomialError::InvalidInterval`]   unless `interval` is finite with `min < max`.
    pub fn new(coeffs: Vec<f64>, interval: Interval) -> Result<Self, PolynomialError> {
        if coeffs.is_empty() {
            return Err(PolynomialError::EmptyCoefficients);
        }
        if !interval.is_finite() || interval.min >= interval.max {
            return Err(PolynomialError::InvalidInterval { min: interval.min, max: interval.max });
        }
        Ok(Self { coeffs, interval })
    }

    /// Converts `monomials` restricted to `interval` into Bernstein form.
    ///
    /// # Behavior
    /// ├ substitutes `x = a + w t` (`w = b - a`) to get `q(t) = Σ q_i t^i`
    /// │  using [`line_pow`]
    /// └ `b_k = Σ_{i <= k} C(k, i) / C(n, i) * q_i` (basis change on `[0, 1]`)
    ///
    /// The result reproduces `monomials` on `interval` up to rounding.
    /// `interval` must have positive width: on a point interval every
    /// coefficient equals `p(a)` and [`Bernstein::evaluate`] returns NaN.
    pub fn from_monomials(
        monomials: &Monomials,
        interval: Interval,
        binomials: &BinomialCache,
    ) -> Self {
        let n = monomials.degree();
        let w = interval.max - interval.min;

        // q(t) = p(a + w t)
        let mut q = Monomials::zeros(n + 1);
        let line = [interval.min, w];
        for (i, &c) in monomials.coeffs().iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            let term = line_pow(line, i, binomials);
            q += &term.scale(c);
        }

        let n_row = binomials.row(n);
        let q = q.coeffs();
        let coeffs: Vec<f64> = (0..=n)
            .map(|k| {
                let k_row = binomials.row(k);
                (0..=k).map(|i| k_row[i] / n_row[i] * q[i]).sum::<f64>()
            })
            .collect();

        Self { coeffs, interval }
    }

    #[inline]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    #[inline]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Sign variations of the control coefficients; an upper bound on the
    /// number of roots inside the interval.
    pub fn sign_variations(&self) -> usize {
        sign_variations(&self.coeffs)
    }

    /// Upper bound on the roots in `[a, b)`: exact zeros at the start of the
    /// coefficients (`b_0 = P(a)`) plus [`Bernstein::sign_variations`].
    ///
    /// A root at `b` makes `b_n` zero and is not counted, so after a split a
    /// root on the split point belongs to the right half only.
    pub fn root_bound(&self) -> usize {
        leading_zeros(&self.coeffs) + sign_variations(&self.coeffs)
    }

    /// `(a + i * w / n, b_i)` for each control coefficient; the control polygon.
    pub fn control_points(&self) -> Vec<(f64, f64)> {
        let n = self.degree();
        if n == 0 {
            return vec![(self.interval.min, self.coeffs[0])];
        }
        let step = self.interval.width() / n as f64;
        self.coeffs
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.interval.min + i as f64 * step, c))
            .collect()
    }

    /// Evaluates `P(x)` as the weighted sum of the basis functions,
    /// normalized by `(b - a)^n`. Defined for `x` outside the interval too;
    /// NaN on a point interval (see [`Bernstein::from_monomials`]).
    pub fn evaluate(&self, x: f64, binomials: &BinomialCache) -> f64 {
        let n = self.degree();
        let a = self.interval.min;
        let b = self.interval.max;
        let row = binomials.row(n);

        let mut sum = 0.0;
        for (k, &c) in self.coeffs.iter().enumerate() {
            sum += c * row[k] * (x - a).powi(k as i32) * (b - x).powi((n - k) as i32);
        }
        sum / (b - a).powi(n as i32)
    }

    /// Splits at the midpoint `m = a + w / 2` with de Casteljau's triangle.
    ///
    /// Row 0 of the triangle is `b`, entry `j` of row `i` is the average of
    /// entries `j` and `j + 1` of row `i - 1`. The left half collects the
    /// first entry of each row, the right half the last entry of row `n - i`.
    /// `self` is left untouched. O(n^2).
    pub fn de_casteljau_split(&self) -> (Bernstein, Bernstein) {
        let n = self.degree();
        let mut row = self.coeffs.clone();
        let mut left = Vec::with_capacity(n + 1);
        let mut right = vec![0.0; n + 1];

        left.push(row[0]);
        right[n] = row[n];
        for i in 1..=n {
            for j in 0..=(n - i) {
                row[j] = 0.5 * (row[j] + row[j + 1]);
            }
            left.push(row[0]);
            right[n - i] = row[n - i];
        }

        let m = self.interval.min + self.interval.width() / 2.0;
        (
            Bernstein { coeffs: left,  interval: Interval { min: self.interval.min, max: m } },
            Bernstein { coeffs: right, interval: Interval { min: m, max: self.interval.max } },
        )
    }

    /// Coefficientwise sum with `other`.
    ///
    /// # Errors
    /// └ [`PolynomialError::DegreeMismatch`] unless both share degree and interval.
    pub fn try_add_assign(&mut self, other: &Bernstein) -> Result<(), PolynomialError> {
        if self.degree() != other.degree() || self.interval != other.interval {
            return Err(PolynomialError::DegreeMismatch {
                left: self.degree(),
                right: other.degree(),
                left_interval: self.interval.to_string(),
                right_interval: other.interval.to_string(),
            });
        }
        *self += other;
        Ok(())
    }
}

impl Monomials {
    /// Bernstein form of `self` over `interval`; see [`Bernstein::from_monomials`].
    pub fn to_bernstein(&self, interval: Interval, binomials: &BinomialCache) -> Bernstein {
        Bernstein::from_monomials(self, interval, binomials)
    }
}

/// Panics in debug builds on mismatched degree; use
/// [`Bernstein::try_add_assign`] for a checked sum.
impl AddAssign<&Bernstein> for Bernstein {
    fn add_assign(&mut self, rhs: &Bernstein) {
        debug_assert_eq!(self.degree(), rhs.degree());
        for (l, r) in self.coeffs.iter_mut().zip(&rhs.coeffs) {
            *l += r;
        }
    }
}
