//! Polynomials in the power (monomial) basis.
//!
//! [`Monomials`] owns coefficients `c[0] .. c[n]`, index = power of `x`,
//! and never holds fewer than one coefficient.
//!
//! Arithmetic
//! ├ `&p * &q`  : convolution, length `deg p + deg q + 1`
//! ├ `&p * k`   : coefficientwise scale
//! ├ `&p + &q`  : length `max(len p, len q)`
//! └ `p += &q`  : extends `p` when `q` is longer
//!
//! Division, modulo and gcd live in [`crate::polynomial::division`].

use std::ops::{Add, AddAssign, Mul};
use super::binomial::BinomialCache;
use super::errors::PolynomialError;


#[derive(Debug, Clone, PartialEq)]
pub struct Monomials {
    coeffs: Vec<f64>,
}

impl Monomials {
    /// # Errors
    /// └ [`PolynomialError::EmptyCoefficients`] if `coeffs` is empty.
    pub fn new(coeffs: Vec<f64>) -> Result<Self, PolynomialError> {
        if coeffs.is_empty() {
            return Err(PolynomialError::EmptyCoefficients);
        }
        Ok(Self { coeffs })
    }

    /// `p(x) = c`
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self { coeffs: vec![c] }
    }

    /// `len` zero coefficients, `len >= 1` guaranteed by callers.
    #[inline]
    pub(crate) fn zeros(len: usize) -> Self {
        Self { coeffs: vec![0.0; len.max(1)] }
    }

    /// Wraps a non-empty vector without re-checking.
    #[inline]
    pub(crate) fn from_vec_unchecked(coeffs: Vec<f64>) -> Self {
        debug_assert!(!coeffs.is_empty());
        Self { coeffs }
    }

    /// Monic polynomial `(x - r_0)(x - r_1)...` with exactly the given roots.
    /// An empty slice gives `p(x) = 1`.
    pub fn from_roots(roots: &[f64]) -> Self {
        roots.iter().fold(Self::constant(1.0), |acc, &root| {
            &acc * &Self { coeffs: vec![-root, 1.0] }
        })
    }

    /// Product of the real quadratics `x^2 - 2a x + (a^2 + b^2)`, one per
    /// `(a, b)`, i.e. the roots `a ± ib`.
    pub fn from_complex_root_pairs(pairs: &[(f64, f64)]) -> Self {
        pairs.iter().fold(Self::constant(1.0), |acc, &(re, im)| {
            let quadratic = Self { coeffs: vec![re * re + im * im, -2.0 * re, 1.0] };
            &acc * &quadratic
        })
    }

    #[inline]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    #[inline]
    pub fn into_coeffs(self) -> Vec<f64> {
        self.coeffs
    }

    #[inline]
    pub(crate) fn coeffs_mut(&mut self) -> &mut Vec<f64> {
        &mut self.coeffs
    }

    /// Stored degree, `len - 1`. May include leading zero padding;
    /// see [`Monomials::effective_degree`].
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Index of the highest nonzero coefficient, `0` for the zero polynomial.
    pub fn effective_degree(&self) -> usize {
        self.coeffs.iter().rposition(|&c| c != 0.0).unwrap_or(0)
    }

    /// Largest `|c_k|`.
    pub fn max_abs_coeff(&self) -> f64 {
        self.coeffs.iter().fold(0.0_f64, |m, c| m.max(c.abs()))
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }

    /// `k * p`
    pub fn scale(&self, k: f64) -> Self {
        Self { coeffs: self.coeffs.iter().map(|c| c * k).collect() }
    }

    /// Evaluates `p(x)` with Horner's scheme.
    pub fn evaluate(&self, x: f64) -> f64 {
        let (last, rest) = match self.coeffs.split_last() {
            Some(split) => split,
            None => return 0.0,
        };
        rest.iter().rev().fold(*last, |acc, &c| acc * x + c)
    }

    /// Evaluates `p'(x)` with Horner's scheme without building `p'`.
    ///
    /// Agrees with `self.derive().evaluate(x)`; a constant gives `0.0`.
    pub fn evaluate_derivative(&self, x: f64) -> f64 {
        let mut result = 0.0;
        for i in (1..self.coeffs.len()).rev() {
            result = result * x + self.coeffs[i] * i as f64;
        }
        result
    }

    /// `p'`, with coefficient `k` equal to `(k + 1) * c[k + 1]`.
    ///
    /// The derivative of a constant is the constant `0.0` (length 1).
    pub fn derive(&self) -> Self {
        if self.coeffs.len() == 1 {
            return Self::constant(0.0);
        }
        let coeffs = self.coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, &c)| k as f64 * c)
            .collect();
        Self { coeffs }
    }

    /// Monic version of `p`: coefficients up to the effective degree divided
    /// by the leading effective coefficient. Leading zero padding is dropped.
    ///
    /// # Errors
    /// └ [`PolynomialError::DivisionByZero`] for the zero polynomial.
    pub fn normalize(&self) -> Result<Self, PolynomialError> {
        let degree = self.effective_degree();
        let leading = self.coeffs[degree];
        if leading == 0.0 {
            return Err(PolynomialError::DivisionByZero);
        }
        let coeffs = self.coeffs[..=degree].iter().map(|c| c / leading).collect();
        Ok(Self { coeffs })
    }

    /// Drops exact-zero leading coefficients, keeping at least one.
    pub(crate) fn trim_leading_zeros(&mut self) {
        while self.coeffs.len() > 1 && self.coeffs[self.coeffs.len() - 1] == 0.0 {
            self.coeffs.pop();
        }
    }

    /// Drops leading coefficients with `|c| < floor`, keeping at least one.
    pub(crate) fn trim_leading_below(&mut self, floor: f64) {
        while self.coeffs.len() > 1 && self.coeffs[self.coeffs.len() - 1].abs() < floor {
            self.coeffs.pop();
        }
    }
}

impl TryFrom<Vec<f64>> for Monomials {
    type Error = PolynomialError;

    fn try_from(coeffs: Vec<f64>) -> Result<Self, Self::Error> {
        Monomials::new(coeffs)
    }
}


impl Mul for &Monomials {
    type Output = Monomials;

    fn mul(self, rhs: &Monomials) -> Monomials {
        let mut coeffs = vec![0.0; self.degree() + rhs.degree() + 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Monomials { coeffs }
    }
}

impl Mul<f64> for &Monomials {
    type Output = Monomials;

    fn mul(self, rhs: f64) -> Monomials {
        self.scale(rhs)
    }
}

impl Add for &Monomials {
    type Output = Monomials;

    fn add(self, rhs: &Monomials) -> Monomials {
        let (longer, shorter) = if self.coeffs.len() >= rhs.coeffs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut result = longer.clone();
        for (r, s) in result.coeffs.iter_mut().zip(&shorter.coeffs) {
            *r += s;
        }
        result
    }
}

impl AddAssign<&Monomials> for Monomials {
    fn add_assign(&mut self, rhs: &Monomials) {
        let shared = self.coeffs.len().min(rhs.coeffs.len());
        for (l, r) in self.coeffs[..shared].iter_mut().zip(&rhs.coeffs[..shared]) {
            *l += r;
        }
        if rhs.coeffs.len() > shared {
            self.coeffs.extend_from_slice(&rhs.coeffs[shared..]);
        }
    }
}


/// Raises the linear form `l(t) = line[0] + line[1] * t` to the power `n`
/// by binomial expansion: coefficient `i` is `C(n, i) line[1]^i line[0]^(n - i)`.
pub fn line_pow(line: [f64; 2], n: usize, binomials: &BinomialCache) -> Monomials {
    let [constant, slope] = line;
    let coeffs = binomials
        .row(n)
        .iter()
        .enumerate()
        .map(|(i, &c)| c * slope.powi(i as i32) * constant.powi((n - i) as i32))
        .collect();
    Monomials { coeffs }
}
