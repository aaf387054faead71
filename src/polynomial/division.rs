//! Polynomial long division, remainder and approximate gcd.
//!
//! ┌ [`divide`] : `numerator = quotient * denominator + remainder`
//! ├ [`modulo`] : same elimination in place, keeps only the remainder
//! └ [`gcd`]    : Euclid on remainders until one is numerically zero
//!
//! The denominator's effective degree is the highest index holding an
//! exactly nonzero coefficient. Only the identically-zero denominator is
//! rejected; a nonzero constant is a valid divisor.

use super::errors::PolynomialError;
use super::monomial::Monomials;
use tracing::trace;


/// Result of [`divide`].
#[derive(Debug, Clone, PartialEq)]
pub struct Division {
    pub quotient: Monomials,
    pub remainder: Monomials,
}


/// Effective degree and leading coefficient of a divisor.
///
/// # Errors
/// └ [`PolynomialError::DivisionByZero`] if every coefficient is zero.
#[inline]
fn divisor_lead(denominator: &Monomials) -> Result<(usize, f64), PolynomialError> {
    let degree = denominator.effective_degree();
    let lead = denominator.coeffs()[degree];
    if lead == 0.0 {
        return Err(PolynomialError::DivisionByZero);
    }
    Ok((degree, lead))
}

/// Eliminates the terms of `rem` of degree `>= d_deg` against `d`, from the
/// top down. `on_quotient(shift, factor)` receives every quotient term.
/// Eliminated slots are set to exactly `0.0`.
fn eliminate<F>(rem: &mut [f64], d: &[f64], d_deg: usize, lead: f64, mut on_quotient: F)
where F: FnMut(usize, f64) {
    if rem.len() <= d_deg {
        return;
    }
    for shift in (0..rem.len() - d_deg).rev() {
        let factor = rem[shift + d_deg] / lead;
        on_quotient(shift, factor);
        for j in 0..d_deg {
            rem[shift + j] -= factor * d[j];
        }
        rem[shift + d_deg] = 0.0;
    }
}


/// Long division of `numerator` by `denominator`.
///
/// # Returns
/// [`Division`] with
/// ├ `quotient`  : length `deg(numerator) - eff_deg(denominator) + 1`,
/// │               or the constant `0` when the numerator's degree is lower
/// └ `remainder` : length `max(eff_deg(denominator), 1)`, or the numerator
///                 itself when its degree is lower
///
/// # Errors
/// └ [`PolynomialError::DivisionByZero`] if `denominator` is identically zero.
pub fn divide(numerator: &Monomials, denominator: &Monomials) -> Result<Division, PolynomialError> {
    let (d_deg, lead) = divisor_lead(denominator)?;
    let n_deg = numerator.degree();

    if n_deg < d_deg {
        return Ok(Division {
            quotient: Monomials::constant(0.0),
            remainder: numerator.clone(),
        });
    }

    let mut quotient = vec![0.0; n_deg - d_deg + 1];
    let mut rem = numerator.coeffs().to_vec();
    eliminate(&mut rem, denominator.coeffs(), d_deg, lead, |shift, factor| {
        quotient[shift] = factor;
    });
    rem.truncate(d_deg.max(1));

    Ok(Division {
        quotient: Monomials::from_vec_unchecked(quotient),
        remainder: Monomials::from_vec_unchecked(rem),
    })
}


/// Replaces `a` with `a mod m`, shrinking `a` as leading coefficients
/// become zero.
///
/// # Errors
/// └ [`PolynomialError::DivisionByZero`] if `m` is identically zero.
pub fn modulo(a: &mut Monomials, m: &Monomials) -> Result<(), PolynomialError> {
    let (m_deg, lead) = divisor_lead(m)?;
    let coeffs = a.coeffs_mut();
    eliminate(coeffs, m.coeffs(), m_deg, lead, |_, _| {});
    a.trim_leading_zeros();
    Ok(())
}


/// Approximate greatest common divisor by the Euclidean algorithm.
///
/// Repeats `(a, b) <- (b, a mod b)` until the largest `|coefficient|` of `b`
/// is below `allowed_err`, then returns `a`. Each remainder also has its
/// leading coefficients below `allowed_err` dropped, so noise is never used
/// as the next divisor's leading term.
///
/// `allowed_err` is the noise floor and depends on the coefficient scale
/// of the inputs; there is no default.
///
/// # Errors
/// ┌ [`PolynomialError::InvalidTolerance`] if `allowed_err` is not finite or <= 0.
/// └ [`PolynomialError::DivisionByZero`] never in practice: `b` is only
///   used as a divisor while some coefficient is >= `allowed_err`.
pub fn gcd(a: &Monomials, b: &Monomials, allowed_err: f64) -> Result<Monomials, PolynomialError> {
    if !(allowed_err.is_finite() && allowed_err > 0.0) {
        return Err(PolynomialError::InvalidTolerance { got: allowed_err });
    }

    let mut a = a.clone();
    let mut b = b.clone();
    let mut steps = 0usize;

    while b.max_abs_coeff() >= allowed_err {
        modulo(&mut a, &b)?;
        a.trim_leading_below(allowed_err);
        std::mem::swap(&mut a, &mut b);
        steps += 1;
        trace!(step = steps, degree = b.degree(), max_abs = b.max_abs_coeff(), "gcd remainder");
    }

    Ok(a)
}
