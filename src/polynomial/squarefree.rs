//! Square-free reduction.
//!
//! `p / gcd(p, p')` keeps every distinct root of `p` once. The Descartes
//! isolator only terminates on its own for square-free input, so this is
//! usually applied first (see `DescartesCfg::set_squarefree_tol`).

use super::division::{divide, gcd};
use super::errors::PolynomialError;
use super::monomial::Monomials;
use tracing::debug;


/// Returns the monic polynomial with the roots of `p`, each of multiplicity 1.
///
/// # Behavior
/// ├ `g = gcd(p, p', allowed_err)`
/// ├ `q = p / g`
/// └ returns `q` normalized to be monic
///
/// The residual check below is a coarse sanity test on the gcd, not a
/// proof that `q` is square-free.
///
/// # Errors
/// ┌ [`PolynomialError::NumericInconsistency`] - the remainder of `p / g` has a
/// │                                            coefficient with `|c| >= allowed_err`.
/// ├ [`PolynomialError::InvalidTolerance`]     - `allowed_err` not finite or <= 0.
/// └ [`PolynomialError::DivisionByZero`]       - `p` is identically zero.
pub fn no_root_multiplicities(p: &Monomials, allowed_err: f64) -> Result<Monomials, PolynomialError> {
    let g = gcd(p, &p.derive(), allowed_err)?;
    let division = divide(p, &g)?;

    let residual = division.remainder.max_abs_coeff();
    debug!(
        degree = p.degree(),
        gcd_degree = g.effective_degree(),
        residual,
        allowed_err,
        "square-free reduction"
    );
    if residual >= allowed_err {
        return Err(PolynomialError::NumericInconsistency { residual, allowed_err });
    }

    division.quotient.normalize()
}
