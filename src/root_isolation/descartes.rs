//! Descartes root isolation in the monomial basis
//! (Vincent–Collins–Akritas bisection).
//!
//! For `p` of degree `n` and `I = [a, b]`, the substitution
//! `x = (a + b t) / (1 + t)` maps `t ∈ (0, ∞)` onto `(a, b)`, and
//!
//! ```text
//! B(t) = (1 + t)^n p((a + b t) / (1 + t)) = Σ_i p_i (1 + t)^(n - i) (a + b t)^i
//! ```
//!
//! has as many positive roots as `p` has in `(a, b)`. Descartes' rule of
//! signs bounds those by the sign variations of `B`; each exact zero at the
//! low-order end of `B` is a root of `p` at `a`.

use std::borrow::Cow;
use tracing::{debug, trace, warn};

use crate::polynomial::binomial::BinomialCache;
use crate::polynomial::interval::Interval;
use crate::polynomial::monomial::{line_pow, Monomials};
use crate::polynomial::squarefree::no_root_multiplicities;
use super::algorithms::Algorithm;
use super::config::DescartesCfg;
use super::errors::IsolationError;
use super::report::{IsolationReport, Termination};
use crate::polynomial::signs::{leading_zeros, sign_variations};

const ALGORITHM: Algorithm = Algorithm::Descartes;


/// Upper bound on the number of real roots of `poly` in `interval`.
///
/// Returns (leading zero coefficients of `B`) + (sign variations of `B`),
/// with `B` as in the module docs. Never below the true count in
/// exact arithmetic; in `f64` it is approximate near roots and endpoints.
pub fn upper_bound_roots(poly: &Monomials, interval: Interval, binomials: &BinomialCache) -> usize {
    let n = poly.degree();
    let mut mapped = Monomials::zeros(n + 1);

    for (i, &c) in poly.coeffs().iter().enumerate() {
        if c == 0.0 {
            continue;
        }
        let shifted = line_pow([1.0, 1.0], n - i, binomials);
        let mapped_line = line_pow([interval.min, interval.max], i, binomials);
        mapped += &(&(&shifted * &mapped_line) * c);
    }

    let coeffs = mapped.coeffs();
    leading_zeros(coeffs) + sign_variations(coeffs)
}


/// Decides whether an interval whose root bound is still above one is
/// accepted as final anyway.
///
/// Implemented by [`DefaultAccept`] and by any
/// `FnMut(&Monomials, &Interval) -> bool`, so a closure can carry state.
pub trait AcceptPolicy {
    fn accept(&mut self, poly: &Monomials, interval: &Interval) -> bool;
}

impl<F> AcceptPolicy for F
where F: FnMut(&Monomials, &Interval) -> bool {
    fn accept(&mut self, poly: &Monomials, interval: &Interval) -> bool {
        self(poly, interval)
    }
}


/// Default accept policy.
///
/// Accepts when `|p'(midpoint)| < derivative_tol` and `width < width_tol`,
/// i.e. a narrow interval around a flat point, which is where a multiple
/// root keeps the bound above one forever.
///
/// The defaults are deliberately stricter than the looser `0.1` / `0.1`
/// thresholds often used for this test, and the slope is compared in
/// absolute value, so a steep decreasing interval is never accepted.
///
/// # Defaults
/// ├ `derivative_tol` = [`DefaultAccept::DEFAULT_DERIVATIVE_TOL`]
/// └ `width_tol`      = [`DefaultAccept::DEFAULT_WIDTH_TOL`]
#[derive(Debug, Copy, Clone)]
pub struct DefaultAccept {
    derivative_tol: f64,
    width_tol: f64,
}

impl DefaultAccept {
    pub const DEFAULT_DERIVATIVE_TOL: f64 = 1e-3;
    pub const DEFAULT_WIDTH_TOL: f64 = 1e-3;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_derivative_tol(mut self, v: f64) -> Result<Self, IsolationError> {
        if !(v.is_finite() && v > 0.0) {
            return Err(IsolationError::InvalidAcceptThreshold { got: v });
        }
        self.derivative_tol = v;
        Ok(self)
    }

    pub fn set_width_tol(mut self, v: f64) -> Result<Self, IsolationError> {
        if !(v.is_finite() && v > 0.0) {
            return Err(IsolationError::InvalidAcceptThreshold { got: v });
        }
        self.width_tol = v;
        Ok(self)
    }

    #[inline] pub fn derivative_tol(&self) -> f64 { self.derivative_tol }
    #[inline] pub fn width_tol(&self) -> f64 { self.width_tol }
}

impl Default for DefaultAccept {
    fn default() -> Self {
        Self {
            derivative_tol: Self::DEFAULT_DERIVATIVE_TOL,
            width_tol: Self::DEFAULT_WIDTH_TOL,
        }
    }
}

impl AcceptPolicy for DefaultAccept {
    fn accept(&mut self, poly: &Monomials, interval: &Interval) -> bool {
        poly.evaluate_derivative(interval.midpoint()).abs() < self.derivative_tol
            && interval.width() < self.width_tol
    }
}


/// Isolates the real roots of `poly` inside `start_zone` by bisection on the
/// Descartes bound.
///
/// # Behavior
/// Pops intervals from a work stack seeded with `start_zone`; for each, with
/// `R` = [`upper_bound_roots`]:
/// ├ `R == 0`                   → discarded
/// ├ `R == 1` or `accept` holds → accepted as final
/// └ `R > 1`                    → split at the midpoint, both halves pushed
///
/// An interval with `R > 1` whose midpoint is not strictly inside it (the
/// `f64` grid is exhausted) is accepted as final and counted in `forced`.
///
/// `R` counts roots in `[min, max)`: a root at `min` counts, a root at `max`
/// does not. A root on a bisection point therefore lands in the right half.
///
/// # Warning
/// A root of multiplicity > 1 keeps `R > 1` on every interval around it. With
/// neither square-free input (see [`DescartesCfg::set_squarefree_tol`]) nor an
/// `accept` that fires there, the run bisects down to `f64` resolution unless
/// `max_iter` is set.
///
/// # Returns
/// [`IsolationReport`] with half-open `[min, max)` intervals in acceptance
/// order, see [`Interval::owns`]. Intervals accepted by the policy may hold
/// more than one root. A root where `poly` evaluates to exactly zero at
/// `start_zone.max` is reported first, as the point interval `[max, max]`.
///
/// # Errors
/// ┌ [`IsolationError::InvalidStartZone`] - bounds not finite or `min >= max`.
/// ├ [`IsolationError::ZeroPolynomial`]   - `poly` (after reduction) is identically zero.
/// └ [`IsolationError::Polynomial`]       - square-free reduction failed.
pub fn descartes_root_isolation<A>(
    poly: &Monomials,
    start_zone: Interval,
    mut accept: A,
    cfg: DescartesCfg,
) -> Result<IsolationReport, IsolationError>
where A: AcceptPolicy {

    if !start_zone.is_finite() || start_zone.min >= start_zone.max {
        return Err(IsolationError::InvalidStartZone { min: start_zone.min, max: start_zone.max });
    }
    if poly.is_zero() {
        return Err(IsolationError::ZeroPolynomial);
    }

    let poly: Cow<'_, Monomials> = match cfg.squarefree_tol() {
        Some(tol) => Cow::Owned(no_root_multiplicities(poly, tol)?),
        None      => Cow::Borrowed(poly),
    };

    let binomials = BinomialCache::shared();
    let mut report = IsolationReport::new(ALGORITHM);

    debug!(
        algorithm = ALGORITHM.algorithm_name(),
        degree = poly.degree(),
        start_zone = %start_zone,
        "isolation started"
    );

    if poly.evaluate(start_zone.max) == 0.0 {
        trace!(root = start_zone.max, "root at right end of start zone");
        report.intervals.push(Interval { min: start_zone.max, max: start_zone.max });
    }

    let mut stack = Vec::with_capacity(poly.degree().max(1));
    stack.push(start_zone);

    while let Some(current) = stack.pop() {
        if cfg.max_iter().is_some_and(|cap| report.iterations >= cap) {
            stack.push(current);
            report.termination = Termination::IterationLimit;
            break;
        }
        report.iterations += 1;

        let bound = upper_bound_roots(&poly, current, binomials);
        trace!(interval = %current, bound, "examined");

        if bound == 0 {
            report.discarded += 1;
            continue;
        }
        if bound == 1 {
            report.intervals.push(current);
            continue;
        }
        if accept.accept(&poly, &current) {
            report.forced += 1;
            report.intervals.push(current);
            continue;
        }

        let m = current.midpoint();
        if !(current.min < m && m < current.max) {
            report.forced += 1;
            report.intervals.push(current);
            continue;
        }
        let (left, right) = current.bisect();
        stack.push(left);
        stack.push(right);
    }

    report.pending = stack.len();
    if report.termination == Termination::IterationLimit {
        warn!(
            algorithm = ALGORITHM.algorithm_name(),
            iterations = report.iterations,
            pending = report.pending,
            "iteration limit reached before the work stack emptied"
        );
    }
    debug!(
        algorithm = ALGORITHM.algorithm_name(),
        found = report.intervals.len(),
        iterations = report.iterations,
        discarded = report.discarded,
        forced = report.forced,
        "isolation finished"
    );

    Ok(report)
}
