//! Root isolation in the Bernstein basis.
//!
//! Same bisection shape as [`crate::root_isolation::descartes`], but the
//! bound is read straight off the control coefficients, so no change of
//! variables is needed. `V` = [`Bernstein::root_bound`] bounds the roots in
//! `[a, b)` of the polynomial's own interval. Halves come from de Casteljau
//! subdivision.
//!
//! There is no square-free step on this path. Multiple roots keep `V > 1`
//! down to the width floor, where [`Unresolved`] decides their fate.

use tracing::{debug, trace, warn};

use crate::polynomial::bernstein::Bernstein;
use crate::polynomial::interval::Interval;
use super::algorithms::Algorithm;
use super::config::{BernsteinCfg, Unresolved};
use super::errors::IsolationError;
use super::report::{IsolationReport, Termination};

const ALGORITHM: Algorithm = Algorithm::Bernstein;


/// Isolates the real roots of `poly` inside `poly.interval()`.
///
/// # Behavior
/// Pops Bernstein polynomials from a work stack seeded with `poly`; for each,
/// with `V` = [`Bernstein::root_bound`]:
/// ├ `V == 0`                        → discarded
/// ├ `V == 1`                        → accepted
/// ├ `V > 1`, width > `min_width`    → split with [`Bernstein::de_casteljau_split`]
/// └ `V > 1`, width <= `min_width`   → [`Unresolved::Discard`] drops it (counted in
///                                     `unresolved`), [`Unresolved::Accept`] keeps it
///                                     (counted in `forced`)
///
/// An interval whose midpoint is not strictly inside it is treated as being at
/// the width floor.
///
/// # Returns
/// [`IsolationReport`] whose intervals are half-open `[min, max)`, see
/// [`Interval::owns`]. A root exactly at the right end of `poly.interval()`
/// (`b_n == 0`) is reported first, as the point interval `[max, max]`.
///
/// # Errors
/// ┌ [`IsolationError::InvalidStartZone`] - interval not finite or of zero width.
/// └ [`IsolationError::ZeroPolynomial`]   - every control coefficient is zero.
pub fn bernstein_root_isolation(
    poly: &Bernstein,
    cfg: BernsteinCfg,
) -> Result<IsolationReport, IsolationError> {

    let zone = poly.interval();
    if !zone.is_finite() || zone.min >= zone.max {
        return Err(IsolationError::InvalidStartZone { min: zone.min, max: zone.max });
    }
    if poly.coeffs().iter().all(|&c| c == 0.0) {
        return Err(IsolationError::ZeroPolynomial);
    }

    let min_width = cfg.min_width();
    let mut report = IsolationReport::new(ALGORITHM);

    debug!(
        algorithm = ALGORITHM.algorithm_name(),
        degree = poly.degree(),
        start_zone = %zone,
        min_width,
        "isolation started"
    );

    if poly.coeffs().last() == Some(&0.0) {
        trace!(root = zone.max, "root at right end of start zone");
        report.intervals.push(Interval { min: zone.max, max: zone.max });
    }

    let mut stack = vec![poly.clone()];

    while let Some(current) = stack.pop() {
        if cfg.max_iter().is_some_and(|cap| report.iterations >= cap) {
            stack.push(current);
            report.termination = Termination::IterationLimit;
            break;
        }
        report.iterations += 1;

        let interval = current.interval();
        let bound = current.root_bound();
        trace!(interval = %interval, bound, "examined");

        match bound {
            0 => report.discarded += 1,
            1 => report.intervals.push(interval),
            _ => {
                let m = interval.min + interval.width() / 2.0;
                let splittable = interval.width() > min_width
                    && interval.min < m && m < interval.max;

                if splittable {
                    let (left, right) = current.de_casteljau_split();
                    stack.push(left);
                    stack.push(right);
                    continue;
                }

                match cfg.unresolved() {
                    Unresolved::Discard => report.unresolved += 1,
                    Unresolved::Accept  => {
                        report.forced += 1;
                        report.intervals.push(interval);
                    }
                }
            }
        }
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
        unresolved = report.unresolved,
        "isolation finished"
    );

    Ok(report)
}
