//! Defines the [`IsolationReport`] struct returned by all
//! root-isolation algorithms.

use crate::polynomial::interval::Interval;
use super::algorithms::Algorithm;


/// Reasons an isolation run may stop.
/// - [`Termination::Exhausted`]      : the work stack emptied
/// - [`Termination::IterationLimit`] : `max_iter` intervals were examined first;
///                                     `pending` intervals were never looked at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exhausted,
    IterationLimit,
}


/// Final report returned by all root-isolation algorithms.
///
/// [`IsolationReport`]
/// - `intervals`      : accepted isolating intervals, in acceptance order; each
///                      is half-open `[min, max)` ([`Interval::owns`]), a root at
///                      the start zone's right end comes as the point `[max, max]`
/// - `iterations`     : intervals popped from the work stack
/// - `discarded`      : intervals dropped because their bound was 0
/// - `forced`         : intervals accepted while their bound was still > 1
///                      (accept policy, width floor, or no representable midpoint)
/// - `unresolved`     : intervals dropped at the width floor with bound > 1
/// - `pending`        : intervals still on the stack at termination
/// - `termination`    : why the run stopped ([`Termination`])
/// - `algorithm_name` : algorithm name (e.g. `"descartes"`)
#[derive(Debug, Clone, PartialEq)]
pub struct IsolationReport {
    pub intervals      : Vec<Interval>,
    pub iterations     : usize,
    pub discarded      : usize,
    pub forced         : usize,
    pub unresolved     : usize,
    pub pending        : usize,
    pub termination    : Termination,
    pub algorithm_name : &'static str,
}

impl IsolationReport {
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        Self {
            intervals      : Vec::new(),
            iterations     : 0,
            discarded      : 0,
            forced         : 0,
            unresolved     : 0,
            pending        : 0,
            termination    : Termination::Exhausted,
            algorithm_name : algorithm.algorithm_name(),
        }
    }

    /// Accepted intervals ordered by `min`.
    pub fn sorted_intervals(&self) -> Vec<Interval> {
        let mut sorted = self.intervals.clone();
        sorted.sort_by(|a, b| a.min.total_cmp(&b.min));
        sorted
    }
}
