//! Rows of Pascal's triangle as `f64`.
//!
//! [`BinomialCache`] precomputes rows `0..=static_max` once at construction
//! and is immutable afterwards. Rows past `static_max` are derived on demand
//! from the last cached row, O(n) per extra row, without being stored.
//!
//! [`BinomialCache::shared`] is the process-wide instance, built on first
//! use behind a [`OnceLock`] so concurrent first access is serialized.
//!
//! Large `n` overflows `f64` to `inf`; this is not checked.

use std::borrow::Cow;
use std::sync::OnceLock;


/// Default number of precomputed rows (inclusive).
pub const DEFAULT_STATIC_MAX: usize = 100;


#[derive(Debug, Clone)]
pub struct BinomialCache {
    rows: Vec<Vec<f64>>,
}

impl BinomialCache {
    /// Cache with rows `0..=DEFAULT_STATIC_MAX`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_static_max(DEFAULT_STATIC_MAX)
    }

    /// Cache with rows `0..=static_max`.
    #[must_use]
    pub fn with_static_max(static_max: usize) -> Self {
        let mut rows: Vec<Vec<f64>> = Vec::with_capacity(static_max + 1);
        rows.push(vec![1.0]);
        for n in 1..=static_max {
            let next = next_row(&rows[n - 1]);
            rows.push(next);
        }
        Self { rows }
    }

    /// Process-wide cache with [`DEFAULT_STATIC_MAX`] rows.
    pub fn shared() -> &'static BinomialCache {
        static SHARED: OnceLock<BinomialCache> = OnceLock::new();
        SHARED.get_or_init(BinomialCache::new)
    }

    /// Largest precomputed row index.
    #[inline]
    pub fn static_max(&self) -> usize {
        self.rows.len() - 1
    }

    /// Row `n` of Pascal's triangle (length `n + 1`).
    ///
    /// Borrowed when `n <= static_max`, otherwise built from the last
    /// cached row.
    pub fn row(&self, n: usize) -> Cow<'_, [f64]> {
        if n <= self.static_max() {
            return Cow::Borrowed(&self.rows[n]);
        }

        let max = self.static_max();
        let mut coeffs = vec![0.0; n + 1];
        coeffs[..=max].copy_from_slice(&self.rows[max]);

        // in-place sweep: coeffs[k] <- C(m-1, k-1) + C(m-1, k)
        for m in (max + 1)..=n {
            let mut prev_left = 1.0;
            for k in 1..=m {
                let current = prev_left + coeffs[k];
                prev_left = coeffs[k];
                coeffs[k] = current;
            }
        }

        Cow::Owned(coeffs)
    }

    /// `C(n, k)`; `0.0` when `k > n`.
    pub fn choose(&self, n: usize, k: usize) -> f64 {
        if k > n {
            return 0.0;
        }
        if n <= self.static_max() {
            return self.rows[n][k];
        }
        self.row(n)[k]
    }
}

impl Default for BinomialCache {
    fn default() -> Self {
        Self::new()
    }
}


#[inline]
fn next_row(prev: &[f64]) -> Vec<f64> {
    let mut row = vec![1.0; prev.len() + 1];
    for k in 1..prev.len() {
        row[k] = prev[k - 1] + prev[k];
    }
    row
}


/// Row `n` of Pascal's triangle from [`BinomialCache::shared`].
pub fn binomial_coefficients(n: usize) -> Vec<f64> {
    BinomialCache::shared().row(n).into_owned()
}

/// `C(n, k)` from [`BinomialCache::shared`].
pub fn choose(n: usize, k: usize) -> f64 {
    BinomialCache::shared().choose(n, k)
}
