//! Sign utilities shared by the root bounds of both bases.
//! - `sign_variations` : adjacent sign flips, zeros skipped
//! - `leading_zeros`   : exact zeros before the first nonzero entry

/// Number of sign changes between consecutive nonzero entries of `coeffs`.
pub(crate) fn sign_variations(coeffs: &[f64]) -> usize {
    let mut changes = 0;
    let mut last_positive: Option<bool> = None;

    for &c in coeffs {
        if c == 0.0 || c.is_nan() {
            continue;
        }
        let positive = c > 0.0;
        if let Some(prev) = last_positive {
            if prev != positive {
                changes += 1;
            }
        }
        last_positive = Some(positive);
    }
    changes
}


/// Number of exactly-zero entries before the first nonzero one.
#[inline]
pub(crate) fn leading_zeros(coeffs: &[f64]) -> usize {
    coeffs.iter().take_while(|&&c| c == 0.0).count()
}
