//! Configuration for root-isolation algorithms.
//!
//! [`CommonCfg`] : universal fields
//! └ `max_iter` : optional cap on the number of intervals examined
//!
//! Per-algorithm configs
//! ├ [`DescartesCfg`] : `common` + optional square-free tolerance
//! └ [`BernsteinCfg`] : `common` + width floor + [`Unresolved`] policy
//!
//! Setters validate their argument and return the config, so they chain
//! with `?`. The accept policy of the Descartes isolator is a separate
//! value, see [`crate::root_isolation::descartes::DefaultAccept`].

use super::errors::IsolationError;


#[derive(Debug, Copy, Clone, Default)]
pub struct CommonCfg {
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self { max_iter: None }
    }

    // getters
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    // setters (internal)
    pub(crate) fn with_max_iter(&mut self, v: usize) { self.max_iter = Some(v); }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            /// Stops after `v` intervals have been examined; see
            /// [`crate::root_isolation::report::Termination::IterationLimit`].
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_isolation::errors::IsolationError> {
                if v == 0 {
                    return Err(
                        $crate::root_isolation::errors::IsolationError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            #[inline]
            pub fn max_iter(&self) -> Option<usize> { self.common.max_iter() }
        }
    };
}


/// Descartes (monomial basis) configuration.
///
/// # Fields
/// ├ `common`         : [`CommonCfg`]
/// └ `squarefree_tol` : when set, the input is first reduced with
///                      [`crate::polynomial::no_root_multiplicities`] at this tolerance
///
/// # Defaults
/// ├ no iteration cap; termination then relies on square-free input or
/// │  on the accept policy
/// └ no square-free reduction
#[derive(Debug, Copy, Clone, Default)]
pub struct DescartesCfg {
    common: CommonCfg,
    squarefree_tol: Option<f64>,
}

impl DescartesCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_squarefree_tol(mut self, v: f64) -> Result<Self, IsolationError> {
        if !(v.is_finite() && v > 0.0) {
            return Err(IsolationError::Polynomial(
                crate::polynomial::PolynomialError::InvalidTolerance { got: v }
            ));
        }
        self.squarefree_tol = Some(v);
        Ok(self)
    }

    #[inline]
    pub fn squarefree_tol(&self) -> Option<f64> { self.squarefree_tol }
}
impl_common_cfg!(DescartesCfg);


/// What the Bernstein isolator does with an interval that still shows more
/// than one sign variation once it is no wider than `min_width`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Unresolved {
    /// Drop it; the run reports it in `unresolved`.
    #[default]
    Discard,
    /// Keep it as a final interval; the run reports it in `forced`.
    Accept,
}


/// Bernstein basis configuration.
///
/// # Fields
/// ├ `common`     : [`CommonCfg`]
/// ├ `min_width`  : intervals this narrow are never split again
/// └ `unresolved` : [`Unresolved`] policy at the width floor
///
/// # Defaults
/// ├ `min_width`  = [`BernsteinCfg::DEFAULT_MIN_WIDTH`]
/// └ `unresolved` = [`Unresolved::Discard`]
#[derive(Debug, Copy, Clone)]
pub struct BernsteinCfg {
    common: CommonCfg,
    min_width: f64,
    unresolved: Unresolved,
}

impl BernsteinCfg {
    pub const DEFAULT_MIN_WIDTH: f64 = 1e-9;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_min_width(mut self, v: f64) -> Result<Self, IsolationError> {
        if !(v.is_finite() && v > 0.0) {
            return Err(IsolationError::InvalidMinWidth { got: v });
        }
        self.min_width = v;
        Ok(self)
    }

    #[must_use]
    pub fn with_unresolved(mut self, v: Unresolved) -> Self {
        self.unresolved = v;
        self
    }

    #[inline] pub fn min_width(&self) -> f64 { self.min_width }
    #[inline] pub fn unresolved(&self) -> Unresolved { self.unresolved }
}

impl Default for BernsteinCfg {
    fn default() -> Self {
        Self {
            common: CommonCfg::new(),
            min_width: Self::DEFAULT_MIN_WIDTH,
            unresolved: Unresolved::Discard,
        }
    }
}
impl_common_cfg!(BernsteinCfg);
