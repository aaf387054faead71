//! Root-isolation algorithm definitions.
//!
//! Provides the [`Algorithm`] enum naming each isolator, used in
//! [`crate::root_isolation::report::IsolationReport::algorithm_name`] and logs.

/// Root-isolation algorithm variants.
/// - [`Algorithm::Descartes`] : monomial basis, interval-mapped Descartes bound
/// - [`Algorithm::Bernstein`] : Bernstein basis, control-coefficient sign variations
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Descartes,
    Bernstein,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Descartes => "descartes",
            Algorithm::Bernstein => "bernstein",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
