//! Real root isolation for univariate polynomials.
//!
//! ┌ [`polynomial`]     : monomial / Bernstein representations and their algebra
//! └ [`root_isolation`] : Descartes (monomial basis) and Bernstein bisection isolators

pub mod polynomial;
pub mod root_isolation;
