// common helpers
pub mod errors;
pub mod interval;
pub mod binomial;
pub(crate) mod signs;

// representations
pub mod monomial;
pub mod bernstein;
pub mod basis;

// algebra
pub mod division;
pub mod squarefree;

pub use basis::{Basis, Polynomial};
pub use bernstein::Bernstein;
pub use binomial::{binomial_coefficients, choose, BinomialCache};
pub use division::{divide, gcd, modulo, Division};
pub use errors::PolynomialError;
pub use interval::Interval;
pub use monomial::Monomials;
pub use squarefree::no_root_multiplicities;
