//! Either-basis wrapper for callers that sample polynomials without caring
//! which representation they hold (e.g. curve plotting).

use std::fmt;
use super::bernstein::Bernstein;
use super::binomial::BinomialCache;
use super::monomial::Monomials;


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Basis {
    Monomial,
    Bernstein,
}

impl Basis {
    pub const fn basis_name(self) -> &'static str {
        match self {
            Basis::Monomial  => "monomial",
            Basis::Bernstein => "bernstein",
        }
    }
}
impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.basis_name())
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum Polynomial {
    Monomial(Monomials),
    Bernstein(Bernstein),
}

impl Polynomial {
    pub fn basis(&self) -> Basis {
        match self {
            Polynomial::Monomial(_)  => Basis::Monomial,
            Polynomial::Bernstein(_) => Basis::Bernstein,
        }
    }

    pub fn degree(&self) -> usize {
        match self {
            Polynomial::Monomial(p)  => p.degree(),
            Polynomial::Bernstein(p) => p.degree(),
        }
    }

    pub fn evaluate(&self, x: f64, binomials: &BinomialCache) -> f64 {
        match self {
            Polynomial::Monomial(p)  => p.evaluate(x),
            Polynomial::Bernstein(p) => p.evaluate(x, binomials),
        }
    }

    /// `(x, p(x))` at `samples` evenly spaced points from `from` to `to`
    /// inclusive; a single sample is taken at `from`.
    pub fn sample(&self, from: f64, to: f64, samples: usize, binomials: &BinomialCache) -> Vec<(f64, f64)> {
        match samples {
            0 => Vec::new(),
            1 => vec![(from, self.evaluate(from, binomials))],
            _ => {
                let dx = (to - from) / (samples - 1) as f64;
                (0..samples)
                    .map(|i| {
                        let x = from + i as f64 * dx;
                        (x, self.evaluate(x, binomials))
                    })
                    .collect()
            }
        }
    }
}

impl From<Monomials> for Polynomial {
    fn from(p: Monomials) -> Self {
        Polynomial::Monomial(p)
    }
}

impl From<Bernstein> for Polynomial {
    fn from(p: Bernstein) -> Self {
        Polynomial::Bernstein(p)
    }
}
