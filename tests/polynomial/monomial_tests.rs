//! tests for monomial-basis polynomial arithmetic
use vca::polynomial::{Monomials, PolynomialError};

type TestResult = Result<(), PolynomialError>;

const ATOL: f64 = 1e-9;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL * b.abs().max(1.0)
}

#[inline]
fn assert_coeffs_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len(), "length mismatch: {a:?} vs {b:?}");
    for (i, (ai, bi)) in a.iter().zip(b).enumerate() {
        assert!(approx_eq(*ai, *bi), "mismatch at index {i}: left={ai}, right={bi}");
    }
}

#[test]
fn empty_coefficients_rejected() {
    assert_eq!(Monomials::new(vec![]), Err(PolynomialError::EmptyCoefficients));
}

#[test]
fn from_roots_is_monic_with_given_roots() {
    let roots = [-3.0, -1.0, 0.5, 2.0];
    let p = Monomials::from_roots(&roots);

    assert_eq!(p.degree(), 4);
    assert_eq!(p.coeffs()[4], 1.0);
    for r in roots {
        assert!(p.evaluate(r).abs() < 1e-12, "p({r}) = {}", p.evaluate(r));
    }
}

#[test]
fn from_no_roots_is_one() {
    let p = Monomials::from_roots(&[]);
    assert_eq!(p.coeffs(), &[1.0]);
}

#[test]
fn complex_pair_gives_real_quadratic() {
    // 1 ± 2i -> x^2 - 2x + 5
    let p = Monomials::from_complex_root_pairs(&[(1.0, 2.0)]);
    assert_eq!(p.coeffs(), &[5.0, -2.0, 1.0]);
    assert!(p.evaluate(1.0) > 0.0);
}

#[test]
fn multiply_is_convolution() -> TestResult {
    let p = Monomials::new(vec![1.0, 1.0])?;        // 1 + x
    let q = Monomials::new(vec![-1.0, 0.0, 2.0])?;  // -1 + 2x^2
    let r = &p * &q;
    assert_eq!(r.coeffs(), &[-1.0, -1.0, 2.0, 2.0]);
    assert_eq!(r.degree(), p.degree() + q.degree());
    Ok(())
}

#[test]
fn scale_and_scalar_mul_agree() -> TestResult {
    let p = Monomials::new(vec![1.0, -2.0, 3.0])?;
    assert_eq!(p.scale(-2.0), &p * -2.0);
    assert_eq!((&p * 0.5).coeffs(), &[0.5, -1.0, 1.5]);
    Ok(())
}

#[test]
fn add_takes_longer_length() -> TestResult {
    let p = Monomials::new(vec![1.0, 2.0])?;
    let q = Monomials::new(vec![1.0, 1.0, 1.0, 1.0])?;
    assert_eq!((&p + &q).coeffs(), &[2.0, 3.0, 1.0, 1.0]);
    assert_eq!((&q + &p).coeffs(), &[2.0, 3.0, 1.0, 1.0]);
    Ok(())
}

#[test]
fn add_assign_extends_shorter() -> TestResult {
    let mut p = Monomials::new(vec![1.0])?;
    let q = Monomials::new(vec![1.0, 2.0, 3.0])?;
    p += &q;
    assert_eq!(p.coeffs(), &[2.0, 2.0, 3.0]);

    let mut r = Monomials::new(vec![1.0, 1.0, 1.0])?;
    r += &Monomials::constant(4.0);
    assert_eq!(r.coeffs(), &[5.0, 1.0, 1.0]);
    Ok(())
}

#[test]
fn evaluate_uses_all_terms() -> TestResult {
    // 2 - 3x + x^3
    let p = Monomials::new(vec![2.0, -3.0, 0.0, 1.0])?;
    assert_eq!(p.evaluate(0.0), 2.0);
    assert_eq!(p.evaluate(2.0), 4.0);
    assert_eq!(p.evaluate(-1.0), 4.0);
    Ok(())
}

#[test]
fn derive_lowers_degree() -> TestResult {
    // 2 - 3x + x^3 -> -3 + 3x^2
    let p = Monomials::new(vec![2.0, -3.0, 0.0, 1.0])?;
    let d = p.derive();
    assert_eq!(d.coeffs(), &[-3.0, 0.0, 3.0]);
    Ok(())
}

#[test]
fn evaluate_derivative_matches_derive() -> TestResult {
    let p = Monomials::from_roots(&[-2.0, 0.25, 1.0, 3.5]);
    let d = p.derive();
    for x in [-3.0, -1.0, 0.0, 0.7, 2.0, 4.0] {
        assert!(approx_eq(p.evaluate_derivative(x), d.evaluate(x)));
    }
    assert_eq!(Monomials::constant(3.0).evaluate_derivative(10.0), 0.0);
    Ok(())
}

#[test]
fn normalize_makes_monic() -> TestResult {
    let p = Monomials::new(vec![2.0, 4.0, -8.0, 0.0])?;
    let n = p.normalize()?;
    assert_coeffs_close(n.coeffs(), &[-0.25, -0.5, 1.0]);
    Ok(())
}

#[test]
fn normalize_zero_fails() -> TestResult {
    let p = Monomials::new(vec![0.0, 0.0])?;
    assert_eq!(p.normalize(), Err(PolynomialError::DivisionByZero));
    Ok(())
}

#[test]
fn effective_degree_and_max_abs() -> TestResult {
    let p = Monomials::new(vec![-7.0, 2.0, 0.0])?;
    assert_eq!(p.effective_degree(), 1);
    assert_eq!(p.max_abs_coeff(), 7.0);
    assert!(!p.is_zero());
    assert!(Monomials::new(vec![0.0, 0.0])?.is_zero());
    Ok(())
}
