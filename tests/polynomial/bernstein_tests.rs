//! tests for the Bernstein representation and de Casteljau subdivision
use vca::polynomial::{Basis, Bernstein, BinomialCache, Interval, Monomials, Polynomial, PolynomialError};

type TestResult = Result<(), PolynomialError>;

#[inline]
fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * b.abs().max(1.0)
}

fn samples(interval: Interval, count: usize) -> Vec<f64> {
    (0..=count)
        .map(|i| interval.min + interval.width() * i as f64 / count as f64)
        .collect()
}

#[test]
fn conversion_reproduces_polynomial() -> TestResult {
    let binomials = BinomialCache::new();
    let p = Monomials::from_roots(&[-2.0, -1.0, 0.3, 1.1, 2.5]);
    let zone = Interval::new(-3.0, 3.0)?;
    let b = Bernstein::from_monomials(&p, zone, &binomials);

    assert_eq!(b.degree(), p.degree());
    assert_eq!(b.interval(), zone);
    for x in samples(zone, 40) {
        assert!(approx_eq(b.evaluate(x, &binomials), p.evaluate(x), 1e-9), "x = {x}");
    }
    Ok(())
}

#[test]
fn endpoint_coefficients_are_endpoint_values() -> TestResult {
    let binomials = BinomialCache::new();
    let p = Monomials::new(vec![1.0, -2.0, 0.5, 3.0])?;
    let zone = Interval::new(-1.0, 2.0)?;
    let b = Bernstein::from_monomials(&p, zone, &binomials);

    assert!(approx_eq(b.coeffs()[0], p.evaluate(-1.0), 1e-12));
    assert!(approx_eq(b.coeffs()[3], p.evaluate(2.0), 1e-12));
    Ok(())
}

#[test]
fn split_halves_match_parent() -> TestResult {
    let binomials = BinomialCache::new();
    let p = Monomials::from_roots(&[-2.0, -1.0, 0.3, 1.1, 2.5]);
    let b = Bernstein::from_monomials(&p, Interval::new(-3.0, 3.0)?, &binomials);
    let (left, right) = b.de_casteljau_split();

    assert_eq!(left.interval(),  Interval::new(-3.0, 0.0)?);
    assert_eq!(right.interval(), Interval::new(0.0, 3.0)?);
    assert_eq!(left.degree(), b.degree());
    assert_eq!(right.degree(), b.degree());

    for x in samples(left.interval(), 20) {
        assert!(approx_eq(left.evaluate(x, &binomials), b.evaluate(x, &binomials), 1e-9));
    }
    for x in samples(right.interval(), 20) {
        assert!(approx_eq(right.evaluate(x, &binomials), b.evaluate(x, &binomials), 1e-9));
    }
    Ok(())
}

#[test]
fn split_does_not_mutate() -> TestResult {
    let b = Bernstein::new(vec![1.0, -2.0, 3.0], Interval::new(0.0, 1.0)?)?;
    let before = b.clone();
    let _ = b.de_casteljau_split();
    assert_eq!(b, before);
    Ok(())
}

#[test]
fn split_shares_midpoint_value() -> TestResult {
    let b = Bernstein::new(vec![1.0, -2.0, 3.0, 0.5], Interval::new(0.0, 4.0)?)?;
    let (left, right) = b.de_casteljau_split();
    assert_eq!(left.coeffs()[3], right.coeffs()[0]);
    assert_eq!(left.coeffs()[0], 1.0);
    assert_eq!(right.coeffs()[3], 0.5);
    Ok(())
}

#[test]
fn sign_variations_bound_roots() -> TestResult {
    let binomials = BinomialCache::new();
    let p = Monomials::from_roots(&[0.5, 1.5]);
    let b = Bernstein::from_monomials(&p, Interval::new(0.0, 2.0)?, &binomials);
    assert_eq!(b.sign_variations(), 2);

    let none = Bernstein::from_monomials(&p, Interval::new(2.0, 3.0)?, &binomials);
    assert_eq!(none.sign_variations(), 0);
    Ok(())
}

#[test]
fn control_points_are_evenly_spaced() -> TestResult {
    let b = Bernstein::new(vec![1.0, 2.0, 3.0], Interval::new(-1.0, 1.0)?)?;
    assert_eq!(b.control_points(), vec![(-1.0, 1.0), (0.0, 2.0), (1.0, 3.0)]);
    Ok(())
}

#[test]
fn add_assign_same_degree() -> TestResult {
    let zone = Interval::new(0.0, 1.0)?;
    let mut a = Bernstein::new(vec![1.0, 2.0], zone)?;
    let b = Bernstein::new(vec![0.5, -1.0], zone)?;
    a.try_add_assign(&b)?;
    assert_eq!(a.coeffs(), &[1.5, 1.0]);
    Ok(())
}

#[test]
fn add_assign_rejects_mismatch() -> TestResult {
    let mut a = Bernstein::new(vec![1.0, 2.0], Interval::new(0.0, 1.0)?)?;
    let b = Bernstein::new(vec![1.0, 2.0, 3.0], Interval::new(0.0, 1.0)?)?;
    let err = a.try_add_assign(&b).unwrap_err();
    assert!(matches!(err, PolynomialError::DegreeMismatch { left: 1, right: 2, .. }));

    let c = Bernstein::new(vec![1.0, 2.0], Interval::new(0.0, 2.0)?)?;
    assert!(a.try_add_assign(&c).is_err());
    Ok(())
}

#[test]
fn empty_coefficients_rejected() -> TestResult {
    let err = Bernstein::new(vec![], Interval::new(0.0, 1.0)?).unwrap_err();
    assert_eq!(err, PolynomialError::EmptyCoefficients);
    Ok(())
}

#[test]
fn tagged_polynomial_samples_either_basis() -> TestResult {
    let binomials = BinomialCache::new();
    let p = Monomials::from_roots(&[0.25, 0.75]);
    let zone = Interval::new(0.0, 1.0)?;

    let mono: Polynomial = p.clone().into();
    let bern: Polynomial = Bernstein::from_monomials(&p, zone, &binomials).into();
    assert_eq!(mono.basis(), Basis::Monomial);
    assert_eq!(bern.basis(), Basis::Bernstein);
    assert_eq!(bern.basis().to_string(), "bernstein");
    assert_eq!(mono.degree(), bern.degree());

    let a = mono.sample(0.0, 1.0, 11, &binomials);
    let b = bern.sample(0.0, 1.0, 11, &binomials);
    assert_eq!(a.len(), 11);
    assert_eq!(a[10].0, 1.0);
    for ((xa, ya), (xb, yb)) in a.iter().zip(&b) {
        assert_eq!(xa, xb);
        assert!(approx_eq(*ya, *yb, 1e-12));
    }
    assert!(mono.sample(0.0, 1.0, 0, &binomials).is_empty());
    Ok(())
}
