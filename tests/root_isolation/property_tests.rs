//! property tests for the root bounds and isolators
use proptest::prelude::*;
use vca::polynomial::{Bernstein, BinomialCache, Interval, Monomials};
use vca::root_isolation::{
    bernstein_root_isolation, descartes_root_isolation, upper_bound_roots,
    BernsteinCfg, DefaultAccept, DescartesCfg,
};

/// Up to 6 roots on a 0.25 grid over [-4, 4], shifted off the grid so that
/// no root lands on a bisection point.
fn distinct_roots() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::btree_set(-16i32..16, 1..6)
        .prop_map(|set| set.into_iter().map(|k| k as f64 * 0.25 + 0.1).collect())
}

proptest! {
    #[test]
    fn bound_never_below_root_count(
        roots in prop::collection::vec(-5.0f64..5.0, 1..7),
        a in -6.0f64..5.0,
        len in 0.1f64..6.0,
    ) {
        let p = Monomials::from_roots(&roots);
        let interval = Interval { min: a, max: a + len };
        let inside = roots
            .iter()
            .filter(|&&r| interval.min + 1e-6 < r && r < interval.max - 1e-6)
            .count();

        let bound = upper_bound_roots(&p, interval, &BinomialCache::new());
        prop_assert!(bound >= inside, "bound {} < {} roots in {}", bound, inside, interval);
    }

    #[test]
    fn descartes_finds_every_separated_root(roots in distinct_roots()) {
        let p = Monomials::from_roots(&roots);
        let report = descartes_root_isolation(
            &p,
            Interval { min: -5.0, max: 5.0 },
            DefaultAccept::new(),
            DescartesCfg::new(),
        ).unwrap();

        prop_assert_eq!(report.intervals.len(), roots.len());
        for r in &roots {
            prop_assert_eq!(report.intervals.iter().filter(|i| i.contains(*r)).count(), 1);
        }
    }

    #[test]
    fn bernstein_agrees_with_descartes(roots in distinct_roots()) {
        let p = Monomials::from_roots(&roots);
        let zone = Interval { min: -5.0, max: 5.0 };
        let b = Bernstein::from_monomials(&p, zone, &BinomialCache::new());

        let report = bernstein_root_isolation(&b, BernsteinCfg::new()).unwrap();

        prop_assert_eq!(report.intervals.len(), roots.len());
        for r in &roots {
            prop_assert!(report.intervals.iter().any(|i| i.contains(*r)));
        }
    }
}
