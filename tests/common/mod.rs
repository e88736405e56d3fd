//! Common test utilities
#![allow(dead_code)]

/// Assert each `(x, expected)` fixture evaluates to exactly `expected`.
///
/// NaN expectations match NaN results; zeros compare by value.
pub fn assert_fixtures_exact(f: fn(f64) -> f64, fixtures: &[(f64, f64)], msg: &str) {
    for (i, &(x, expected)) in fixtures.iter().enumerate() {
        let actual = f(x);
        assert!(
            actual == expected || (actual.is_nan() && expected.is_nan()),
            "{}: fixture {} (x = {:e}) gave {:e}, expected {:e}",
            msg,
            i,
            x,
            actual,
            expected
        );
    }
}

/// Assert each `(x, expected)` fixture evaluates within tolerance.
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_fixtures_close(
    f: fn(f64) -> f64,
    fixtures: &[(f64, f64)],
    rtol: f64,
    atol: f64,
    msg: &str,
) {
    for (i, &(x, expected)) in fixtures.iter().enumerate() {
        let actual = f(x);
        let diff = (actual - expected).abs();
        let tol = atol + rtol * expected.abs();
        assert!(
            diff <= tol,
            "{}: fixture {} (x = {:e}) gave {:e}, expected {:e} (diff={:e}, tol={:e})",
            msg,
            i,
            x,
            actual,
            expected,
            diff,
            tol
        );
    }
}
