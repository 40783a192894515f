use super::*;
use crate::elementary::MathError;

// ═══════════════════════════════════════════════════════════════════
// factorial
// ═══════════════════════════════════════════════════════════════════

#[test]
fn factorial_small_values() {
    assert_eq!(factorial(0).unwrap(), 1);
    assert_eq!(factorial(1).unwrap(), 1);
    assert_eq!(factorial(5).unwrap(), 120);
    assert_eq!(factorial(10).unwrap(), 3_628_800);
}

#[test]
fn factorial_bounds() {
    // Accepted boundaries
    assert_eq!(factorial(0).unwrap(), 1);
    assert_eq!(factorial(12).unwrap(), 479_001_600);
    // Rejected just outside
    assert_eq!(factorial(-1), Err(MathError::DomainError));
    assert_eq!(factorial(13), Err(MathError::DomainError));
}

#[test]
fn factorial_real_truncates() {
    assert_eq!(factorial_real(5.0_f64).unwrap(), 120.0);
    assert_eq!(factorial_real(5.99_f64).unwrap(), 120.0);
    assert_eq!(factorial_real(0.0_f64).unwrap(), 1.0);
    assert_eq!(factorial_real(0.5_f64).unwrap(), 1.0);
}

#[test]
fn factorial_real_bounds() {
    let big = factorial_real(170.0_f64).unwrap();
    assert!(big.is_finite() && big > 7.2e306);
    assert_eq!(factorial_real(170.5_f64), Err(MathError::DomainError));
    assert_eq!(factorial_real(-0.5_f64), Err(MathError::DomainError));
    assert_eq!(factorial_real(f64::NAN), Err(MathError::DomainError));
}

#[test]
fn factorial_real_matches_integer() {
    for n in 0..=12 {
        assert_eq!(factorial_real(n as f64).unwrap(), factorial(n).unwrap() as f64);
    }
}

#[test]
fn factorial_f32() {
    assert_eq!(factorial_real(6.0_f32).unwrap(), 720.0);
}

// ═══════════════════════════════════════════════════════════════════
// permute / choose
// ═══════════════════════════════════════════════════════════════════

#[test]
fn permute_values() {
    assert_eq!(permute(5, 2).unwrap(), 20);
    assert_eq!(permute(10, 10).unwrap(), 3_628_800);
    assert_eq!(permute(7, 0).unwrap(), 1);
    // Beyond factorial's range, still exact
    assert_eq!(permute(20, 3).unwrap(), 6840);
}

#[test]
fn permute_errors() {
    assert_eq!(permute(3, 4), Err(MathError::DomainError));
    assert_eq!(permute(-1, 0), Err(MathError::DomainError));
    assert_eq!(permute(5, -1), Err(MathError::DomainError));
    assert_eq!(permute(100, 50), Err(MathError::DomainError));
}

#[test]
fn choose_values() {
    assert_eq!(choose(0, 0).unwrap(), 1);
    assert_eq!(choose(5, 0).unwrap(), 1);
    assert_eq!(choose(5, 5).unwrap(), 1);
    assert_eq!(choose(5, 2).unwrap(), 10);
    assert_eq!(choose(37, 7).unwrap(), 10_295_472);
    assert_eq!(choose(1000, 2).unwrap(), 499_500);
}

#[test]
fn choose_is_symmetric() {
    for n in 0..30 {
        for r in 0..=n {
            assert_eq!(choose(n, r).unwrap(), choose(n, n - r).unwrap());
        }
    }
}

#[test]
fn choose_pascal_rule() {
    for n in 1..40 {
        for r in 1..n {
            let lhs = choose(n, r).unwrap();
            let rhs = choose(n - 1, r - 1).unwrap() + choose(n - 1, r).unwrap();
            assert_eq!(lhs, rhs);
        }
    }
}

#[test]
fn choose_largest_fitting_row() {
    assert_eq!(choose(66, 33).unwrap(), 7_219_428_434_016_265_740);
    assert_eq!(choose(68, 34), Err(MathError::DomainError));
}

#[test]
fn choose_errors() {
    assert_eq!(choose(3, 4), Err(MathError::DomainError));
    assert_eq!(choose(-2, 1), Err(MathError::DomainError));
    assert_eq!(choose(4, -1), Err(MathError::DomainError));
    assert_eq!(choose(200, 100), Err(MathError::DomainError));
}

#[test]
fn choose_huge_n_small_k() {
    let n = i32::MAX;
    assert_eq!(choose(n, 1).unwrap(), i64::from(n));
    assert_eq!(choose(n, n - 1).unwrap(), i64::from(n));
    assert_eq!(choose(n, 2).unwrap(), 2_305_843_005_992_468_481);
    assert_eq!(choose(n, 3), Err(MathError::DomainError));
    assert_eq!(choose(n, n).unwrap(), 1);
}
