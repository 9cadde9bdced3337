//! Custom Test Assertions
//!
//! Assertion helpers for decimal amounts that give more meaningful error
//! messages than standard assertions.

use rust_decimal::Decimal;

/// Asserts that two decimal amounts are equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than `tolerance`.
pub fn assert_amount_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that an amount is not negative
///
/// # Panics
///
/// Panics if the amount is below zero.
pub fn assert_amount_non_negative(amount: Decimal) {
    assert!(amount >= Decimal::ZERO, "expected non-negative amount, got {}", amount);
}
