//! Money helpers with precise decimal arithmetic
//!
//! All monetary values in the system are `rust_decimal::Decimal`, never binary
//! floating point, so that repeated reconciliation runs never drift at the
//! cent level. The fund currency is uniform across the system, so amounts are
//! bare decimals rather than a currency-tagged type.

use rust_decimal::Decimal;

/// Decimal places used for user-facing monetary values
pub const MONEY_DP: u32 = 2;

/// Rounds a monetary value to display precision (2 decimal places)
///
/// Used for derived values handed to reporting collaborators, e.g. the
/// recommended weekly/daily installments. Internal accumulation is never
/// rounded.
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp(MONEY_DP)
}

/// Clamps a monetary value to zero from below
///
/// Pending balances, bucket balances, and carry-forwards are never negative:
/// an overpayment rolls forward, it does not turn an obligation into a credit.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Computes `part` as a percentage of `whole`, clamped to 100
///
/// # Returns
///
/// The percentage rounded to 2 decimal places, or zero when `whole` is zero.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    let percent = part / whole * Decimal::ONE_HUNDRED;
    round_display(percent.min(Decimal::ONE_HUNDRED))
}
