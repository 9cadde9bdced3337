//! Enrollment reconciliation and overdue derivation
//!
//! Both derivations here work from the unconditional payment total: every
//! payment amount counts, whatever its allocation label. A payment mislabeled
//! outside the fund's window therefore inflates `total_paid` and lowers both
//! `pending_balance` and the overdue count while appearing in no bucket of
//! [`crate::tracking`]. That asymmetry is inherited behavior and is kept
//! deliberately; do not reconcile the two views here without a product
//! decision.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{clamp_non_negative, MonthKey};

use crate::fund::Fund;
use crate::payment::Payment;

/// Derived aggregate totals for one enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// Sum of every payment amount, penalties excluded
    pub total_paid: Decimal,
    /// `max(0, total_amount - total_paid)`
    pub pending_balance: Decimal,
    /// Whole months of shortfall given elapsed time, capped at the duration
    pub overdue_months: u32,
}

/// Unconditional contribution total for a payment list
///
/// Sums `amount` only; penalties are surcharges, not contributions.
pub fn total_paid(payments: &[Payment]) -> Decimal {
    payments.iter().map(|p| p.amount).sum()
}

/// Recomputes the cached aggregates for one enrollment from its payments
///
/// Pure and idempotent: identical inputs always produce identical results,
/// and calling it redundantly is safe. Payments are never mutated.
pub fn reconcile(fund: &Fund, payments: &[Payment], today: NaiveDate) -> ReconciliationResult {
    let total_paid = total_paid(payments);

    ReconciliationResult {
        total_paid,
        pending_balance: clamp_non_negative(fund.total_amount - total_paid),
        overdue_months: overdue_months(fund, payments, today),
    }
}

/// How many months' worth of contribution the enrollment is behind
///
/// Measures the aggregate shortfall against elapsed calendar time,
/// independent of the bucket ledger: with `months_passed` counted
/// inclusively from the start month and capped at the fund duration,
/// the shortfall is `months_passed * monthly_target - total_paid`, and the
/// overdue count is that shortfall in whole (rounded-up) monthly targets.
/// Never negative, never more than the fund's own length.
pub fn overdue_months(fund: &Fund, payments: &[Payment], now: NaiveDate) -> u32 {
    let monthly_target = fund.monthly_target();
    let start = fund.start_month(now);

    let months_passed = MonthKey::from_date(now).months_since(start) + 1;
    let months_passed = months_passed.min(fund.duration as i64);

    let expected_by_now = Decimal::from(months_passed) * monthly_target;
    let shortfall = expected_by_now - total_paid(payments);

    if shortfall <= Decimal::ZERO {
        return 0;
    }

    // shortfall <= expected_by_now, so the quotient is capped by months_passed
    (shortfall / monthly_target)
        .ceil()
        .to_u32()
        .unwrap_or(fund.duration)
}
