//! Current-period balance and installment recommendation
//!
//! Answers "what do I owe this month, and how should I spread it": locates
//! the bucket for the month containing `now`, then splits its balance across
//! the month's remaining structure as calendar-aware weekly and daily
//! recommendations. The clock is injected so reports are reproducible.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{round_display, MonthKey};

use crate::enrollment::Enrollment;
use crate::fund::{Fund, PaymentSchedule};
use crate::payment::Payment;
use crate::tracking::{build_tracking, BucketStatus};

/// This month's position and recommended installments for one enrollment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentPeriodBalance {
    /// The month containing `now`
    pub month: MonthKey,
    /// Payments labeled with this month
    pub paid: Decimal,
    /// What is still owed for this month
    pub balance: Decimal,
    /// Bucket status; `NotStarted` when `now` is outside the fund's window
    pub status: BucketStatus,
    /// The fixed per-month obligation
    pub monthly_target: Decimal,
    /// Calendar week rows in this month
    pub weeks_in_month: u32,
    /// Days in this month
    pub days_in_month: u32,
    /// `balance / weeks_in_month`, display-rounded
    pub recommended_weekly: Decimal,
    /// `balance / days_in_month`, display-rounded
    pub recommended_daily: Decimal,
    /// The enrollment's payment schedule label
    pub schedule: PaymentSchedule,
}

/// Derives the current month's balance and installment recommendations
///
/// When the current month has no bucket (the fund has not reached it, or
/// already ended) the result is synthesized as an untouched month: nothing
/// paid, the full monthly target owed, status `Not Started`.
pub fn current_period_balance(
    fund: &Fund,
    enrollment: &Enrollment,
    payments: &[Payment],
    now: NaiveDate,
) -> CurrentPeriodBalance {
    let tracking = build_tracking(fund, payments, now);
    let month = MonthKey::from_date(now);

    let (paid, balance, status) = match tracking.bucket_for(month) {
        Some(bucket) => (bucket.paid, bucket.balance, bucket.status),
        None => (
            Decimal::ZERO,
            tracking.monthly_target,
            BucketStatus::NotStarted,
        ),
    };

    let weeks_in_month = month.weeks_in_month();
    let days_in_month = month.days_in_month();

    CurrentPeriodBalance {
        month,
        paid,
        balance,
        status,
        monthly_target: tracking.monthly_target,
        weeks_in_month,
        days_in_month,
        recommended_weekly: round_display(balance / Decimal::from(weeks_in_month)),
        recommended_daily: round_display(balance / Decimal::from(days_in_month)),
        schedule: enrollment.schedule,
    }
}
