//! Schedule rules: per-month mode lock, payment limits, next due date
//!
//! The first payment recorded for a calendar month fixes that month's payment
//! mode; later payments in the same month must use the same mode and stay
//! under the mode's count limit. These are pure checks over the existing
//! payment list; enforcing them before a write is the recording
//! collaborator's job.

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::MonthKey;

use crate::error::LedgerError;
use crate::fund::{Fund, PaymentSchedule};
use crate::payment::Payment;

/// Maximum number of payments allowed in one calendar month for a mode
///
/// Monthly pays once; weekly pays once per started seven-day span; daily pays
/// once per day.
pub fn monthly_payment_limit(schedule: PaymentSchedule, month: MonthKey) -> u32 {
    let days = month.days_in_month();
    match schedule {
        PaymentSchedule::Monthly => 1,
        PaymentSchedule::Weekly => days.div_ceil(7),
        PaymentSchedule::Daily => days,
    }
}

/// Checks whether another payment with `requested` mode may join `month`
///
/// # Errors
///
/// - [`LedgerError::ModeMismatch`] when the month is already locked to a
///   different mode
/// - [`LedgerError::PaymentLimitReached`] when the mode's count limit for the
///   month is exhausted
pub fn check_month_mode(
    existing: &[Payment],
    month: MonthKey,
    requested: PaymentSchedule,
) -> Result<(), LedgerError> {
    let in_month: Vec<&Payment> = existing.iter().filter(|p| p.month == month).collect();

    let Some(first) = in_month.first() else {
        return Ok(());
    };

    let locked = first.schedule;
    if locked != requested {
        return Err(LedgerError::ModeMismatch {
            month,
            locked,
            requested,
        });
    }

    let limit = monthly_payment_limit(locked, month);
    let count = in_month.len() as u32;
    if count >= limit {
        return Err(LedgerError::PaymentLimitReached {
            month,
            schedule: locked,
            limit,
            count,
        });
    }

    Ok(())
}

/// When the next contribution is due
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDate {
    /// The first month not yet covered by whole monthly targets
    pub month: MonthKey,
    /// Concrete due date; None for daily schedules, which are due every day
    pub date: Option<NaiveDate>,
}

/// Derives the next due date for an enrollment
///
/// The base month is the start month advanced by the number of whole monthly
/// targets already covered by `total_paid`. Monthly schedules fall due on the
/// 5th of that month; weekly schedules on the next Sunday on or after
/// `today`; daily schedules have no single date.
pub fn next_due(
    fund: &Fund,
    schedule: PaymentSchedule,
    total_paid: Decimal,
    today: NaiveDate,
) -> DueDate {
    let intervals_paid = (total_paid / fund.monthly_target())
        .floor()
        .to_u32()
        .unwrap_or(0);
    let month = fund.start_month(today).advance(intervals_paid);

    let date = match schedule {
        PaymentSchedule::Monthly => Some(
            month
                .first_day()
                .with_day(5)
                .expect("day 5 exists in every month"),
        ),
        PaymentSchedule::Weekly => {
            let until_sunday = (7 - today.weekday().num_days_from_sunday()) % 7;
            Some(today + chrono::Duration::days(until_sunday as i64))
        }
        PaymentSchedule::Daily => None,
    };

    DueDate { month, date }
}
