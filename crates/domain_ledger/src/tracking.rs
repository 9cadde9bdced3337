//! Month-by-month tracking with carry-forward allocation
//!
//! The core of the ledger engine: a single chronological pass over the fund's
//! months that allocates each month's payments against the fixed monthly
//! target and rolls any excess into the next month. A shortfall never borrows
//! from a later month; carry-forward stops at zero.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{clamp_non_negative, MonthKey};

use crate::fund::Fund;
use crate::payment::Payment;

/// Completion status of one month bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BucketStatus {
    /// The month exists in the calendar but not in the fund's tracking window
    #[serde(rename = "Not Started")]
    NotStarted,
    /// Nothing available for the month
    Pending,
    /// Something available, but less than the monthly target
    Partial,
    /// Monthly target met
    Completed,
}

/// One month of the fund's duration, as derived from the payment list
///
/// Engine-internal derived record; recomputed on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthBucket {
    /// The month label this bucket covers
    pub month: MonthKey,
    /// Sum of payments labeled with this month
    pub paid: Decimal,
    /// Overpayment rolled in from the previous month
    pub carry_in: Decimal,
    /// `paid + carry_in`
    pub total: Decimal,
    /// Completion status
    pub status: BucketStatus,
    /// `max(0, monthly_target - total)`
    pub balance: Decimal,
}

/// The full derived ledger for one enrollment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTracking {
    /// One bucket per month of the fund's duration, in chronological order
    pub buckets: Vec<MonthBucket>,
    /// The fixed per-month obligation
    pub monthly_target: Decimal,
    /// Overpayment left after the final month
    pub carry_forward_remaining: Decimal,
}

impl MonthlyTracking {
    /// The bucket covering the given month, if it is inside the fund's window
    pub fn bucket_for(&self, month: MonthKey) -> Option<&MonthBucket> {
        self.buckets.iter().find(|b| b.month == month)
    }
}

/// Derives the month-by-month completion ledger for one enrollment
///
/// Walks the fund's months in fixed chronological order, summing the payments
/// labeled with each month and carrying overpayment forward. Within a month
/// the allocation is order-independent; only the month sequence matters.
///
/// Payments whose label falls outside the fund's window (pre-start,
/// post-duration, mislabeled) appear in no bucket. They still count toward
/// the unconditional total in [`crate::reconcile`] — see the notes there.
///
/// `today` is only used as the start-month fallback for funds without a
/// usable start date.
pub fn build_tracking(fund: &Fund, payments: &[Payment], today: NaiveDate) -> MonthlyTracking {
    let monthly_target = fund.monthly_target();
    let start = fund.start_month(today);

    let mut carry_forward = Decimal::ZERO;
    let mut buckets = Vec::with_capacity(fund.duration as usize);

    for i in 0..fund.duration {
        let month = start.advance(i);

        let paid: Decimal = payments
            .iter()
            .filter(|p| p.month == month)
            .map(|p| p.amount)
            .sum();

        let total = paid + carry_forward;

        let status = if total >= monthly_target {
            BucketStatus::Completed
        } else if total > Decimal::ZERO {
            BucketStatus::Partial
        } else {
            BucketStatus::Pending
        };

        buckets.push(MonthBucket {
            month,
            paid,
            carry_in: carry_forward,
            total,
            status,
            balance: clamp_non_negative(monthly_target - total),
        });

        carry_forward = clamp_non_negative(total - monthly_target);
    }

    MonthlyTracking {
        buckets,
        monthly_target,
        carry_forward_remaining: carry_forward,
    }
}
