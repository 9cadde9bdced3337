//! Enrollment: one member's membership in one fund
//!
//! The aggregate balance fields here are cached derived values, never
//! authoritative. They go stale the moment a payment is inserted or deleted
//! and are restored by the next sync; the payment list is the source of truth.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{percent_of, EnrollmentId, FundId, MemberId};

use crate::fund::{Fund, PaymentSchedule};
use crate::reconcile::ReconciliationResult;

/// One member's enrollment in one fund
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    /// Unique identifier
    pub id: EnrollmentId,
    /// The enrolled member
    pub member_id: MemberId,
    /// The fund enrolled in
    pub fund_id: FundId,
    /// Cached: sum of every payment amount for this enrollment
    pub total_paid: Decimal,
    /// Cached: `max(0, total_amount - total_paid)`
    pub pending_balance: Decimal,
    /// Payment schedule label, inherited from the fund at enrollment time
    pub schedule: PaymentSchedule,
    /// When the member joined
    pub joined_at: DateTime<Utc>,
}

impl Enrollment {
    /// Enrolls a member in a fund
    ///
    /// Aggregates start at nothing-paid / everything-pending; the first sync
    /// after a payment keeps them honest from then on.
    pub fn new(member_id: MemberId, fund: &Fund) -> Self {
        Self {
            id: EnrollmentId::new_v7(),
            member_id,
            fund_id: fund.id,
            total_paid: Decimal::ZERO,
            pending_balance: fund.total_amount,
            schedule: fund.schedule,
            joined_at: Utc::now(),
        }
    }

    /// Overrides the inherited payment schedule
    pub fn with_schedule(mut self, schedule: PaymentSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Applies a reconciliation result to the cached aggregates
    pub fn apply(&mut self, result: &ReconciliationResult) {
        self.total_paid = result.total_paid;
        self.pending_balance = result.pending_balance;
    }

    /// Contribution progress as a percentage of the fund total, capped at 100
    pub fn progress_percent(&self, total_amount: Decimal) -> Decimal {
        percent_of(self.total_paid, total_amount)
    }
}
