//! Payment records
//!
//! A payment is an append-mostly ledger record owned by one (member, fund)
//! pair. The engine only ever reads payments; recording and deletion are the
//! storage collaborator's job, and either mutation obliges the caller to
//! re-sync the owning enrollment.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{FundId, MemberId, MonthKey, PaymentId};

use crate::fund::PaymentSchedule;

/// An immutable contribution record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Paying member
    pub member_id: MemberId,
    /// Fund paid into
    pub fund_id: FundId,
    /// Contribution amount; zero is allowed, negative is not contractually defined
    pub amount: Decimal,
    /// Late-payment surcharge; never counts toward contribution totals
    pub penalty: Decimal,
    /// Date the money changed hands
    pub payment_date: NaiveDate,
    /// Allocation label; this, not `payment_date`, decides the bucket
    pub month: MonthKey,
    /// Mode the payer committed to for this month
    pub schedule: PaymentSchedule,
    /// Payment channel (cash, transfer, ...), opaque to the engine
    pub mode: Option<String>,
    /// Free-text notes, opaque to the engine
    pub notes: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Creates a new payment
    ///
    /// The allocation month is auto-derived from `payment_date`; use
    /// [`with_month`](Self::with_month) when the payer is paying for a
    /// different month than the one the money arrived in.
    pub fn new(
        member_id: MemberId,
        fund_id: FundId,
        amount: Decimal,
        payment_date: NaiveDate,
    ) -> Self {
        Self {
            id: PaymentId::new_v7(),
            member_id,
            fund_id,
            amount,
            penalty: Decimal::ZERO,
            payment_date,
            month: MonthKey::from_date(payment_date),
            schedule: PaymentSchedule::Monthly,
            mode: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    /// Sets an explicit allocation month
    pub fn with_month(mut self, month: MonthKey) -> Self {
        self.month = month;
        self
    }

    /// Sets the committed payment schedule for the month
    pub fn with_schedule(mut self, schedule: PaymentSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Sets a late-payment penalty
    pub fn with_penalty(mut self, penalty: Decimal) -> Self {
        self.penalty = penalty;
        self
    }

    /// Sets the payment channel
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Sets free-text notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_month_auto_derived_from_date() {
        let payment = Payment::new(
            MemberId::new(),
            FundId::new(),
            dec!(100),
            NaiveDate::from_ymd_opt(2026, 3, 17).unwrap(),
        );

        assert_eq!(payment.month.to_string(), "2026-03");
        assert_eq!(payment.penalty, Decimal::ZERO);
    }

    #[test]
    fn test_explicit_month_overrides_date() {
        let payment = Payment::new(
            MemberId::new(),
            FundId::new(),
            dec!(100),
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        )
        .with_month("2026-02".parse().unwrap());

        assert_eq!(payment.month.to_string(), "2026-02");
        assert_eq!(payment.payment_date.to_string(), "2026-03-02");
    }

    #[test]
    fn test_builder_fields() {
        let payment = Payment::new(
            MemberId::new(),
            FundId::new(),
            dec!(100),
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        )
        .with_schedule(PaymentSchedule::Weekly)
        .with_penalty(dec!(10))
        .with_mode("upi")
        .with_notes("late by two days");

        assert_eq!(payment.schedule, PaymentSchedule::Weekly);
        assert_eq!(payment.penalty, dec!(10));
        assert_eq!(payment.mode.as_deref(), Some("upi"));
        assert_eq!(payment.notes.as_deref(), Some("late by two days"));
    }
}
