//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults, so
//! tests specify only the fields they care about. Defaults follow the
//! canonical fixture fund: 1000 over 10 months starting January 2026.

use chrono::NaiveDate;
use core_kernel::{FundId, MemberId, MonthKey};
use rust_decimal::Decimal;

use domain_ledger::{Enrollment, Fund, Payment, PaymentSchedule};

use crate::fixtures::{AmountFixtures, DateFixtures};

/// Builder for test funds
pub struct TestFundBuilder {
    name: String,
    total_amount: Decimal,
    duration: u32,
    start_date: Option<NaiveDate>,
    schedule: PaymentSchedule,
}

impl Default for TestFundBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFundBuilder {
    /// Creates a builder with the canonical fund defaults
    pub fn new() -> Self {
        Self {
            name: "Test Pool".to_string(),
            total_amount: AmountFixtures::fund_total(),
            duration: 10,
            start_date: Some(DateFixtures::fund_start()),
            schedule: PaymentSchedule::Monthly,
        }
    }

    /// Sets the fund name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the total amount
    pub fn with_total_amount(mut self, total_amount: Decimal) -> Self {
        self.total_amount = total_amount;
        self
    }

    /// Sets the duration in months
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the start date
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Clears the start date to exercise the fallback path
    pub fn without_start_date(mut self) -> Self {
        self.start_date = None;
        self
    }

    /// Sets the nominal schedule
    pub fn with_schedule(mut self, schedule: PaymentSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Builds the fund
    ///
    /// # Panics
    ///
    /// Panics when the configured invariants are invalid; tests for invalid
    /// funds should call `Fund::new` directly.
    pub fn build(self) -> Fund {
        let mut fund = Fund::new(self.name, self.total_amount, self.duration)
            .expect("test fund must satisfy fund invariants")
            .with_schedule(self.schedule);
        if let Some(start_date) = self.start_date {
            fund = fund.with_start_date(start_date);
        }
        fund
    }
}

/// Builder for test payments against one fund
pub struct TestPaymentBuilder {
    member_id: MemberId,
    fund_id: FundId,
    amount: Decimal,
    payment_date: NaiveDate,
    month: Option<MonthKey>,
    schedule: PaymentSchedule,
    penalty: Decimal,
}

impl TestPaymentBuilder {
    /// Creates a builder for a payment into the given fund
    pub fn for_fund(fund: &Fund) -> Self {
        Self {
            member_id: MemberId::new(),
            fund_id: fund.id,
            amount: AmountFixtures::exact_installment(),
            payment_date: DateFixtures::first_month_payment(),
            month: None,
            schedule: PaymentSchedule::Monthly,
            penalty: Decimal::ZERO,
        }
    }

    /// Sets the paying member
    pub fn with_member(mut self, member_id: MemberId) -> Self {
        self.member_id = member_id;
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the payment date
    pub fn with_payment_date(mut self, payment_date: NaiveDate) -> Self {
        self.payment_date = payment_date;
        self
    }

    /// Sets an explicit allocation month
    pub fn with_month(mut self, month: MonthKey) -> Self {
        self.month = Some(month);
        self
    }

    /// Sets the committed schedule
    pub fn with_schedule(mut self, schedule: PaymentSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Sets a penalty
    pub fn with_penalty(mut self, penalty: Decimal) -> Self {
        self.penalty = penalty;
        self
    }

    /// Builds the payment
    pub fn build(self) -> Payment {
        let mut payment = Payment::new(self.member_id, self.fund_id, self.amount, self.payment_date)
            .with_schedule(self.schedule)
            .with_penalty(self.penalty);
        if let Some(month) = self.month {
            payment = payment.with_month(month);
        }
        payment
    }
}

/// Enrolls a fresh member in the fund
pub fn test_enrollment(fund: &Fund) -> Enrollment {
    Enrollment::new(MemberId::new(), fund)
}
