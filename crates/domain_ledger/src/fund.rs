//! Fund definition
//!
//! A fund is a fixed-total, fixed-duration savings pool. The duration is
//! always counted in months regardless of the nominal payment schedule label;
//! the label only describes how members prefer to pay within a month.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use core_kernel::{FundId, MonthKey};

use crate::error::LedgerError;

/// How a member pays within a month
///
/// Informational for the monthly-bucket allocation, which never varies by it,
/// but load-bearing for the per-month payment limits in [`crate::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentSchedule {
    Daily,
    Weekly,
    Monthly,
}

impl Default for PaymentSchedule {
    fn default() -> Self {
        PaymentSchedule::Monthly
    }
}

impl fmt::Display for PaymentSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentSchedule::Daily => "daily",
            PaymentSchedule::Weekly => "weekly",
            PaymentSchedule::Monthly => "monthly",
        };
        write!(f, "{}", label)
    }
}

/// Fund lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundStatus {
    Active,
    Closed,
}

/// A fixed-total, fixed-duration group savings pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fund {
    /// Unique identifier
    pub id: FundId,
    /// Fund name
    pub name: String,
    /// Total amount each member contributes over the full duration
    pub total_amount: Decimal,
    /// Number of monthly periods
    pub duration: u32,
    /// First contribution month; None degrades recoverably (see `start_month`)
    pub start_date: Option<NaiveDate>,
    /// Nominal payment schedule label
    pub schedule: PaymentSchedule,
    /// Lifecycle status
    pub status: FundStatus,
    /// Free-text terms and conditions
    pub terms: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Fund {
    /// Creates a new fund
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidFund`] when `total_amount` is not
    /// positive or `duration` is zero. Duration zero must never reach the
    /// engine; this constructor is the gate.
    pub fn new(
        name: impl Into<String>,
        total_amount: Decimal,
        duration: u32,
    ) -> Result<Self, LedgerError> {
        if total_amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidFund(format!(
                "total_amount must be positive, got {}",
                total_amount
            )));
        }
        if duration == 0 {
            return Err(LedgerError::InvalidFund(
                "duration must be at least 1 month".to_string(),
            ));
        }

        Ok(Self {
            id: FundId::new_v7(),
            name: name.into(),
            total_amount,
            duration,
            start_date: None,
            schedule: PaymentSchedule::Monthly,
            status: FundStatus::Active,
            terms: None,
            created_at: Utc::now(),
        })
    }

    /// Sets the start date
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the nominal payment schedule
    pub fn with_schedule(mut self, schedule: PaymentSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Sets the terms and conditions text
    pub fn with_terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = Some(terms.into());
        self
    }

    /// The fixed per-month obligation: `total_amount / duration`
    ///
    /// Decimal division, not integer; a 1000/3 fund owes 333.33… per month
    /// and the ledger carries the exact value.
    pub fn monthly_target(&self) -> Decimal {
        self.total_amount / Decimal::from(self.duration)
    }

    /// The month of the first period
    ///
    /// A fund without a usable start date falls back to `today` so derivation
    /// can continue; the degradation is logged, never fatal.
    pub fn start_month(&self, today: NaiveDate) -> MonthKey {
        match self.start_date {
            Some(date) => MonthKey::from_date(date),
            None => {
                warn!(fund_id = %self.id, "fund has no start date, defaulting to current date");
                MonthKey::from_date(today)
            }
        }
    }
}
