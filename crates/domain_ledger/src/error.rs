//! Ledger domain errors

use core_kernel::{MonthKey, PortError};
use thiserror::Error;

use crate::fund::PaymentSchedule;

/// Errors that can occur in the ledger domain
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid fund: {0}")]
    InvalidFund(String),

    #[error("Payment mode mismatch for {month}: month is locked to '{locked}', requested '{requested}'")]
    ModeMismatch {
        month: MonthKey,
        locked: PaymentSchedule,
        requested: PaymentSchedule,
    },

    #[error("Payment limit reached for {month}: {count} payment(s) recorded, limit for '{schedule}' mode is {limit}")]
    PaymentLimitReached {
        month: MonthKey,
        schedule: PaymentSchedule,
        limit: u32,
        count: u32,
    },
}

/// Errors from an enrollment sync
///
/// The computation itself is pure and cannot fail; only the aggregate
/// write-back can, and that failure is kept distinct so callers can retry the
/// persistence without recomputing.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Aggregate write-back failed: {0}")]
    Storage(#[from] PortError),
}
