//! Chit-Fund Ledger Domain
//!
//! This crate implements the balance/ledger reconciliation engine for group
//! savings ("chit") funds: members enroll in a fund with a fixed total amount
//! and duration, make periodic contributions, and every derived figure is
//! recomputed from the raw payment records.
//!
//! # Key Concepts
//!
//! - **Fund**: a fixed-total, fixed-duration savings pool
//! - **Enrollment**: one member's membership in one fund, carrying cached
//!   aggregate balances that are never authoritative
//! - **Payment**: an immutable contribution record tagged with a `YYYY-MM`
//!   allocation label
//! - **Month bucket**: one month of the fund's duration, with its own target,
//!   carry-in, and completion status
//! - **Carry-forward**: overpayment in one month rolled into the next month's
//!   available funds
//!
//! # Source of Truth
//!
//! The payment list is the single source of truth. Cached enrollment
//! aggregates are restored by [`service::LedgerService::sync_enrollment`],
//! which callers must invoke after every payment insert or delete. All engine
//! computation is pure and takes the clock as an explicit parameter.

pub mod current_period;
pub mod enrollment;
pub mod error;
pub mod fund;
pub mod payment;
pub mod ports;
pub mod reconcile;
pub mod report;
pub mod schedule;
pub mod service;
pub mod tracking;

pub use current_period::{current_period_balance, CurrentPeriodBalance};
pub use enrollment::Enrollment;
pub use error::{LedgerError, SyncError};
pub use fund::{Fund, FundStatus, PaymentSchedule};
pub use payment::Payment;
pub use ports::EnrollmentStore;
pub use reconcile::{overdue_months, reconcile, ReconciliationResult};
pub use report::{fund_tracking, FundTrackingReport, MemberTracking};
pub use schedule::{check_month_mode, monthly_payment_limit, next_due, DueDate};
pub use service::LedgerService;
pub use tracking::{build_tracking, BucketStatus, MonthBucket, MonthlyTracking};
