//! Core Kernel - Foundational types and utilities for the chit-fund ledger
//!
//! This crate provides the fundamental building blocks used across the domain
//! modules:
//! - Decimal money helpers with precise arithmetic
//! - Calendar-month arithmetic for period bucketing
//! - Common identifiers and value objects
//! - Port infrastructure for external collaborators

pub mod identifiers;
pub mod money;
pub mod ports;
pub mod temporal;

pub use identifiers::{EnrollmentId, FundId, MemberId, PaymentId};
pub use money::{clamp_non_negative, percent_of, round_display, MONEY_DP};
pub use ports::{DomainPort, PortError};
pub use temporal::{MonthKey, TemporalError};
