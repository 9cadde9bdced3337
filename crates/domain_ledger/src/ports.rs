//! Ledger Domain Ports
//!
//! Port interfaces for the external collaborators the ledger engine depends
//! on. The engine never touches storage itself; it computes, and an adapter
//! behind [`EnrollmentStore`] persists the derived aggregates.
//!
//! The storage layer is expected to provide per-enrollment mutual exclusion
//! around the record-payment-then-sync sequence; the port carries no locking
//! of its own.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::enrollment::Enrollment;

/// Write-back port for enrollment aggregates
///
/// Implementations persist the cached `total_paid` / `pending_balance` pair
/// after a sync. A vanished enrollment row surfaces as
/// [`PortError::NotFound`].
#[async_trait]
pub trait EnrollmentStore: DomainPort {
    /// Persists the enrollment's cached aggregate fields
    async fn save_aggregates(&self, enrollment: &Enrollment) -> Result<(), PortError>;
}
