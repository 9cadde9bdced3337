//! In-memory `EnrollmentStore` adapters
//!
//! Mock adapters for exercising the sync service without a database: one
//! that records every write, and one that always fails to simulate a storage
//! outage.

use async_trait::async_trait;
use std::sync::Mutex;

use core_kernel::{DomainPort, PortError};
use domain_ledger::{Enrollment, EnrollmentStore};

/// Records every aggregate write for later inspection
#[derive(Default)]
pub struct InMemoryEnrollmentStore {
    saved: Mutex<Vec<Enrollment>>,
}

impl InMemoryEnrollmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every enrollment state handed to `save_aggregates`, in order
    pub fn saved(&self) -> Vec<Enrollment> {
        self.saved.lock().unwrap().clone()
    }

    /// Number of writes performed
    pub fn write_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }
}

impl DomainPort for InMemoryEnrollmentStore {}

#[async_trait]
impl EnrollmentStore for InMemoryEnrollmentStore {
    async fn save_aggregates(&self, enrollment: &Enrollment) -> Result<(), PortError> {
        self.saved.lock().unwrap().push(enrollment.clone());
        Ok(())
    }
}

/// Always fails with a transient connection error
pub struct UnreachableEnrollmentStore;

impl DomainPort for UnreachableEnrollmentStore {}

#[async_trait]
impl EnrollmentStore for UnreachableEnrollmentStore {
    async fn save_aggregates(&self, _enrollment: &Enrollment) -> Result<(), PortError> {
        Err(PortError::connection("enrollment store unreachable"))
    }
}
