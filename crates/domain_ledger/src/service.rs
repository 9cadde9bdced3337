//! Enrollment sync service
//!
//! Pairs the pure reconciliation with the aggregate write-back. Callers must
//! run this after every payment insert or delete for the enrollment, and must
//! serialize the payment mutation and the sync as one logical unit per
//! (member, fund).

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

use crate::enrollment::Enrollment;
use crate::error::SyncError;
use crate::fund::Fund;
use crate::payment::Payment;
use crate::ports::EnrollmentStore;
use crate::reconcile::{reconcile, ReconciliationResult};

/// Recomputes and persists enrollment aggregates
pub struct LedgerService {
    enrollment_store: Arc<dyn EnrollmentStore>,
}

impl LedgerService {
    /// Creates the service over a storage adapter
    pub fn new(enrollment_store: Arc<dyn EnrollmentStore>) -> Self {
        Self { enrollment_store }
    }

    /// Recomputes the enrollment's aggregates from its payments and persists them
    ///
    /// Idempotent: re-running with unchanged payments writes the same values.
    /// The computation cannot fail; a storage failure surfaces as
    /// [`SyncError::Storage`] and leaves the payments untouched, so the sync
    /// can simply be retried.
    pub async fn sync_enrollment(
        &self,
        fund: &Fund,
        enrollment: &mut Enrollment,
        payments: &[Payment],
        today: NaiveDate,
    ) -> Result<ReconciliationResult, SyncError> {
        let result = reconcile(fund, payments, today);
        enrollment.apply(&result);

        self.enrollment_store.save_aggregates(enrollment).await?;

        debug!(
            enrollment_id = %enrollment.id,
            total_paid = %result.total_paid,
            pending_balance = %result.pending_balance,
            overdue_months = result.overdue_months,
            "enrollment aggregates synced"
        );

        Ok(result)
    }
}
