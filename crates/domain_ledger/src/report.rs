//! Fund-wide tracking report
//!
//! Reporting view for admins: one tracking row per member of a fund. Pure
//! composition over [`crate::tracking`]; fetching the members and rendering
//! the result are the calling collaborator's concern.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{FundId, MemberId};

use crate::fund::Fund;
use crate::payment::Payment;
use crate::reconcile::total_paid;
use crate::tracking::{build_tracking, MonthBucket};

/// One member's row in the fund tracking report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberTracking {
    /// The member this row describes
    pub member_id: MemberId,
    /// Month-by-month buckets for the member's enrollment
    pub buckets: Vec<MonthBucket>,
    /// The member's unconditional contribution total
    pub total_paid: Decimal,
}

/// Month-by-month completion for every member of one fund
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundTrackingReport {
    /// The fund reported on
    pub fund_id: FundId,
    /// The fixed per-month obligation
    pub monthly_target: Decimal,
    /// One row per member
    pub members: Vec<MemberTracking>,
}

/// Builds the tracking report for one fund
///
/// `members` pairs each member with that member's payments for this fund,
/// already scoped by the caller.
pub fn fund_tracking(
    fund: &Fund,
    members: &[(MemberId, Vec<Payment>)],
    today: NaiveDate,
) -> FundTrackingReport {
    let rows = members
        .iter()
        .map(|(member_id, payments)| {
            let tracking = build_tracking(fund, payments, today);
            MemberTracking {
                member_id: *member_id,
                buckets: tracking.buckets,
                total_paid: total_paid(payments),
            }
        })
        .collect();

    FundTrackingReport {
        fund_id: fund.id,
        monthly_target: fund.monthly_target(),
        members: rows,
    }
}
