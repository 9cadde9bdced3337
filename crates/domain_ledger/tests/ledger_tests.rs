//! Comprehensive tests for the ledger engine
//!
//! End-to-end scenarios over the public engine surface: tracking, enrollment
//! sync, current-period recommendation, overdue derivation, and the schedule
//! rules, using the shared fixtures and in-memory stores from `test_utils`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use domain_ledger::{
    build_tracking, check_month_mode, current_period_balance, fund_tracking, next_due,
    overdue_months, reconcile, BucketStatus, LedgerError, LedgerService, PaymentSchedule,
    SyncError,
};
use test_utils::{
    assert_amount_approx_eq, init_test_tracing, test_enrollment, AmountFixtures, DateFixtures,
    InMemoryEnrollmentStore, MonthFixtures, TestFundBuilder, TestPaymentBuilder,
    UnreachableEnrollmentStore,
};

// ============================================================================
// Single-payment reconciliation
// ============================================================================

mod single_payment_tests {
    use super::*;

    #[test]
    fn test_exact_first_installment() {
        let fund = TestFundBuilder::new().build();
        let payments = vec![TestPaymentBuilder::for_fund(&fund)
            .with_amount(dec!(100))
            .build()];
        let now = DateFixtures::mid_second_month();

        let tracking = build_tracking(&fund, &payments, now);
        let first = &tracking.buckets[0];
        assert_eq!(first.paid, dec!(100));
        assert_eq!(first.total, dec!(100));
        assert_eq!(first.status, BucketStatus::Completed);
        assert_eq!(first.balance, Decimal::ZERO);
        assert_eq!(tracking.carry_forward_remaining, Decimal::ZERO);

        let result = reconcile(&fund, &payments, now);
        assert_eq!(result.total_paid, dec!(100));
        assert_eq!(result.pending_balance, dec!(900));
        // Two months elapsed, 200 expected, 100 short: one month overdue
        assert_eq!(result.overdue_months, 1);
    }

    #[test]
    fn test_overpaid_first_installment_carries_forward() {
        let fund = TestFundBuilder::new().build();
        let payments = vec![TestPaymentBuilder::for_fund(&fund)
            .with_amount(AmountFixtures::overpaid_installment())
            .build()];
        let now = DateFixtures::mid_second_month();

        let tracking = build_tracking(&fund, &payments, now);
        assert_eq!(tracking.buckets[0].status, BucketStatus::Completed);

        let second = &tracking.buckets[1];
        assert_eq!(second.paid, Decimal::ZERO);
        assert_eq!(second.carry_in, dec!(50));
        assert_eq!(second.total, dec!(50));
        assert_eq!(second.status, BucketStatus::Partial);
        assert_eq!(second.balance, dec!(50));
    }

    #[test]
    fn test_mislabeled_payment_counts_in_totals_but_no_bucket() {
        let fund = TestFundBuilder::new().build();
        let payments = vec![TestPaymentBuilder::for_fund(&fund)
            .with_month(MonthFixtures::out_of_window())
            .build()];
        let now = DateFixtures::mid_second_month();

        let tracking = build_tracking(&fund, &payments, now);
        let allocated: Decimal = tracking.buckets.iter().map(|b| b.paid).sum();
        assert_eq!(allocated, Decimal::ZERO);

        let result = reconcile(&fund, &payments, now);
        assert_eq!(result.total_paid, dec!(100));
        assert_eq!(result.pending_balance, dec!(900));
    }
}

// ============================================================================
// Enrollment sync through the service
// ============================================================================

mod sync_tests {
    use super::*;

    #[tokio::test]
    async fn test_sync_restores_enrollment_invariant() {
        init_test_tracing();

        let fund = TestFundBuilder::new().build();
        let mut enrollment = test_enrollment(&fund);
        let payments = vec![
            TestPaymentBuilder::for_fund(&fund)
                .with_member(enrollment.member_id)
                .with_amount(dec!(100))
                .build(),
            TestPaymentBuilder::for_fund(&fund)
                .with_member(enrollment.member_id)
                .with_amount(dec!(40))
                .with_month(MonthFixtures::february())
                .build(),
        ];

        let store = Arc::new(InMemoryEnrollmentStore::new());
        let service = LedgerService::new(store.clone());

        let result = service
            .sync_enrollment(
                &fund,
                &mut enrollment,
                &payments,
                DateFixtures::mid_second_month(),
            )
            .await
            .unwrap();

        assert_eq!(result.total_paid, dec!(140));
        assert_eq!(result.pending_balance, dec!(860));
        assert_eq!(
            enrollment.pending_balance,
            (fund.total_amount - enrollment.total_paid).max(Decimal::ZERO)
        );
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn test_sync_twice_yields_identical_aggregates() {
        let fund = TestFundBuilder::new().build();
        let mut enrollment = test_enrollment(&fund);
        let payments = vec![TestPaymentBuilder::for_fund(&fund)
            .with_member(enrollment.member_id)
            .build()];

        let store = Arc::new(InMemoryEnrollmentStore::new());
        let service = LedgerService::new(store.clone());
        let now = DateFixtures::mid_second_month();

        let first = service
            .sync_enrollment(&fund, &mut enrollment, &payments, now)
            .await
            .unwrap();
        let second = service
            .sync_enrollment(&fund, &mut enrollment, &payments, now)
            .await
            .unwrap();

        assert_eq!(first, second);
        let saved = store.saved();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].total_paid, saved[1].total_paid);
        assert_eq!(saved[0].pending_balance, saved[1].pending_balance);
    }

    #[tokio::test]
    async fn test_sync_after_payment_deletion_shrinks_totals() {
        let fund = TestFundBuilder::new().build();
        let mut enrollment = test_enrollment(&fund);
        let mut payments = vec![
            TestPaymentBuilder::for_fund(&fund)
                .with_member(enrollment.member_id)
                .build(),
            TestPaymentBuilder::for_fund(&fund)
                .with_member(enrollment.member_id)
                .with_month(MonthFixtures::february())
                .build(),
        ];

        let store = Arc::new(InMemoryEnrollmentStore::new());
        let service = LedgerService::new(store.clone());
        let now = DateFixtures::mid_second_month();

        service
            .sync_enrollment(&fund, &mut enrollment, &payments, now)
            .await
            .unwrap();
        assert_eq!(enrollment.total_paid, dec!(200));

        // Admin deletes the February payment; the caller re-syncs
        payments.pop();
        service
            .sync_enrollment(&fund, &mut enrollment, &payments, now)
            .await
            .unwrap();

        assert_eq!(enrollment.total_paid, dec!(100));
        assert_eq!(enrollment.pending_balance, dec!(900));
    }

    #[tokio::test]
    async fn test_storage_outage_surfaces_as_sync_failure() {
        let fund = TestFundBuilder::new().build();
        let mut enrollment = test_enrollment(&fund);
        let payments = vec![TestPaymentBuilder::for_fund(&fund)
            .with_member(enrollment.member_id)
            .build()];

        let service = LedgerService::new(Arc::new(UnreachableEnrollmentStore));

        let err = service
            .sync_enrollment(
                &fund,
                &mut enrollment,
                &payments,
                DateFixtures::mid_second_month(),
            )
            .await
            .unwrap_err();

        let SyncError::Storage(port_error) = err;
        assert!(port_error.is_transient());
    }
}

// ============================================================================
// Current-period balance and recommendations
// ============================================================================

mod current_period_tests {
    use super::*;

    #[test]
    fn test_untouched_current_month_recommends_full_target() {
        let fund = TestFundBuilder::new().build();
        let enrollment = test_enrollment(&fund);
        let now = DateFixtures::mid_second_month();

        let current = current_period_balance(&fund, &enrollment, &[], now);

        // Feb 2026: 4 week rows, 28 days
        assert_eq!(current.status, BucketStatus::Pending);
        assert_eq!(current.balance, dec!(100));
        assert_eq!(current.recommended_weekly, dec!(25.00));
        assert_eq!(current.recommended_daily, dec!(3.57));
        assert_eq!(current.monthly_target, dec!(100));
    }

    #[test]
    fn test_month_before_fund_start_is_not_started() {
        let fund = TestFundBuilder::new().build();
        let enrollment = test_enrollment(&fund);
        let before_start = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();

        let current = current_period_balance(&fund, &enrollment, &[], before_start);

        assert_eq!(current.status, BucketStatus::NotStarted);
        assert_eq!(current.month.to_string(), "2025-11");
        assert_eq!(current.balance, AmountFixtures::monthly_target());
        assert_eq!(
            current.recommended_weekly,
            (current.balance / Decimal::from(current.weeks_in_month)).round_dp(2)
        );
    }

    #[test]
    fn test_recommendations_follow_remaining_balance() {
        let fund = TestFundBuilder::new().build();
        let enrollment = test_enrollment(&fund);
        let payments = vec![TestPaymentBuilder::for_fund(&fund)
            .with_amount(dec!(30))
            .with_month(MonthFixtures::february())
            .build()];
        let now = DateFixtures::mid_second_month();

        let current = current_period_balance(&fund, &enrollment, &payments, now);

        assert_eq!(current.balance, dec!(70));
        assert_amount_approx_eq(current.recommended_weekly, dec!(17.50), dec!(0.01));
        assert_amount_approx_eq(current.recommended_daily, dec!(2.50), dec!(0.01));
    }
}

// ============================================================================
// Overdue derivation
// ============================================================================

mod overdue_tests {
    use super::*;

    #[test]
    fn test_overdue_grows_with_elapsed_months() {
        let fund = TestFundBuilder::new().build();

        let in_month = |m: u32| NaiveDate::from_ymd_opt(2026, m, 15).unwrap();
        assert_eq!(overdue_months(&fund, &[], in_month(1)), 1);
        assert_eq!(overdue_months(&fund, &[], in_month(2)), 2);
        assert_eq!(overdue_months(&fund, &[], in_month(5)), 5);
    }

    #[test]
    fn test_overdue_never_exceeds_fund_length() {
        let fund = TestFundBuilder::new().build();
        assert_eq!(overdue_months(&fund, &[], DateFixtures::far_future()), 10);
    }

    #[test]
    fn test_bucket_view_and_overdue_view_can_disagree() {
        // A mislabeled payment leaves every bucket pending yet still lowers
        // the overdue count: inherited behavior, kept deliberately.
        let fund = TestFundBuilder::new().build();
        let payments = vec![TestPaymentBuilder::for_fund(&fund)
            .with_amount(dec!(200))
            .with_month(MonthFixtures::out_of_window())
            .build()];
        let now = DateFixtures::mid_second_month();

        let tracking = build_tracking(&fund, &payments, now);
        assert!(tracking
            .buckets
            .iter()
            .all(|b| b.status == BucketStatus::Pending));

        assert_eq!(overdue_months(&fund, &payments, now), 0);
    }
}

// ============================================================================
// Schedule rules
// ============================================================================

mod schedule_rule_tests {
    use super::*;

    #[test]
    fn test_month_mode_locks_on_first_payment() {
        let fund = TestFundBuilder::new().build();
        let existing = vec![TestPaymentBuilder::for_fund(&fund)
            .with_month(MonthFixtures::february())
            .with_schedule(PaymentSchedule::Weekly)
            .build()];

        let err = check_month_mode(&existing, MonthFixtures::february(), PaymentSchedule::Daily)
            .unwrap_err();
        assert!(matches!(err, LedgerError::ModeMismatch { .. }));

        assert!(check_month_mode(
            &existing,
            MonthFixtures::february(),
            PaymentSchedule::Weekly
        )
        .is_ok());
    }

    #[test]
    fn test_daily_mode_limit_is_day_count() {
        let fund = TestFundBuilder::new().build();
        let existing: Vec<_> = (0..28)
            .map(|_| {
                TestPaymentBuilder::for_fund(&fund)
                    .with_month(MonthFixtures::february())
                    .with_schedule(PaymentSchedule::Daily)
                    .with_amount(dec!(4))
                    .build()
            })
            .collect();

        let err = check_month_mode(&existing, MonthFixtures::february(), PaymentSchedule::Daily)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::PaymentLimitReached {
                limit: 28,
                count: 28,
                ..
            }
        ));
    }

    #[test]
    fn test_next_due_advances_with_covered_targets() {
        let fund = TestFundBuilder::new().build();
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

        let due = next_due(&fund, PaymentSchedule::Monthly, dec!(300), today);
        assert_eq!(due.month.to_string(), "2026-04");
        assert_eq!(due.date, NaiveDate::from_ymd_opt(2026, 4, 5));
    }
}

// ============================================================================
// Fund-wide reporting
// ============================================================================

mod report_tests {
    use super::*;
    use core_kernel::MemberId;

    #[test]
    fn test_fund_tracking_report_across_members() {
        let fund = TestFundBuilder::new().build();
        let now = DateFixtures::mid_second_month();

        let ahead = MemberId::new();
        let behind = MemberId::new();

        let members = vec![
            (
                ahead,
                vec![TestPaymentBuilder::for_fund(&fund)
                    .with_member(ahead)
                    .with_amount(dec!(250))
                    .build()],
            ),
            (behind, Vec::new()),
        ];

        let report = fund_tracking(&fund, &members, now);

        assert_eq!(report.fund_id, fund.id);
        assert_eq!(report.monthly_target, dec!(100));

        let ahead_row = &report.members[0];
        assert_eq!(ahead_row.total_paid, dec!(250));
        assert_eq!(ahead_row.buckets[0].status, BucketStatus::Completed);
        assert_eq!(ahead_row.buckets[1].status, BucketStatus::Completed);
        assert_eq!(ahead_row.buckets[2].status, BucketStatus::Partial);

        let behind_row = &report.members[1];
        assert_eq!(behind_row.total_paid, Decimal::ZERO);
        assert!(behind_row
            .buckets
            .iter()
            .all(|b| b.status == BucketStatus::Pending));
    }
}

// ============================================================================
// Degraded inputs
// ============================================================================

mod degraded_input_tests {
    use super::*;

    #[test]
    fn test_fund_without_start_date_still_tracks() {
        init_test_tracing();

        let fund = TestFundBuilder::new().without_start_date().build();
        let now = DateFixtures::mid_second_month();

        let tracking = build_tracking(&fund, &[], now);

        assert_eq!(tracking.buckets.len(), 10);
        assert_eq!(tracking.buckets[0].month.to_string(), "2026-02");
    }

    #[test]
    fn test_zero_amount_payment_is_inert() {
        let fund = TestFundBuilder::new().build();
        let payments = vec![TestPaymentBuilder::for_fund(&fund)
            .with_amount(Decimal::ZERO)
            .build()];
        let now = DateFixtures::mid_second_month();

        let tracking = build_tracking(&fund, &payments, now);
        assert_eq!(tracking.buckets[0].status, BucketStatus::Pending);
        assert_eq!(tracking.buckets[0].paid, Decimal::ZERO);

        let result = reconcile(&fund, &payments, now);
        assert_eq!(result.total_paid, Decimal::ZERO);
        assert_eq!(result.pending_balance, dec!(1000));
    }

    #[test]
    fn test_payment_beyond_fund_total_clamps_pending() {
        let fund = TestFundBuilder::new().build();
        let payments = vec![TestPaymentBuilder::for_fund(&fund)
            .with_amount(dec!(2500))
            .build()];
        let now = DateFixtures::mid_second_month();

        let result = reconcile(&fund, &payments, now);
        assert_eq!(result.pending_balance, Decimal::ZERO);

        let tracking = build_tracking(&fund, &payments, now);
        assert!(tracking
            .buckets
            .iter()
            .all(|b| b.status == BucketStatus::Completed));
        // 2500 across ten 100-targets leaves 1500 unconsumed
        assert_eq!(tracking.carry_forward_remaining, dec!(1500));
    }
}
