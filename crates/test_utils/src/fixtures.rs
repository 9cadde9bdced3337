//! Pre-built Test Fixtures
//!
//! Ready-to-use dates, months, and amounts, consistent and predictable
//! across the test suite. The canonical test fund is 1000 over 10 months
//! starting January 2026, giving a round 100 monthly target.

use chrono::NaiveDate;
use core_kernel::MonthKey;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for date test data
pub struct DateFixtures;

impl DateFixtures {
    /// The canonical fund start date
    pub fn fund_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    /// A "now" two months into the canonical fund
    pub fn mid_second_month() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()
    }

    /// A "now" long after the canonical fund has ended
    pub fn far_future() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 1).unwrap()
    }

    /// A payment date inside the first month
    pub fn first_month_payment() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }
}

/// Fixture for month-key test data
pub struct MonthFixtures;

impl MonthFixtures {
    /// The canonical fund's first month
    pub fn january() -> MonthKey {
        "2026-01".parse().unwrap()
    }

    /// The canonical fund's second month
    pub fn february() -> MonthKey {
        "2026-02".parse().unwrap()
    }

    /// A month far outside the canonical fund's window
    pub fn out_of_window() -> MonthKey {
        "2030-01".parse().unwrap()
    }
}

/// Fixture for monetary test data
pub struct AmountFixtures;

impl AmountFixtures {
    /// The canonical fund total
    pub fn fund_total() -> Decimal {
        dec!(1000)
    }

    /// The canonical monthly target (fund_total over 10 months)
    pub fn monthly_target() -> Decimal {
        dec!(100)
    }

    /// One exact monthly installment
    pub fn exact_installment() -> Decimal {
        dec!(100)
    }

    /// An installment overpaid by half a target
    pub fn overpaid_installment() -> Decimal {
        dec!(150)
    }
}
