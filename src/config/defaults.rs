//! Canonical built-in tables.
//!
//! These are the 2023 Kenya Revenue Authority PAYE brackets and personal
//! relief, the NHIF health-levy bands, and the NSSF Tier II pension rule,
//! together with the default speed policy.

use std::sync::LazyLock;

use rust_decimal::Decimal;

use super::types::{HealthLevyBand, PayrollSchedule, PensionRule, SpeedPolicy, TaxBracket};

static DEFAULT_SCHEDULE: LazyLock<PayrollSchedule> = LazyLock::new(PayrollSchedule::kenya_2023);

static DEFAULT_SPEED_POLICY: LazyLock<SpeedPolicy> = LazyLock::new(SpeedPolicy::default);

/// Returns the process-wide canonical payroll schedule.
pub fn default_schedule() -> &'static PayrollSchedule {
    &DEFAULT_SCHEDULE
}

/// Returns the process-wide default speed policy.
pub fn default_speed_policy() -> &'static SpeedPolicy {
    &DEFAULT_SPEED_POLICY
}

// (lower, upper, monthly deduction)
const HEALTH_LEVY_BANDS: [(i64, Option<i64>, i64); 17] = [
    (0, Some(5_999), 150),
    (6_000, Some(7_999), 300),
    (8_000, Some(11_999), 400),
    (12_000, Some(14_999), 500),
    (15_000, Some(19_999), 600),
    (20_000, Some(24_999), 750),
    (25_000, Some(29_999), 850),
    (30_000, Some(34_999), 900),
    (35_000, Some(39_999), 950),
    (40_000, Some(44_999), 1_000),
    (45_000, Some(49_999), 1_100),
    (50_000, Some(59_999), 1_200),
    (60_000, Some(69_999), 1_300),
    (70_000, Some(79_999), 1_400),
    (80_000, Some(89_999), 1_500),
    (90_000, Some(99_999), 1_600),
    (100_000, None, 1_700),
];

impl PayrollSchedule {
    /// Builds the 2023 KRA / NHIF / NSSF schedule.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::config::PayrollSchedule;
    ///
    /// let schedule = PayrollSchedule::kenya_2023();
    /// assert_eq!(schedule.tax_brackets.len(), 3);
    /// assert_eq!(schedule.health_levy_bands.len(), 17);
    /// assert!(schedule.validate().is_ok());
    /// ```
    pub fn kenya_2023() -> Self {
        let tax_brackets = vec![
            TaxBracket {
                lower_bound: Decimal::ZERO,
                upper_bound: Some(Decimal::from(24_000)),
                rate: Decimal::new(10, 2),
            },
            TaxBracket {
                lower_bound: Decimal::from(24_001),
                upper_bound: Some(Decimal::from(32_333)),
                rate: Decimal::new(25, 2),
            },
            TaxBracket {
                lower_bound: Decimal::from(32_334),
                upper_bound: None,
                rate: Decimal::new(30, 2),
            },
        ];

        let health_levy_bands = HEALTH_LEVY_BANDS
            .iter()
            .map(|&(lower, upper, deduction)| HealthLevyBand {
                lower_bound: Decimal::from(lower),
                upper_bound: upper.map(Decimal::from),
                deduction: Decimal::from(deduction),
            })
            .collect();

        Self {
            name: "kra_2023".to_string(),
            tax_brackets,
            personal_relief: Decimal::from(2_400),
            health_levy_bands,
            pension: PensionRule {
                contribution_rate: Decimal::new(6, 2),
                pensionable_cap: Decimal::from(18_000),
            },
        }
    }
}
