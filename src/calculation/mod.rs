//! Calculation logic for the Payroll Engine.
//!
//! This module contains the deduction calculators (PAYE, health levy,
//! pension), the net salary composer that combines them, and the speed
//! citation classifier.
//!
//! The `calculate_*` functions take their tables explicitly and return an
//! audit step alongside each figure. The `compute_*` and [`classify_speed`]
//! functions apply the canonical built-in tables and return plain values.

mod common;
mod health_levy;
mod net_salary;
mod paye;
mod pension;
mod speed;

pub use common::round_half_up;
pub use health_levy::{calculate_health_levy, HealthLevyResult, HEALTH_LEVY_FALLBACK};
pub use net_salary::{calculate_net_salary, ENGINE_VERSION};
pub use paye::{calculate_paye, PayeResult, MONTHS_PER_YEAR};
pub use pension::{calculate_pension, PensionResult};
pub use speed::classify_speed_with_policy;

use rust_decimal::Decimal;

use crate::config::{default_schedule, default_speed_policy};
use crate::error::EngineResult;
use crate::models::{SalaryBreakdown, SpeedClassification};

/// Monthly PAYE for a gross monthly salary under the canonical tables.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_paye;
/// use rust_decimal::Decimal;
///
/// assert_eq!(compute_paye(Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn compute_paye(gross_monthly_salary: Decimal) -> Decimal {
    calculate_paye(gross_monthly_salary, default_schedule(), 1).paye_tax
}

/// Health-levy deduction for a gross monthly salary under the canonical bands.
pub fn compute_health_levy(gross_monthly_salary: Decimal) -> Decimal {
    calculate_health_levy(gross_monthly_salary, &default_schedule().health_levy_bands, 1)
        .health_levy
}

/// Pension contribution for a gross monthly salary under the canonical rule.
pub fn compute_pension(gross_monthly_salary: Decimal) -> Decimal {
    calculate_pension(gross_monthly_salary, &default_schedule().pension, 1).pension_contribution
}

/// Net salary breakdown under the canonical tables.
///
/// # Errors
///
/// Returns `InvalidInput` if `basic_salary` or `benefits` is negative, or if
/// the gross salary is too large to annualise.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_net_salary;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_net_salary(Decimal::from(50_000), Decimal::from(10_000))?;
/// assert_eq!(breakdown.health_levy, Decimal::from(1_300));
/// assert_eq!(breakdown.pension_contribution, Decimal::from(1_080));
///
/// assert!(compute_net_salary(Decimal::from(-1), Decimal::ZERO).is_err());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn compute_net_salary(
    basic_salary: Decimal,
    benefits: Decimal,
) -> EngineResult<SalaryBreakdown> {
    calculate_net_salary(basic_salary, benefits, default_schedule()).map(|result| result.breakdown)
}

/// Classifies a speed reading under the default policy (70 km/h limit,
/// one point per 5 km/h, suspension above 12 points).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::classify_speed;
/// use payroll_engine::models::SpeedClassification;
///
/// assert_eq!(classify_speed(50.0), SpeedClassification::Compliant);
/// assert_eq!(classify_speed(75.0), SpeedClassification::PenaltyPoints(1));
/// ```
pub fn classify_speed(speed: f64) -> SpeedClassification {
    classify_speed_with_policy(speed, default_speed_policy())
}
