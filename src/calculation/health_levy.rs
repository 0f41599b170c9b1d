//! Health-levy deduction lookup.
//!
//! The levy is a fixed amount per salary band. Lookup is by containment,
//! not accumulation: exactly one band's deduction applies.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::{Bounded, HealthLevyBand};
use crate::models::{AuditStep, AuditWarning};

/// Warning code recorded when no band contains the salary.
pub const HEALTH_LEVY_FALLBACK: &str = "HEALTH_LEVY_FALLBACK";

/// The result of a health-levy lookup, including the deduction and audit step.
#[derive(Debug, Clone)]
pub struct HealthLevyResult {
    /// The monthly health-levy deduction.
    pub health_levy: Decimal,
    /// Index of the band that contained the salary, if any.
    pub band_index: Option<usize>,
    /// Set when the lookup fell back because no band matched.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Looks up the health-levy deduction for a gross monthly salary.
///
/// The bands are scanned in order and the deduction of the first band
/// containing the salary is returned. When no band contains it, the last
/// band's deduction is used and a warning is recorded. A validated table
/// ends in an unbounded band, so the fallback only fires for tables built
/// without [`PayrollSchedule::validate`](crate::config::PayrollSchedule::validate).
/// An empty table yields zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_health_levy;
/// use payroll_engine::config::PayrollSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = PayrollSchedule::kenya_2023();
/// let result = calculate_health_levy(Decimal::from(60_000), &schedule.health_levy_bands, 1);
///
/// assert_eq!(result.health_levy, Decimal::from(1_300));
/// assert!(result.warning.is_none());
/// ```
pub fn calculate_health_levy(
    gross_monthly_salary: Decimal,
    bands: &[HealthLevyBand],
    step_number: u32,
) -> HealthLevyResult {
    let matched = bands
        .iter()
        .enumerate()
        .find(|(_, band)| band.contains(gross_monthly_salary));

    if let Some((index, band)) = matched {
        debug!(
            gross_monthly_salary = %gross_monthly_salary,
            band_index = index,
            health_levy = %band.deduction,
            "Calculated health levy"
        );

        let audit_step = AuditStep {
            step_number,
            rule_id: "health_levy".to_string(),
            rule_name: "Health Levy".to_string(),
            input: serde_json::json!({
                "gross_monthly_salary": gross_monthly_salary.normalize().to_string()
            }),
            output: serde_json::json!({
                "band_index": index,
                "band": describe_band(band),
                "health_levy": band.deduction.normalize().to_string()
            }),
            reasoning: format!(
                "${} falls in band {} = ${}",
                gross_monthly_salary.normalize(),
                describe_band(band),
                band.deduction.normalize()
            ),
        };

        return HealthLevyResult {
            health_levy: band.deduction,
            band_index: Some(index),
            warning: None,
            audit_step,
        };
    }

    let health_levy = bands
        .last()
        .map(|band| band.deduction)
        .unwrap_or(Decimal::ZERO);

    warn!(
        gross_monthly_salary = %gross_monthly_salary,
        bands = bands.len(),
        health_levy = %health_levy,
        "No health-levy band contains salary, falling back to last band"
    );

    let warning = AuditWarning {
        code: HEALTH_LEVY_FALLBACK.to_string(),
        message: format!(
            "No health-levy band contains ${}; the band table is not exhaustive",
            gross_monthly_salary.normalize()
        ),
        severity: "medium".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "health_levy".to_string(),
        rule_name: "Health Levy".to_string(),
        input: serde_json::json!({
            "gross_monthly_salary": gross_monthly_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "band_index": null,
            "fallback": true,
            "health_levy": health_levy.normalize().to_string()
        }),
        reasoning: format!(
            "No band contains ${}; using last band deduction ${}",
            gross_monthly_salary.normalize(),
            health_levy.normalize()
        ),
    };

    HealthLevyResult {
        health_levy,
        band_index: None,
        warning: Some(warning),
        audit_step,
    }
}

fn describe_band(band: &HealthLevyBand) -> String {
    match band.upper_bound {
        Some(upper) => format!("[{}, {}]", band.lower_bound.normalize(), upper.normalize()),
        None => format!("[{}, unbounded)", band.lower_bound.normalize()),
    }
}
