//! Pension contribution calculation functionality.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PensionRule;
use crate::models::AuditStep;

/// The result of calculating a pension contribution.
#[derive(Debug, Clone)]
pub struct PensionResult {
    /// The monthly pension contribution.
    pub pension_contribution: Decimal,
    /// Earnings the rate was applied to, after the cap.
    pub pensionable_earnings: Decimal,
    /// True when the gross salary exceeded the pensionable cap.
    pub cap_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the pension contribution for a gross monthly salary.
///
/// Pensionable earnings are the gross salary capped at the rule's ceiling;
/// the contribution is those earnings at the flat contribution rate.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_pension;
/// use payroll_engine::config::PayrollSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = PayrollSchedule::kenya_2023();
///
/// let result = calculate_pension(Decimal::from(10_000), &schedule.pension, 1);
/// assert_eq!(result.pension_contribution, Decimal::from(600));
///
/// let result = calculate_pension(Decimal::from(60_000), &schedule.pension, 1);
/// assert_eq!(result.pension_contribution, Decimal::from(1_080));
/// assert!(result.cap_applied);
/// ```
pub fn calculate_pension(
    gross_monthly_salary: Decimal,
    rule: &PensionRule,
    step_number: u32,
) -> PensionResult {
    let cap_applied = gross_monthly_salary > rule.pensionable_cap;
    let pensionable_earnings = gross_monthly_salary.min(rule.pensionable_cap);
    let pension_contribution = pensionable_earnings * rule.contribution_rate;

    debug!(
        gross_monthly_salary = %gross_monthly_salary,
        pensionable_earnings = %pensionable_earnings,
        pension_contribution = %pension_contribution,
        "Calculated pension contribution"
    );

    let reasoning = if cap_applied {
        format!(
            "${} x {} = ${} (earnings capped at ${})",
            pensionable_earnings.normalize(),
            rule.contribution_rate.normalize(),
            pension_contribution.normalize(),
            rule.pensionable_cap.normalize()
        )
    } else {
        format!(
            "${} x {} = ${}",
            pensionable_earnings.normalize(),
            rule.contribution_rate.normalize(),
            pension_contribution.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "pension".to_string(),
        rule_name: "Pension Contribution".to_string(),
        input: serde_json::json!({
            "gross_monthly_salary": gross_monthly_salary.normalize().to_string(),
            "contribution_rate": rule.contribution_rate.normalize().to_string(),
            "pensionable_cap": rule.pensionable_cap.normalize().to_string()
        }),
        output: serde_json::json!({
            "pensionable_earnings": pensionable_earnings.normalize().to_string(),
            "pension_contribution": pension_contribution.normalize().to_string(),
            "cap_applied": cap_applied
        }),
        reasoning,
    };

    PensionResult {
        pension_contribution,
        pensionable_earnings,
        cap_applied,
        audit_step,
    }
}
