//! Net salary composition.
//!
//! This module combines PAYE, the health levy and the pension contribution
//! into a single [`SalaryBreakdown`], wrapped in an audited
//! [`PayrollCalculation`].

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use super::health_levy::calculate_health_levy;
use super::paye::{calculate_paye, MONTHS_PER_YEAR};
use super::pension::calculate_pension;
use crate::config::PayrollSchedule;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditTrace, PayrollCalculation, SalaryBreakdown};

/// The version string recorded on every calculation.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Calculates the net salary breakdown for one employee.
///
/// Gross salary is `basic_salary + benefits`. PAYE, the health levy and the
/// pension contribution are each derived from the gross, summed into total
/// deductions, and subtracted to give net salary. Nothing is computed when
/// either input is rejected.
///
/// # Arguments
///
/// * `basic_salary` - Monthly basic salary
/// * `benefits` - Monthly taxable benefits
/// * `schedule` - The tables to apply
///
/// # Errors
///
/// Returns `InvalidInput` if `basic_salary` or `benefits` is negative, or if
/// the gross salary or its annualised income exceeds the range of `Decimal`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_net_salary;
/// use payroll_engine::config::default_schedule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_net_salary(
///     Decimal::from(50_000),
///     Decimal::from(10_000),
///     default_schedule(),
/// )?;
///
/// assert_eq!(result.breakdown.gross_salary, Decimal::from(60_000));
/// assert_eq!(result.breakdown.net_salary, Decimal::from_str("42454.74").unwrap());
/// assert_eq!(result.audit_trace.steps.len(), 4);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn calculate_net_salary(
    basic_salary: Decimal,
    benefits: Decimal,
    schedule: &PayrollSchedule,
) -> EngineResult<PayrollCalculation> {
    validate_component("basic_salary", basic_salary)?;
    validate_component("benefits", benefits)?;

    let start_time = Instant::now();
    let calculation_id = Uuid::new_v4();
    let gross_salary = gross_within_range(basic_salary, benefits)?;

    let paye = calculate_paye(gross_salary, schedule, 1);
    let health_levy = calculate_health_levy(gross_salary, &schedule.health_levy_bands, 2);
    let pension = calculate_pension(gross_salary, &schedule.pension, 3);

    let total_deductions = paye.paye_tax + health_levy.health_levy + pension.pension_contribution;
    let net_salary = gross_salary - total_deductions;

    let breakdown = SalaryBreakdown {
        gross_salary,
        paye_tax: paye.paye_tax,
        health_levy: health_levy.health_levy,
        pension_contribution: pension.pension_contribution,
        total_deductions,
        net_salary,
    };

    let net_step = AuditStep {
        step_number: 4,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "benefits": benefits.normalize().to_string(),
            "gross_salary": gross_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_deductions": total_deductions.normalize().to_string(),
            "net_salary": net_salary.normalize().to_string()
        }),
        reasoning: format!(
            "${} - (${} + ${} + ${}) = ${}",
            gross_salary.normalize(),
            paye.paye_tax.normalize(),
            health_levy.health_levy.normalize(),
            pension.pension_contribution.normalize(),
            net_salary.normalize()
        ),
    };

    let warnings = health_levy.warning.into_iter().collect();
    let steps = vec![
        paye.audit_step,
        health_levy.audit_step,
        pension.audit_step,
        net_step,
    ];

    let duration = start_time.elapsed();
    info!(
        calculation_id = %calculation_id,
        schedule = %schedule.name,
        gross_salary = %gross_salary,
        total_deductions = %total_deductions,
        net_salary = %net_salary,
        duration_us = duration.as_micros(),
        "Net salary calculation completed"
    );

    Ok(PayrollCalculation {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        schedule_name: schedule.name.clone(),
        breakdown,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: duration.as_micros() as u64,
        },
    })
}

fn validate_component(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        warn!(field, amount = %amount, "Rejected negative salary component");
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not be negative (got {})", amount),
        });
    }
    Ok(())
}

/// Sums the components, rejecting a gross whose annualised income would
/// overflow during the PAYE bracket walk.
fn gross_within_range(basic_salary: Decimal, benefits: Decimal) -> EngineResult<Decimal> {
    basic_salary
        .checked_add(benefits)
        .filter(|gross| gross.checked_mul(Decimal::from(MONTHS_PER_YEAR)).is_some())
        .ok_or_else(|| {
            warn!(
                basic_salary = %basic_salary,
                benefits = %benefits,
                "Rejected out-of-range gross salary"
            );
            EngineError::InvalidInput {
                field: "gross_salary".to_string(),
                message: "gross salary out of range".to_string(),
            }
        })
}
