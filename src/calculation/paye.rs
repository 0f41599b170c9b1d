//! PAYE (progressive income tax) calculation functionality.
//!
//! This module annualises a gross monthly salary, taxes it across the
//! progressive bracket table, converts the result back to a monthly figure
//! and applies personal relief.

use rust_decimal::Decimal;
use tracing::debug;

use super::common::round_half_up;
use crate::config::PayrollSchedule;
use crate::models::AuditStep;

/// Number of pay periods in a tax year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// The result of a PAYE calculation, including the tax and audit step.
#[derive(Debug, Clone)]
pub struct PayeResult {
    /// Monthly PAYE after personal relief, rounded to cents and never negative.
    pub paye_tax: Decimal,
    /// Annual tax before relief, unrounded.
    pub annual_tax: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates monthly PAYE for a gross monthly salary.
///
/// The monthly gross is annualised and the bracket table is walked from the
/// highest bracket down. Each bracket whose lower bound is below the income
/// still to be taxed takes the slice above its lower bound at its rate, and
/// the pool shrinks to that lower bound. The unbounded top bracket never
/// evaluates its upper bound. The annual total is divided back to a monthly
/// figure, personal relief is subtracted, the result is floored at zero and
/// rounded to cents.
///
/// # Arguments
///
/// * `gross_monthly_salary` - Gross monthly salary (basic plus benefits)
/// * `schedule` - The tax brackets and personal relief to apply
/// * `step_number` - The step number for audit trail sequencing
///
/// # Panics
///
/// Panics if the annualised income overflows `Decimal`. [`calculate_net_salary`]
/// rejects such salaries before calling this.
///
/// [`calculate_net_salary`]: crate::calculation::calculate_net_salary
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_paye;
/// use payroll_engine::config::PayrollSchedule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = PayrollSchedule::kenya_2023();
/// let result = calculate_paye(Decimal::from(60_000), &schedule, 1);
///
/// assert_eq!(result.annual_tax, Decimal::from_str("210783.15").unwrap());
/// assert_eq!(result.paye_tax, Decimal::from_str("15165.26").unwrap());
/// ```
pub fn calculate_paye(
    gross_monthly_salary: Decimal,
    schedule: &PayrollSchedule,
    step_number: u32,
) -> PayeResult {
    let months = Decimal::from(MONTHS_PER_YEAR);
    let annual_income = gross_monthly_salary * months;

    let mut remaining = annual_income;
    let mut annual_tax = Decimal::ZERO;
    let mut slices = Vec::new();

    for bracket in schedule.tax_brackets.iter().rev() {
        if remaining <= bracket.lower_bound {
            continue;
        }

        let taxable = remaining - bracket.lower_bound;
        let tax = taxable * bracket.rate;
        annual_tax += tax;
        remaining = bracket.lower_bound;

        slices.push(serde_json::json!({
            "lower_bound": bracket.lower_bound.normalize().to_string(),
            "upper_bound": bracket.upper_bound.map(|upper| upper.normalize().to_string()),
            "rate": bracket.rate.normalize().to_string(),
            "taxable": taxable.normalize().to_string(),
            "tax": tax.normalize().to_string()
        }));
    }

    let monthly_tax = annual_tax / months;
    let after_relief = (monthly_tax - schedule.personal_relief).max(Decimal::ZERO);
    let paye_tax = round_half_up(after_relief);

    debug!(
        gross_monthly_salary = %gross_monthly_salary,
        annual_income = %annual_income,
        annual_tax = %annual_tax,
        paye_tax = %paye_tax,
        "Calculated PAYE"
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "paye".to_string(),
        rule_name: "PAYE Income Tax".to_string(),
        input: serde_json::json!({
            "gross_monthly_salary": gross_monthly_salary.normalize().to_string(),
            "annual_income": annual_income.normalize().to_string(),
            "personal_relief": schedule.personal_relief.normalize().to_string()
        }),
        output: serde_json::json!({
            "brackets": slices,
            "annual_tax": annual_tax.normalize().to_string(),
            "monthly_tax": monthly_tax.normalize().to_string(),
            "paye_tax": paye_tax.normalize().to_string()
        }),
        reasoning: format!(
            "${} annual income taxed ${} across {} bracket(s); ${} monthly less ${} relief = ${}",
            annual_income.normalize(),
            annual_tax.normalize(),
            slices.len(),
            monthly_tax.normalize(),
            schedule.personal_relief.normalize(),
            paye_tax.normalize()
        ),
    };

    PayeResult {
        paye_tax,
        annual_tax,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HealthLevyBand, PensionRule, TaxBracket};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn schedule() -> PayrollSchedule {
        PayrollSchedule::kenya_2023()
    }

    /// Monthly tax before relief, for checking bracket arithmetic directly.
    fn schedule_without_relief() -> PayrollSchedule {
        PayrollSchedule {
            personal_relief: Decimal::ZERO,
            ..PayrollSchedule::kenya_2023()
        }
    }

    #[test]
    fn test_zero_salary_pays_no_tax() {
        let result = calculate_paye(dec("0"), &schedule(), 1);

        assert_eq!(result.paye_tax, dec("0"));
        assert_eq!(result.annual_tax, dec("0"));
        assert_eq!(result.audit_step.output["brackets"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_income_within_first_bracket_taxed_at_first_rate() {
        // 1000 x 12 = 12000, all in [0, 24000] at 10%
        let result = calculate_paye(dec("1000"), &schedule_without_relief(), 1);

        assert_eq!(result.annual_tax, dec("1200"));
        assert_eq!(result.paye_tax, dec("100"));
    }

    #[test]
    fn test_income_at_top_of_first_bracket() {
        // 2000 x 12 = 24000
        let result = calculate_paye(dec("2000"), &schedule_without_relief(), 1);

        assert_eq!(result.annual_tax, dec("2400"));
    }

    #[test]
    fn test_income_spanning_two_brackets() {
        // 2500 x 12 = 30000: 24001 at 10% + 5999 at 25%
        let result = calculate_paye(dec("2500"), &schedule_without_relief(), 1);

        assert_eq!(result.annual_tax, dec("3899.85"));
        assert_eq!(result.paye_tax, dec("324.99"));
    }

    #[test]
    fn test_income_spanning_all_brackets() {
        // 10000 x 12 = 120000: 24001 at 10% + 8333 at 25% + 87666 at 30%
        let result = calculate_paye(dec("10000"), &schedule(), 1);

        assert_eq!(result.annual_tax, dec("30783.15"));
        // 2565.2625 - 2400 = 165.2625
        assert_eq!(result.paye_tax, dec("165.26"));
        assert_eq!(result.audit_step.output["brackets"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_canonical_sixty_thousand_scenario() {
        // 720000 annual: 687666 at 30% + 8333 at 25% + 24001 at 10%
        let result = calculate_paye(dec("60000"), &schedule(), 1);

        assert_eq!(result.annual_tax, dec("210783.15"));
        assert_eq!(result.audit_step.output["monthly_tax"], "17565.2625");
        assert_eq!(result.paye_tax, dec("15165.26"));
    }

    #[test]
    fn test_relief_clamps_tax_at_zero() {
        // 9000 x 12 = 108000 -> 27183.15 annual -> 2265.2625 monthly < 2400 relief
        let result = calculate_paye(dec("9000"), &schedule(), 1);

        assert_eq!(result.annual_tax, dec("27183.15"));
        assert_eq!(result.paye_tax, dec("0"));
    }

    #[test]
    fn test_fractional_salary_is_taxed() {
        let result = calculate_paye(dec("2000.50"), &schedule_without_relief(), 1);

        // 24006 annual: 24001 at 10% + 5 at 25%
        assert_eq!(result.annual_tax, dec("2401.35"));
    }

    #[test]
    fn test_walk_records_highest_bracket_first() {
        let result = calculate_paye(dec("60000"), &schedule(), 1);
        let brackets = result.audit_step.output["brackets"].as_array().unwrap();

        assert_eq!(brackets[0]["lower_bound"], "32334");
        assert!(brackets[0]["upper_bound"].is_null());
        assert_eq!(brackets[0]["taxable"], "687666");
        assert_eq!(brackets[1]["taxable"], "8333");
        assert_eq!(brackets[2]["taxable"], "24001");
    }

    #[test]
    fn test_single_unbounded_bracket() {
        let flat = PayrollSchedule {
            name: "flat".to_string(),
            tax_brackets: vec![TaxBracket {
                lower_bound: dec("0"),
                upper_bound: None,
                rate: dec("0.20"),
            }],
            personal_relief: dec("0"),
            health_levy_bands: vec![HealthLevyBand {
                lower_bound: dec("0"),
                upper_bound: None,
                deduction: dec("0"),
            }],
            pension: PensionRule {
                contribution_rate: dec("0"),
                pensionable_cap: dec("0"),
            },
        };

        let result = calculate_paye(dec("1000"), &flat, 1);

        assert_eq!(result.annual_tax, dec("2400"));
        assert_eq!(result.paye_tax, dec("200"));
    }

    #[test]
    fn test_audit_step_records_inputs_and_step_number() {
        let result = calculate_paye(dec("60000"), &schedule(), 4);

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "paye");
        assert_eq!(result.audit_step.input["annual_income"], "720000");
        assert_eq!(result.audit_step.input["personal_relief"], "2400");
        assert!(result.audit_step.reasoning.contains("$15165.26"));
    }

    proptest! {
        #[test]
        fn prop_paye_is_non_negative(cents in 0i64..100_000_000) {
            let gross = Decimal::new(cents, 2);
            let result = calculate_paye(gross, &schedule(), 1);

            prop_assert!(result.paye_tax >= Decimal::ZERO);
        }

        #[test]
        fn prop_paye_is_monotonic(a in 0i64..100_000_000, b in 0i64..100_000_000) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let low_tax = calculate_paye(Decimal::new(low, 2), &schedule(), 1).paye_tax;
            let high_tax = calculate_paye(Decimal::new(high, 2), &schedule(), 1).paye_tax;

            prop_assert!(low_tax <= high_tax);
        }

        #[test]
        fn prop_annual_tax_matches_sum_of_bracket_portions(cents in 0i64..100_000_000) {
            let gross = Decimal::new(cents, 2);
            let annual = gross * Decimal::from(MONTHS_PER_YEAR);
            let schedule = schedule();

            let expected: Decimal = schedule
                .tax_brackets
                .iter()
                .map(|bracket| {
                    let top = match bracket.upper_bound {
                        Some(upper) => annual.min(upper + Decimal::ONE),
                        None => annual,
                    };
                    (top - bracket.lower_bound).max(Decimal::ZERO) * bracket.rate
                })
                .sum();

            prop_assert_eq!(calculate_paye(gross, &schedule, 1).annual_tax, expected);
        }
    }
}
