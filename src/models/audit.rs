//! Audit trace models for the Payroll Engine.
//!
//! Every deduction calculator records the inputs, outputs and reasoning
//! behind its figure as an [`AuditStep`], so a payslip can be explained
//! line by line.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "pension".to_string(),
///     rule_name: "Pension Contribution".to_string(),
///     input: serde_json::json!({ "gross_salary": "10000" }),
///     output: serde_json::json!({ "pension_contribution": "600" }),
///     reasoning: "$10000 x 0.06 = $600".to_string(),
/// };
/// assert_eq!(step.rule_id, "pension");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_trace_serializes_steps_and_warnings() {
        let trace = AuditTrace {
            steps: vec![AuditStep {
                step_number: 1,
                rule_id: "health_levy".to_string(),
                rule_name: "Health Levy".to_string(),
                input: serde_json::json!({ "gross_salary": "60000" }),
                output: serde_json::json!({ "health_levy": "1300" }),
                reasoning: "band [60000, 69999]".to_string(),
            }],
            warnings: vec![AuditWarning {
                code: "HEALTH_LEVY_FALLBACK".to_string(),
                message: "no band matched".to_string(),
                severity: "medium".to_string(),
            }],
            duration_us: 12,
        };

        let json = serde_json::to_value(&trace).unwrap();

        assert_eq!(json["steps"][0]["rule_id"], "health_levy");
        assert_eq!(json["warnings"][0]["code"], "HEALTH_LEVY_FALLBACK");
        assert_eq!(json["duration_us"], 12);
    }
}
