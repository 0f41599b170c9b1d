//! Net salary result models for the Payroll Engine.
//!
//! This module contains the [`SalaryBreakdown`] value returned by the net
//! salary composer and the [`PayrollCalculation`] record that wraps it with
//! an identifier, timestamp and audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuditTrace;

/// Every figure derived from one gross salary.
///
/// The fields are always produced together; `net_salary + total_deductions`
/// equals `gross_salary` exactly.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = SalaryBreakdown {
///     gross_salary: Decimal::from(5_000),
///     paye_tax: Decimal::ZERO,
///     health_levy: Decimal::from(150),
///     pension_contribution: Decimal::from(300),
///     total_deductions: Decimal::from(450),
///     net_salary: Decimal::from(4_550),
/// };
/// assert_eq!(breakdown.net_salary + breakdown.total_deductions, breakdown.gross_salary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Basic salary plus benefits.
    pub gross_salary: Decimal,
    /// Monthly PAYE after personal relief.
    pub paye_tax: Decimal,
    /// Monthly health-levy deduction.
    pub health_levy: Decimal,
    /// Monthly pension contribution.
    pub pension_contribution: Decimal,
    /// Sum of PAYE, health levy and pension.
    pub total_deductions: Decimal,
    /// Gross salary less total deductions.
    pub net_salary: Decimal,
}

/// The complete, audited result of a net salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The name of the schedule whose tables were applied.
    pub schedule_name: String,
    /// The derived salary figures.
    pub breakdown: SalaryBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
