//! Core data models for the Payroll Engine.
//!
//! This module contains the value types produced by the calculators.

mod audit;
mod salary_breakdown;
mod speed_classification;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use salary_breakdown::{PayrollCalculation, SalaryBreakdown};
pub use speed_classification::SpeedClassification;
