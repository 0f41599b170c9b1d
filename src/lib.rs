//! Payroll Engine
//!
//! This crate derives statutory payroll deductions (progressive PAYE income
//! tax, a banded health levy and a capped pension contribution) and net pay
//! from a gross monthly salary, and classifies speed readings into citation
//! tiers. Every calculation is a pure function over read-only tables.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
