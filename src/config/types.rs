//! Configuration types for payroll deductions and speed citations.
//!
//! This module contains the strongly-typed table structures that the
//! calculators read. They are deserialized from YAML configuration files
//! or built in code from the canonical tables.
//!
//! Bounds are whole currency units and inclusive: a bounded entry
//! `[lower_bound, upper_bound]` covers every amount from `lower_bound` up to,
//! but excluding, `upper_bound + 1`. An `upper_bound` of `None` is unbounded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A table entry covering a contiguous range of currency amounts.
pub trait Bounded {
    /// The inclusive lower bound of the range.
    fn lower_bound(&self) -> Decimal;

    /// The inclusive upper bound of the range, or `None` when unbounded.
    fn upper_bound(&self) -> Option<Decimal>;

    /// Returns true if `amount` falls inside this entry's range.
    fn contains(&self, amount: Decimal) -> bool {
        amount >= self.lower_bound()
            && self
                .upper_bound()
                .is_none_or(|upper| amount < upper + Decimal::ONE)
    }
}

/// A single progressive income tax bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// The lowest annual income taxed in this bracket.
    pub lower_bound: Decimal,
    /// The highest annual income taxed in this bracket (`None` for the top bracket).
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// The marginal rate as a fraction (e.g., 0.25 for 25%).
    pub rate: Decimal,
}

impl Bounded for TaxBracket {
    fn lower_bound(&self) -> Decimal {
        self.lower_bound
    }

    fn upper_bound(&self) -> Option<Decimal> {
        self.upper_bound
    }
}

/// A health-levy band mapping a range of gross monthly salary to a fixed deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthLevyBand {
    /// The lowest gross monthly salary in this band.
    pub lower_bound: Decimal,
    /// The highest gross monthly salary in this band (`None` for the top band).
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// The fixed monthly deduction for salaries in this band.
    pub deduction: Decimal,
}

impl Bounded for HealthLevyBand {
    fn lower_bound(&self) -> Decimal {
        self.lower_bound
    }

    fn upper_bound(&self) -> Option<Decimal> {
        self.upper_bound
    }
}

/// The pension contribution rule: a flat rate over capped earnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionRule {
    /// The employee contribution rate as a fraction.
    pub contribution_rate: Decimal,
    /// The maximum monthly earnings subject to contribution.
    pub pensionable_cap: Decimal,
}

/// Metadata describing where a schedule comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    /// A short identifier for the schedule (e.g., "kra_2023").
    pub name: String,
    /// The jurisdiction the tables apply to.
    pub jurisdiction: String,
    /// The year the tables took effect.
    pub effective_year: i32,
    /// URL to the published rates.
    pub source_url: String,
}

/// The full set of tables used by the payroll calculators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSchedule {
    /// Identifier reported in calculation results.
    pub name: String,
    /// Progressive tax brackets over annual income, ascending.
    pub tax_brackets: Vec<TaxBracket>,
    /// Monthly personal relief subtracted from computed tax.
    pub personal_relief: Decimal,
    /// Health-levy bands over gross monthly salary, ascending.
    pub health_levy_bands: Vec<HealthLevyBand>,
    /// Pension contribution rule.
    pub pension: PensionRule,
}

impl PayrollSchedule {
    /// Checks every table invariant the calculators rely on.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchedule` naming the offending table when:
    /// - a table is empty
    /// - the first entry does not start at zero
    /// - an entry does not start exactly one unit after the previous entry ends
    /// - any entry other than the last is unbounded, or the last is bounded
    /// - a rate lies outside [0, 1] or an amount is negative
    pub fn validate(&self) -> EngineResult<()> {
        validate_contiguous("tax_brackets", &self.tax_brackets)?;
        validate_contiguous("health_levy_bands", &self.health_levy_bands)?;

        for (index, bracket) in self.tax_brackets.iter().enumerate() {
            if !is_fraction(bracket.rate) {
                return Err(EngineError::invalid_schedule(
                    "tax_brackets",
                    format!("bracket {} has rate {} outside [0, 1]", index, bracket.rate),
                ));
            }
        }

        if self.personal_relief.is_sign_negative() {
            return Err(EngineError::invalid_schedule(
                "personal_relief",
                format!("relief {} is negative", self.personal_relief),
            ));
        }

        for (index, band) in self.health_levy_bands.iter().enumerate() {
            if band.deduction.is_sign_negative() {
                return Err(EngineError::invalid_schedule(
                    "health_levy_bands",
                    format!("band {} has negative deduction {}", index, band.deduction),
                ));
            }
        }

        if !is_fraction(self.pension.contribution_rate) {
            return Err(EngineError::invalid_schedule(
                "pension",
                format!(
                    "contribution rate {} outside [0, 1]",
                    self.pension.contribution_rate
                ),
            ));
        }
        if self.pension.pensionable_cap.is_sign_negative() {
            return Err(EngineError::invalid_schedule(
                "pension",
                format!("pensionable cap {} is negative", self.pension.pensionable_cap),
            ));
        }

        Ok(())
    }
}

/// Thresholds for classifying a speed reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedPolicy {
    /// Speeds strictly below this limit (km/h) are compliant.
    pub speed_limit: f64,
    /// Each full increment (km/h) at or over the limit earns one point.
    pub km_per_point: f64,
    /// Licences are suspended when points strictly exceed this value.
    pub suspension_threshold: u32,
}

impl Default for SpeedPolicy {
    fn default() -> Self {
        Self {
            speed_limit: 70.0,
            km_per_point: 5.0,
            suspension_threshold: 12,
        }
    }
}

impl SpeedPolicy {
    /// Checks that the limit is finite and the increment is finite and positive.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.speed_limit.is_finite() {
            return Err(EngineError::invalid_schedule(
                "speed_policy",
                format!("speed limit {} is not finite", self.speed_limit),
            ));
        }
        if !self.km_per_point.is_finite() || self.km_per_point <= 0.0 {
            return Err(EngineError::invalid_schedule(
                "speed_policy",
                format!("km per point {} must be finite and positive", self.km_per_point),
            ));
        }
        Ok(())
    }
}

fn is_fraction(rate: Decimal) -> bool {
    rate >= Decimal::ZERO && rate <= Decimal::ONE
}

fn validate_contiguous<B: Bounded>(table: &str, entries: &[B]) -> EngineResult<()> {
    let Some(first) = entries.first() else {
        return Err(EngineError::invalid_schedule(table, "table is empty"));
    };

    if !first.lower_bound().is_zero() {
        return Err(EngineError::invalid_schedule(
            table,
            format!("first entry starts at {} instead of 0", first.lower_bound()),
        ));
    }

    let last_index = entries.len() - 1;
    for (index, pair) in entries.windows(2).enumerate() {
        let (current, next) = (&pair[0], &pair[1]);
        let Some(upper) = current.upper_bound() else {
            return Err(EngineError::invalid_schedule(
                table,
                format!("entry {} is unbounded but is not the last entry", index),
            ));
        };
        if upper < current.lower_bound() {
            return Err(EngineError::invalid_schedule(
                table,
                format!("entry {} ends at {} before it starts", index, upper),
            ));
        }
        if next.lower_bound() != upper + Decimal::ONE {
            return Err(EngineError::invalid_schedule(
                table,
                format!(
                    "entry {} starts at {} but entry {} ends at {}",
                    index + 1,
                    next.lower_bound(),
                    index,
                    upper
                ),
            ));
        }
    }

    if entries[last_index].upper_bound().is_some() {
        return Err(EngineError::invalid_schedule(
            table,
            "last entry must be unbounded",
        ));
    }

    Ok(())
}
