//! Speed citation outcome.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The penalty tier for a single speed reading.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SpeedClassification;
///
/// assert_eq!(SpeedClassification::Compliant.to_string(), "OK");
/// assert_eq!(SpeedClassification::PenaltyPoints(3).to_string(), "Points: 3");
/// assert_eq!(SpeedClassification::LicenseSuspended.to_string(), "License suspended");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "points", rename_all = "snake_case")]
pub enum SpeedClassification {
    /// The reading is below the speed limit.
    Compliant,
    /// The reading earns demerit points. Readings from the limit up to one
    /// full increment over it earn zero points.
    PenaltyPoints(u32),
    /// The reading earns more points than the suspension threshold.
    LicenseSuspended,
}

impl fmt::Display for SpeedClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeedClassification::Compliant => write!(f, "OK"),
            SpeedClassification::PenaltyPoints(points) => write!(f, "Points: {}", points),
            SpeedClassification::LicenseSuspended => write!(f, "License suspended"),
        }
    }
}
