//! Speed citation classification.

use crate::config::SpeedPolicy;
use crate::models::SpeedClassification;

/// Classifies a speed reading against a speed policy.
///
/// Readings strictly below the limit are compliant. Otherwise one demerit
/// point accrues per full `km_per_point` over the limit (rounded down), and
/// the licence is suspended only when the raw point count strictly exceeds
/// the suspension threshold. Points are not clamped before that comparison.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::classify_speed_with_policy;
/// use payroll_engine::config::SpeedPolicy;
/// use payroll_engine::models::SpeedClassification;
///
/// let policy = SpeedPolicy::default();
///
/// assert_eq!(classify_speed_with_policy(70.0, &policy), SpeedClassification::PenaltyPoints(0));
/// assert_eq!(classify_speed_with_policy(130.0, &policy), SpeedClassification::PenaltyPoints(12));
/// assert_eq!(classify_speed_with_policy(136.0, &policy), SpeedClassification::LicenseSuspended);
/// ```
pub fn classify_speed_with_policy(speed: f64, policy: &SpeedPolicy) -> SpeedClassification {
    if speed < policy.speed_limit {
        return SpeedClassification::Compliant;
    }

    let points = ((speed - policy.speed_limit) / policy.km_per_point).floor();
    if points > f64::from(policy.suspension_threshold) {
        SpeedClassification::LicenseSuspended
    } else {
        // bounded by the threshold, so the cast cannot truncate
        SpeedClassification::PenaltyPoints(points as u32)
    }
}
