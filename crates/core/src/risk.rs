//! Risk matrix scoring.
//!
//! Classic 5x5 matrix: probability and consequence are each rated 1-5, the
//! risk score is their product, and the score is bucketed into a level for
//! display and filtering.

use serde::Serialize;

use crate::error::CoreError;

/// Lowest allowed rating on either axis.
pub const RATING_MIN: i16 = 1;
/// Highest allowed rating on either axis.
pub const RATING_MAX: i16 = 5;

/// Bucketed risk level derived from the matrix score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Bucket a matrix score (1-25).
    pub fn from_score(score: i16) -> Self {
        match score {
            s if s >= 15 => Self::Critical,
            s if s >= 10 => Self::High,
            s if s >= 5 => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Compute the matrix score, validating both ratings are in 1-5.
pub fn risk_score(probability: i16, consequence: i16) -> Result<i16, CoreError> {
    for (name, value) in [("probability", probability), ("consequence", consequence)] {
        if !(RATING_MIN..=RATING_MAX).contains(&value) {
            return Err(CoreError::validation(format!(
                "{name} must be between {RATING_MIN} and {RATING_MAX}, got {value}"
            )));
        }
    }
    Ok(probability * consequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_product_of_axes() {
        assert_eq!(risk_score(3, 4).unwrap(), 12);
        assert_eq!(risk_score(1, 1).unwrap(), 1);
        assert_eq!(risk_score(5, 5).unwrap(), 25);
    }

    #[test]
    fn out_of_range_ratings_are_rejected() {
        assert!(risk_score(0, 3).is_err());
        assert!(risk_score(3, 6).is_err());
        assert!(risk_score(-1, 2).is_err());
    }

    #[test]
    fn level_bucket_boundaries() {
        assert_eq!(RiskLevel::from_score(4), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(5), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(9), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(10), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(14), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(15), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(25), RiskLevel::Critical);
    }
}
