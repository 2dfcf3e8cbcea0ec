//! Environmental aspect significance scoring (ISO 14001).
//!
//! An aspect's significance score is severity x frequency on 1-5 scales. An
//! aspect is significant when the score reaches the threshold, or
//! unconditionally when a regulatory requirement applies to it.

use serde::Serialize;

use crate::error::CoreError;
use crate::risk::{RATING_MAX, RATING_MIN};

/// Score at or above which an aspect is significant.
pub const SIGNIFICANCE_THRESHOLD: i16 = 12;

/// Computed significance for an environmental aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Significance {
    pub score: i16,
    pub is_significant: bool,
}

/// Score an aspect, validating both ratings are in 1-5.
pub fn significance(
    severity: i16,
    frequency: i16,
    regulatory_requirement: bool,
) -> Result<Significance, CoreError> {
    for (name, value) in [("severity", severity), ("frequency", frequency)] {
        if !(RATING_MIN..=RATING_MAX).contains(&value) {
            return Err(CoreError::validation(format!(
                "{name} must be between {RATING_MIN} and {RATING_MAX}, got {value}"
            )));
        }
    }
    let score = severity * frequency;
    Ok(Significance {
        score,
        is_significant: regulatory_requirement || score >= SIGNIFICANCE_THRESHOLD,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_marks_significant() {
        let s = significance(4, 3, false).unwrap();
        assert_eq!(s.score, 12);
        assert!(s.is_significant);

        let s = significance(4, 2, false).unwrap();
        assert_eq!(s.score, 8);
        assert!(!s.is_significant);
    }

    #[test]
    fn regulatory_requirement_forces_significance() {
        let s = significance(1, 1, true).unwrap();
        assert_eq!(s.score, 1);
        assert!(s.is_significant);
    }

    #[test]
    fn out_of_range_ratings_are_rejected() {
        assert!(significance(0, 3, false).is_err());
        assert!(significance(3, 9, false).is_err());
    }
}
