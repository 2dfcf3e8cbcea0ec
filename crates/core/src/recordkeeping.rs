//! OSHA injury/illness recordkeeping rates (TRIR, DART, LTIR).
//!
//! The formulas are fixed by 29 CFR 1904: each rate is the case count
//! normalized to 200,000 hours worked (100 full-time employees working a
//! full year). They are not tunable.

use serde::Serialize;

use crate::error::CoreError;

/// OSHA normalization base: 100 employees x 40 h/week x 50 weeks.
pub const RATE_BASE_HOURS: f64 = 200_000.0;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Incident counts and exposure hours for one calendar year.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearCounts {
    /// OSHA-recordable cases (column G-J totals on the 300 log).
    pub total_recordable_cases: i64,
    /// Cases with days away, restricted duty, or job transfer.
    pub days_away_restricted_transfer_cases: i64,
    /// Cases with at least one full day away from work.
    pub lost_time_cases: i64,
    /// Total hours worked by all employees during the year.
    pub total_hours_worked: f64,
    /// Annual average number of employees (reported on the 300A summary).
    pub average_employees: i64,
}

// ---------------------------------------------------------------------------
// Rates
// ---------------------------------------------------------------------------

/// Computed incidence rates for one year.
///
/// Every rate is `None` when `total_hours_worked` is zero: the rate is
/// undefined, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecordkeepingRates {
    /// Total Recordable Incident Rate.
    pub trir: Option<f64>,
    /// Days Away, Restricted or Transferred rate.
    pub dart: Option<f64>,
    /// Lost Time Incident Rate.
    pub ltir: Option<f64>,
}

impl RecordkeepingRates {
    /// Compute all three rates from a year's counts.
    ///
    /// Returns a validation error when any count or the hours figure is
    /// negative. Zero hours yields `None` for every rate.
    pub fn compute(counts: &YearCounts) -> Result<Self, CoreError> {
        if counts.total_recordable_cases < 0
            || counts.days_away_restricted_transfer_cases < 0
            || counts.lost_time_cases < 0
            || counts.average_employees < 0
        {
            return Err(CoreError::validation("Case counts must be non-negative"));
        }
        if counts.total_hours_worked < 0.0 {
            return Err(CoreError::validation("Hours worked must be non-negative"));
        }

        Ok(Self {
            trir: incidence_rate(counts.total_recordable_cases, counts.total_hours_worked),
            dart: incidence_rate(
                counts.days_away_restricted_transfer_cases,
                counts.total_hours_worked,
            ),
            ltir: incidence_rate(counts.lost_time_cases, counts.total_hours_worked),
        })
    }
}

/// Normalize a case count to the 200,000-hour OSHA base.
///
/// Returns `None` when `hours_worked` is not positive (divide-by-zero guard).
pub fn incidence_rate(cases: i64, hours_worked: f64) -> Option<f64> {
    if hours_worked <= 0.0 {
        return None;
    }
    Some(cases as f64 * RATE_BASE_HOURS / hours_worked)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hours_yields_no_rates() {
        let counts = YearCounts {
            total_recordable_cases: 3,
            total_hours_worked: 0.0,
            ..Default::default()
        };
        let rates = RecordkeepingRates::compute(&counts).expect("valid input");
        assert_eq!(rates.trir, None);
        assert_eq!(rates.dart, None);
        assert_eq!(rates.ltir, None);
    }

    #[test]
    fn two_recordables_over_base_hours_is_exactly_two() {
        let counts = YearCounts {
            total_recordable_cases: 2,
            total_hours_worked: 200_000.0,
            ..Default::default()
        };
        let rates = RecordkeepingRates::compute(&counts).expect("valid input");
        assert_eq!(rates.trir, Some(2.0));
    }

    #[test]
    fn rates_are_never_negative_for_non_negative_input() {
        let counts = YearCounts {
            total_recordable_cases: 5,
            days_away_restricted_transfer_cases: 2,
            lost_time_cases: 1,
            total_hours_worked: 412_337.5,
            average_employees: 210,
        };
        let rates = RecordkeepingRates::compute(&counts).expect("valid input");
        assert!(rates.trir.unwrap() >= 0.0);
        assert!(rates.dart.unwrap() >= 0.0);
        assert!(rates.ltir.unwrap() >= 0.0);
    }

    #[test]
    fn dart_uses_dart_cases_not_recordables() {
        let counts = YearCounts {
            total_recordable_cases: 10,
            days_away_restricted_transfer_cases: 4,
            total_hours_worked: 400_000.0,
            ..Default::default()
        };
        let rates = RecordkeepingRates::compute(&counts).expect("valid input");
        assert_eq!(rates.trir, Some(5.0));
        assert_eq!(rates.dart, Some(2.0));
    }

    #[test]
    fn negative_cases_are_rejected() {
        let counts = YearCounts {
            total_recordable_cases: -1,
            total_hours_worked: 100_000.0,
            ..Default::default()
        };
        let err = RecordkeepingRates::compute(&counts).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn negative_hours_are_rejected() {
        let counts = YearCounts {
            total_hours_worked: -1.0,
            ..Default::default()
        };
        assert!(RecordkeepingRates::compute(&counts).is_err());
    }
}
