//! Safety Data Sheet (SDS) attachment matching heuristic.
//!
//! Scores how likely an inbound email attachment is the SDS for a chemical
//! in a tenant's inventory, using case-insensitive substring checks on the
//! filename, sender, and subject. Scores are additive and uncapped. The
//! result is advisory: high-confidence matches may be auto-applied, but the
//! heuristic makes no correctness guarantee.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Scoring weights and thresholds
// ---------------------------------------------------------------------------

/// Filename contains the chemical's product name.
pub const WEIGHT_FILENAME_PRODUCT: f64 = 0.6;
/// Filename contains the chemical's CAS number (hyphens stripped).
pub const WEIGHT_FILENAME_CAS: f64 = 0.8;
/// Sender address contains the supplier name.
pub const WEIGHT_SENDER_SUPPLIER: f64 = 0.5;
/// Subject line contains the supplier name.
pub const WEIGHT_SUBJECT_SUPPLIER: f64 = 0.3;

/// Above this, the match is applied without human review.
pub const AUTO_APPLY_THRESHOLD: f64 = 0.8;
/// Above this (and at or below auto-apply), the match is surfaced as a
/// suggestion. At or below, it is discarded.
pub const SUGGEST_THRESHOLD: f64 = 0.5;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The fields of a chemical record the heuristic matches against.
#[derive(Debug, Clone, Copy)]
pub struct MatchTarget<'a> {
    pub product_name: &'a str,
    pub cas_number: Option<&'a str>,
    pub supplier: Option<&'a str>,
}

/// What to do with a scored match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchDisposition {
    /// Confidence > 0.8: downstream code updates the chemical record.
    AutoApply,
    /// 0.5 < confidence <= 0.8: surfaced for human confirmation.
    Suggest,
    /// Confidence <= 0.5: discarded.
    NoMatch,
}

impl MatchDisposition {
    /// Classify an additive confidence score.
    pub fn classify(score: f64) -> Self {
        if score > AUTO_APPLY_THRESHOLD {
            Self::AutoApply
        } else if score > SUGGEST_THRESHOLD {
            Self::Suggest
        } else {
            Self::NoMatch
        }
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score one attachment against one chemical record.
///
/// All comparisons are case-insensitive substring checks. CAS numbers are
/// compared with hyphens stripped from both sides, so `7732-18-5` matches a
/// filename containing `7732185`. Empty target fields contribute nothing.
pub fn match_score(filename: &str, sender: &str, subject: &str, target: &MatchTarget) -> f64 {
    let filename_lower = filename.to_lowercase();
    let sender_lower = sender.to_lowercase();
    let subject_lower = subject.to_lowercase();

    let mut score = 0.0;

    let product = target.product_name.trim().to_lowercase();
    if !product.is_empty() && filename_lower.contains(&product) {
        score += WEIGHT_FILENAME_PRODUCT;
    }

    if let Some(cas) = target.cas_number {
        let cas_stripped = cas.replace('-', "").to_lowercase();
        let filename_stripped = filename_lower.replace('-', "");
        if !cas_stripped.is_empty() && filename_stripped.contains(&cas_stripped) {
            score += WEIGHT_FILENAME_CAS;
        }
    }

    if let Some(supplier) = target.supplier {
        let supplier_lower = supplier.trim().to_lowercase();
        if !supplier_lower.is_empty() {
            if sender_lower.contains(&supplier_lower) {
                score += WEIGHT_SENDER_SUPPLIER;
            }
            if subject_lower.contains(&supplier_lower) {
                score += WEIGHT_SUBJECT_SUPPLIER;
            }
        }
    }

    score
}

// ---------------------------------------------------------------------------
// CAS validation
// ---------------------------------------------------------------------------

/// Whether a string is shaped like a CAS registry number (e.g. `7732-18-5`).
///
/// Format check only; the CAS check digit is not verified.
pub fn is_cas_number(s: &str) -> bool {
    static CAS_RE: OnceLock<Regex> = OnceLock::new();
    let re = CAS_RE.get_or_init(|| Regex::new(r"^\d{2,7}-\d{2}-\d$").expect("valid CAS regex"));
    re.is_match(s)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn acetone() -> MatchTarget<'static> {
        MatchTarget {
            product_name: "Acetone",
            cas_number: Some("67-64-1"),
            supplier: Some("ChemSupply"),
        }
    }

    #[test]
    fn product_name_and_cas_in_filename_is_auto_apply() {
        let score = match_score(
            "Acetone_SDS_67641.pdf",
            "orders@example.com",
            "Documents",
            &acetone(),
        );
        assert!(score >= 1.4, "expected >= 1.4, got {score}");
        assert_eq!(MatchDisposition::classify(score), MatchDisposition::AutoApply);
    }

    #[test]
    fn unrelated_email_scores_zero() {
        let score = match_score(
            "invoice_march.pdf",
            "billing@unrelated.com",
            "Your invoice",
            &acetone(),
        );
        assert_eq!(score, 0.0);
        assert_eq!(MatchDisposition::classify(score), MatchDisposition::NoMatch);
    }

    #[test]
    fn cas_matches_with_hyphens_in_filename() {
        let score = match_score(
            "sds-67-64-1-rev3.pdf",
            "noreply@example.com",
            "",
            &acetone(),
        );
        assert_eq!(score, WEIGHT_FILENAME_CAS);
    }

    #[test]
    fn supplier_in_sender_and_subject_both_count() {
        let score = match_score(
            "datasheet.pdf",
            "sds@chemsupply.com",
            "ChemSupply documentation",
            &acetone(),
        );
        assert_eq!(score, WEIGHT_SENDER_SUPPLIER + WEIGHT_SUBJECT_SUPPLIER);
        assert_eq!(MatchDisposition::classify(score), MatchDisposition::Suggest);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let score = match_score("ACETONE.PDF", "", "", &acetone());
        assert_eq!(score, WEIGHT_FILENAME_PRODUCT);
    }

    #[test]
    fn missing_target_fields_contribute_nothing() {
        let target = MatchTarget {
            product_name: "Acetone",
            cas_number: None,
            supplier: None,
        };
        let score = match_score("acetone.pdf", "sds@chemsupply.com", "ChemSupply", &target);
        assert_eq!(score, WEIGHT_FILENAME_PRODUCT);
    }

    #[test]
    fn classification_boundaries_are_exclusive() {
        // Exactly 0.8 is a suggestion, not auto-apply.
        assert_eq!(MatchDisposition::classify(0.8), MatchDisposition::Suggest);
        // Exactly 0.5 is discarded.
        assert_eq!(MatchDisposition::classify(0.5), MatchDisposition::NoMatch);
        assert_eq!(MatchDisposition::classify(0.81), MatchDisposition::AutoApply);
    }

    #[test]
    fn cas_number_format_check() {
        assert!(is_cas_number("7732-18-5"));
        assert!(is_cas_number("67-64-1"));
        assert!(!is_cas_number("7732185"));
        assert!(!is_cas_number("77-321-85"));
        assert!(!is_cas_number("abc-12-3"));
    }
}
