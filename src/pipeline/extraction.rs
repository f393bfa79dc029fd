//! Regex-driven extraction of structured entities from raw report text.
//!
//! Two scanners, both pure functions of the input text:
//! - `extract_medical_values` — labelled measurements with a reference range
//!   and an optional interpretation flag.
//! - `extract_follow_up` — the first follow-up/reassessment recommendation.
//!
//! Every extracted entity records the exact span it was matched from, so the
//! caller can highlight it in the source text without re-searching.

use regex::Regex;

use crate::models::{Interpretation, TextSpan};

use super::units::FollowUpUnit;

/// A measurement line such as `Glucose: 115 mg/dL (70-99) - HIGH` or
/// `Hemoglobin: 14.5 g/dL [Reference: 13.5-17.5 g/dL]`.
///
/// `name` is lower-cased and trimmed so values pair across reports with
/// different label casing. `span` covers the exact matched text, including
/// any leading whitespace the label run absorbed.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicalValue {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub interpretation: Option<Interpretation>,
    pub span: TextSpan,
}

/// A follow-up recommendation such as `Follow-up recommended in 3 months`.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowUp {
    pub amount: u32,
    pub unit: FollowUpUnit,
    /// The literal matched phrase, kept for discrepancy descriptions.
    pub text: String,
    pub span: TextSpan,
}

/// Measurement pattern: `<label>: <number> <unit> (<ref-range>) [- <FLAG>]`.
///
/// The label is a run of letters/whitespace ending at a colon; the reference
/// range may be parenthesized or bracketed and is consumed without capture;
/// the trailing flag is introduced by `-` or `*` markers.
const VALUE_PATTERN: &str = r"(?i)([A-Za-z\s]+):\s*(\d+(?:\.\d+)?)\s*([a-zA-Z/%^]+/?\w*)\s*(?:\(|\[)[^)\]]*(?:\)|\])?\s*(?:[-*]+\s*(HIGH|LOW|ELEVATED|BORDERLINE|ABNORMAL|CRITICAL))?\b";

/// Follow-up phrasings, tried in priority order; the first match wins.
const FOLLOW_UP_PATTERNS: &[&str] = &[
    r"(?i)(?:follow(?:-|\s)?up|reassessment|review)\s+(?:recommended\s+)?in\s+(\d+)\s+(day|days|week|weeks|month|months|year|years)",
    r"(?i)(?:follow(?:-|\s)?up|reassessment|review)\s+(?:in|within)\s+(\d+)\s+(day|days|week|weeks|month|months|year|years)",
    r"(?i)(?:recommend\s+)?(?:follow(?:-|\s)?up|reassessment|review)\s+(?:in|within)\s+(\d+)\s+(day|days|week|weeks|month|months|year|years)",
];

/// Scan `content` for measurement lines, in order of appearance.
///
/// Matches never overlap: the scan advances past each match. Lines whose
/// unit token starts with a digit (e.g. `7.5 x 10^3/uL`) do not fit the
/// pattern and are skipped, which matches the pairing rule downstream —
/// only identically-united values are ever compared.
pub fn extract_medical_values(content: &str) -> Vec<MedicalValue> {
    let pattern = Regex::new(VALUE_PATTERN).unwrap();

    let mut values = Vec::new();
    for caps in pattern.captures_iter(content) {
        let Some(full) = caps.get(0) else { continue };
        let Ok(value) = caps[2].parse::<f64>() else {
            continue;
        };
        values.push(MedicalValue {
            name: caps[1].trim().to_lowercase(),
            value,
            unit: caps[3].to_string(),
            interpretation: caps.get(4).and_then(|m| Interpretation::parse(m.as_str())),
            span: TextSpan::new(full.start(), full.end()),
        });
    }
    values
}

/// Find the first follow-up recommendation in `content`, or `None`.
///
/// At most one recommendation is extracted per report: patterns are tried in
/// order and the first successful match is returned immediately.
pub fn extract_follow_up(content: &str) -> Option<FollowUp> {
    for pattern in FOLLOW_UP_PATTERNS {
        let re = Regex::new(pattern).unwrap();
        let Some(caps) = re.captures(content) else {
            continue;
        };
        let Some(full) = caps.get(0) else { continue };
        // A capture that does not parse disqualifies this pattern only; the
        // remaining phrasings still get their turn.
        let Ok(amount) = caps[1].parse::<u32>() else {
            continue;
        };
        let Some(unit) = FollowUpUnit::parse(&caps[2]) else {
            continue;
        };
        return Some(FollowUp {
            amount,
            unit,
            text: full.as_str().to_string(),
            span: TextSpan::new(full.start(), full.end()),
        });
    }
    None
}
