//! Parsing and verification of the model's comparison response.
//!
//! The model returns `{ "discrepancies": [...] }` where each entry carries
//! claimed locations and/or literal excerpts. Nothing location-shaped is
//! trusted as-is: every entry passes through `locate::resolve_location`
//! against the exact report contents before it becomes a `Discrepancy`.

use serde::Deserialize;

use crate::models::{Discrepancy, DiscrepancyLocation, DiscrepancyType, Severity};

use super::locate::resolve_location;
use super::CompareError;

#[derive(Deserialize)]
struct RawAnalysis {
    discrepancies: Vec<RawDiscrepancy>,
}

/// One discrepancy as the model reported it, offsets unverified.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDiscrepancy {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DiscrepancyType,
    pub description: String,
    pub severity: Severity,
    #[serde(default)]
    pub location: Option<RawLocation>,
    #[serde(default)]
    pub report1_text: Option<String>,
    #[serde(default)]
    pub report2_text: Option<String>,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub suggestion: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocation {
    #[serde(default)]
    pub report1_location: Option<RawSpan>,
    #[serde(default)]
    pub report2_location: Option<RawSpan>,
}

/// Claimed offsets arrive signed: the model is free to emit nonsense and
/// negative numbers must fail verification, not wrap.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawSpan {
    pub start: i64,
    pub end: i64,
}

/// Parse the model response and verify every claimed location.
///
/// A payload that is not valid JSON or lacks the `discrepancies` array is a
/// hard failure of the comparison invocation — no partial recovery. Within
/// a well-formed payload, unverifiable locations degrade to `None`.
pub fn parse_model_discrepancies(
    response: &str,
    content1: &str,
    content2: &str,
) -> Result<Vec<Discrepancy>, CompareError> {
    let raw: RawAnalysis = serde_json::from_str(response)
        .map_err(|e| CompareError::MalformedResponse(e.to_string()))?;

    Ok(raw
        .discrepancies
        .into_iter()
        .map(|d| verify_discrepancy(d, content1, content2))
        .collect())
}

fn verify_discrepancy(raw: RawDiscrepancy, content1: &str, content2: &str) -> Discrepancy {
    let claimed = raw.location.unwrap_or_default();
    let location = DiscrepancyLocation {
        report1_location: resolve_location(
            content1,
            raw.report1_text.as_deref(),
            claimed.report1_location.map(|s| (s.start, s.end)),
        ),
        report2_location: resolve_location(
            content2,
            raw.report2_text.as_deref(),
            claimed.report2_location.map(|s| (s.start, s.end)),
        ),
    };

    Discrepancy {
        id: raw.id,
        kind: raw.kind,
        description: raw.description,
        severity: raw.severity,
        location,
        context: raw.context,
        suggestion: raw.suggestion,
    }
}
