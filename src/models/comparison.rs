use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::discrepancy::Discrepancy;
use super::report::Report;

/// Discrepancy counts per severity. All five buckets are always present in
/// the serialized form, defaulting to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub informational: usize,
}

/// Discrepancy counts per type. All four buckets are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCounts {
    pub conflict: usize,
    pub missing: usize,
    pub range_variation: usize,
    pub terminology_difference: usize,
}

/// Derived view over a discrepancy list.
///
/// Always recomputed in full from the list it summarizes — never patched
/// incrementally — so it cannot drift from its source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub total_discrepancies: usize,
    pub by_severity: SeverityCounts,
    pub by_type: TypeCounts,
}

/// The finished output of one comparison invocation.
///
/// Created fresh per invocation with a new id; nothing is mutated after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub report1: Report,
    pub report2: Report,
    pub discrepancies: Vec<Discrepancy>,
    pub summary: ComparisonSummary,
}
