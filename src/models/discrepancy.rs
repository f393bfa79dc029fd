use serde::{Deserialize, Serialize};

use super::enums::{DiscrepancyType, Severity};

/// Half-open character interval `[start, end)` into a report's `content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Where a discrepancy sits in each report.
///
/// A `None` side means "unlocatable": the excerpt was not found or the
/// claimed offsets failed verification. The presentation layer omits the
/// highlight for that side — a guessed span must never appear here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscrepancyLocation {
    pub report1_location: Option<TextSpan>,
    pub report2_location: Option<TextSpan>,
}

/// One difference found between the two reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discrepancy {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DiscrepancyType,
    pub description: String,
    pub severity: Severity,
    pub location: DiscrepancyLocation,
    pub context: String,
    pub suggestion: String,
}
