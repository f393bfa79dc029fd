//! Summary aggregation over a discrepancy list.

use crate::models::{
    ComparisonSummary, Discrepancy, DiscrepancyType, Severity, SeverityCounts, TypeCounts,
};

/// Recompute the full summary from `discrepancies`.
///
/// Always computed from scratch — never incrementally patched — so the
/// counts can never drift from the list they describe.
pub fn summarize(discrepancies: &[Discrepancy]) -> ComparisonSummary {
    let mut by_severity = SeverityCounts::default();
    let mut by_type = TypeCounts::default();

    for d in discrepancies {
        match d.severity {
            Severity::Critical => by_severity.critical += 1,
            Severity::High => by_severity.high += 1,
            Severity::Medium => by_severity.medium += 1,
            Severity::Low => by_severity.low += 1,
            Severity::Informational => by_severity.informational += 1,
        }
        match d.kind {
            DiscrepancyType::Conflict => by_type.conflict += 1,
            DiscrepancyType::Missing => by_type.missing += 1,
            DiscrepancyType::RangeVariation => by_type.range_variation += 1,
            DiscrepancyType::TerminologyDifference => by_type.terminology_difference += 1,
        }
    }

    ComparisonSummary {
        total_discrepancies: discrepancies.len(),
        by_severity,
        by_type,
    }
}
