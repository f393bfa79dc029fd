//! Rule-based comparator: the deterministic counterpart to the model pass.
//!
//! Pairs extracted measurements across the two reports by normalized name,
//! emits a `conflict` when paired numbers differ, and compares follow-up
//! recommendations on a common day scale. Every emitted location comes from
//! an extraction span, so it is valid by construction.

use uuid::Uuid;

use crate::models::{
    Discrepancy, DiscrepancyLocation, DiscrepancyType, Interpretation, Severity,
};

use super::extraction::{extract_follow_up, extract_medical_values, MedicalValue};
use super::units::to_days;

/// Tuning knobs for the rule-based pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompareOptions {
    /// Emit `missing`-type discrepancies for values present by name in
    /// exactly one report. Off by default: panels legitimately differ, so
    /// one-sided presence is only reported when the caller opts in.
    pub report_missing: bool,
}

/// Compare two report bodies and return rule-derived discrepancies.
///
/// Output order: value conflicts in report-1 extraction order, then at most
/// one follow-up conflict, then (when enabled) missing-value entries.
/// Deterministic up to the generated ids.
pub fn compare_reports(
    content1: &str,
    content2: &str,
    options: &CompareOptions,
) -> Vec<Discrepancy> {
    let values1 = extract_medical_values(content1);
    let values2 = extract_medical_values(content2);

    let mut discrepancies = Vec::new();

    for v1 in &values1 {
        let Some(v2) = values2.iter().find(|v| v.name == v1.name) else {
            continue;
        };
        // Unit mismatch means the numbers are not comparable — skip, not an error.
        if v1.unit != v2.unit {
            continue;
        }
        // Exact equality is intended: both sides parse from the same decimal
        // notation, so equal readings compare bit-equal.
        if v1.value == v2.value {
            continue;
        }
        discrepancies.push(value_conflict(v1, v2));
    }

    if let Some(follow_up) = follow_up_conflict(content1, content2) {
        discrepancies.push(follow_up);
    }

    if options.report_missing {
        discrepancies.extend(missing_values(&values1, &values2));
    }

    discrepancies
}

fn value_conflict(v1: &MedicalValue, v2: &MedicalValue) -> Discrepancy {
    let percent_diff = (v1.value - v2.value).abs() / ((v1.value + v2.value) / 2.0) * 100.0;

    let severity = if v1.interpretation == Some(Interpretation::Critical)
        || v2.interpretation == Some(Interpretation::Critical)
    {
        Severity::Critical
    } else if v1.interpretation != v2.interpretation || percent_diff > 20.0 {
        Severity::High
    } else if percent_diff > 10.0 {
        Severity::Medium
    } else {
        Severity::Low
    };

    let flags: Vec<&str> = [v1.interpretation, v2.interpretation]
        .iter()
        .flatten()
        .map(|i| i.as_str())
        .collect();
    let context = if flags.is_empty() {
        format!("Different values reported for {}", v1.name)
    } else {
        format!(
            "Different values reported for {} ({})",
            v1.name,
            flags.join(" vs ")
        )
    };

    Discrepancy {
        id: Uuid::new_v4().to_string(),
        kind: DiscrepancyType::Conflict,
        description: format!(
            "{}: {} {} vs {} {}",
            capitalize(&v1.name),
            v1.value,
            v1.unit,
            v2.value,
            v2.unit
        ),
        severity,
        location: DiscrepancyLocation {
            report1_location: Some(v1.span),
            report2_location: Some(v2.span),
        },
        context,
        suggestion: "Review with healthcare provider for clinical significance".into(),
    }
}

/// Compare follow-up recommendations on a common day scale.
///
/// Emits at most one conflict, and only when both reports carry a
/// recommendation and the normalized day counts differ.
fn follow_up_conflict(content1: &str, content2: &str) -> Option<Discrepancy> {
    let f1 = extract_follow_up(content1)?;
    let f2 = extract_follow_up(content2)?;

    let days1 = to_days(f1.amount, f1.unit);
    let days2 = to_days(f2.amount, f2.unit);
    if days1 == days2 {
        return None;
    }

    let gap = days1.abs_diff(days2);
    let severity = if gap > 60 {
        Severity::High
    } else if gap > 30 {
        Severity::Medium
    } else {
        Severity::Low
    };

    Some(Discrepancy {
        id: Uuid::new_v4().to_string(),
        kind: DiscrepancyType::Conflict,
        description: format!("Different follow-up times: {} vs {}", f1.text, f2.text),
        severity,
        location: DiscrepancyLocation {
            report1_location: Some(f1.span),
            report2_location: Some(f2.span),
        },
        context: "Reports recommend different follow-up timeframes which may impact patient care"
            .into(),
        suggestion: "Confirm appropriate follow-up schedule with healthcare provider".into(),
    })
}

/// Values present by name in exactly one report.
fn missing_values(values1: &[MedicalValue], values2: &[MedicalValue]) -> Vec<Discrepancy> {
    let only_in = |present: &[MedicalValue], other: &[MedicalValue]| -> Vec<MedicalValue> {
        present
            .iter()
            .filter(|v| !other.iter().any(|o| o.name == v.name))
            .cloned()
            .collect()
    };

    let mut missing = Vec::new();
    for v in only_in(values1, values2) {
        missing.push(missing_value(&v, true));
    }
    for v in only_in(values2, values1) {
        missing.push(missing_value(&v, false));
    }
    missing
}

fn missing_value(value: &MedicalValue, in_first: bool) -> Discrepancy {
    let (which, location) = if in_first {
        (
            "first",
            DiscrepancyLocation {
                report1_location: Some(value.span),
                report2_location: None,
            },
        )
    } else {
        (
            "second",
            DiscrepancyLocation {
                report1_location: None,
                report2_location: Some(value.span),
            },
        )
    };

    Discrepancy {
        id: Uuid::new_v4().to_string(),
        kind: DiscrepancyType::Missing,
        description: format!("{}: present in {} report only", capitalize(&value.name), which),
        severity: Severity::Informational,
        location,
        context: format!(
            "No measurement named {} found in the other report; test panels may differ",
            value.name
        ),
        suggestion: "Verify whether the measurement was omitted or reported under a different name"
            .into(),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
