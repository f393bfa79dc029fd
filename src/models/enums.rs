use serde::{Deserialize, Serialize};

/// Clinical urgency ranking of a discrepancy.
///
/// Ordering: `Critical` sorts first so `min()` over severities yields the
/// most urgent one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Informational,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Informational => "informational",
        }
    }
}

/// Kind of difference found between the two reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscrepancyType {
    Conflict,
    Missing,
    RangeVariation,
    TerminologyDifference,
}

/// Clinical flag word attached to a measurement (e.g. `Glucose: 115 mg/dL - HIGH`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpretation {
    High,
    Low,
    Elevated,
    Borderline,
    Abnormal,
    Critical,
}

impl Interpretation {
    /// Parse a flag keyword case-insensitively. Returns `None` for anything
    /// outside the six known keywords.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "high" => Some(Self::High),
            "low" => Some(Self::Low),
            "elevated" => Some(Self::Elevated),
            "borderline" => Some(Self::Borderline),
            "abnormal" => Some(Self::Abnormal),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
            Self::Elevated => "elevated",
            Self::Borderline => "borderline",
            Self::Abnormal => "abnormal",
            Self::Critical => "critical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(
            serde_json::to_string(&Severity::Informational).unwrap(),
            "\"informational\""
        );
    }

    #[test]
    fn discrepancy_type_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&DiscrepancyType::RangeVariation).unwrap(),
            "\"rangeVariation\""
        );
        assert_eq!(
            serde_json::to_string(&DiscrepancyType::TerminologyDifference).unwrap(),
            "\"terminologyDifference\""
        );
    }

    #[test]
    fn interpretation_parses_case_insensitively() {
        assert_eq!(Interpretation::parse("HIGH"), Some(Interpretation::High));
        assert_eq!(
            Interpretation::parse("Borderline"),
            Some(Interpretation::Borderline)
        );
        assert_eq!(Interpretation::parse("normal"), None);
    }

    #[test]
    fn critical_sorts_before_low() {
        assert!(Severity::Critical < Severity::Low);
    }
}
