//! Comparison orchestrator: model pass plus rule-based pass, one result.
//!
//! The model call is the only non-deterministic, fallible-by-nature step;
//! everything around it is pure. With no model configured the engine runs
//! the rule-based comparator alone, which is the deterministic fallback.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{ComparisonResult, Discrepancy, Report};

use super::aggregate::summarize;
use super::compare::{compare_reports, CompareOptions};
use super::parser::parse_model_discrepancies;
use super::prompt::{build_comparison_prompt, COMPARISON_SYSTEM_PROMPT};
use super::CompareError;

/// A chat model that can answer a system + user prompt pair.
///
/// `OpenAiClient` is the production implementation; tests substitute stubs.
pub trait ChatModel: Send + Sync {
    fn complete(&self, system: &str, user: &str) -> Result<String, CompareError>;
}

/// The engine behind every comparison invocation.
pub struct ComparisonEngine {
    model: Option<Box<dyn ChatModel>>,
    options: CompareOptions,
}

impl ComparisonEngine {
    pub fn new(model: Option<Box<dyn ChatModel>>, options: CompareOptions) -> Self {
        Self { model, options }
    }

    /// Engine without a model: rule-based comparison only.
    pub fn rule_based(options: CompareOptions) -> Self {
        Self::new(None, options)
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Compare two reports and build a fresh result.
    ///
    /// Model-produced discrepancies (offsets verified) come first, followed
    /// by the rule-based ones. The summary is recomputed from the merged
    /// list. A malformed model payload fails the whole invocation; an
    /// engine without a model never touches the network.
    pub fn compare(
        &self,
        report1: &Report,
        report2: &Report,
    ) -> Result<ComparisonResult, CompareError> {
        let mut discrepancies: Vec<Discrepancy> = Vec::new();

        if let Some(model) = &self.model {
            let user = build_comparison_prompt(&report1.content, &report2.content);
            let response = model.complete(COMPARISON_SYSTEM_PROMPT, &user)?;
            let from_model =
                parse_model_discrepancies(&response, &report1.content, &report2.content)?;
            tracing::debug!(count = from_model.len(), "Model discrepancies verified");
            discrepancies.extend(from_model);
        }

        let from_rules = compare_reports(&report1.content, &report2.content, &self.options);
        tracing::debug!(count = from_rules.len(), "Rule-based discrepancies found");
        discrepancies.extend(from_rules);

        let summary = summarize(&discrepancies);
        tracing::info!(
            report1 = %report1.id,
            report2 = %report2.id,
            total = summary.total_discrepancies,
            "Comparison finished"
        );

        Ok(ComparisonResult {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            report1: report1.clone(),
            report2: report2.clone(),
            discrepancies,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DiscrepancyType, Patient, ReportMetadata};

    fn report(id: &str, content: &str) -> Report {
        Report {
            id: id.into(),
            title: "Test Report".into(),
            provider: "Test Lab".into(),
            date: "2025-06-10T14:30:00Z".into(),
            content: content.into(),
            patient: Patient {
                id: "P-1".into(),
                name: "Jane Doe".into(),
                age: 45,
                gender: "Female".into(),
            },
            metadata: ReportMetadata {
                test_type: "Blood Test".into(),
                ordered_by: "Dr. Smith".into(),
                reported_by: "Test Lab".into(),
            },
        }
    }

    struct StubModel(&'static str);

    impl ChatModel for StubModel {
        fn complete(&self, _system: &str, _user: &str) -> Result<String, CompareError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingModel;

    impl ChatModel for FailingModel {
        fn complete(&self, _system: &str, _user: &str) -> Result<String, CompareError> {
            Err(CompareError::Connection("http://localhost:9".into()))
        }
    }

    #[test]
    fn rule_only_engine_produces_consistent_summary() {
        let engine = ComparisonEngine::rule_based(CompareOptions::default());
        let r1 = report("report-1", "Glucose: 100 mg/dL (70-99)\nFollow-up in 3 months.");
        let r2 = report("report-2", "Glucose: 130 mg/dL (70-99)\nFollow-up in 2 weeks.");

        let result = engine.compare(&r1, &r2).unwrap();
        assert_eq!(result.discrepancies.len(), 2);
        assert_eq!(result.summary, summarize(&result.discrepancies));
        assert_eq!(result.summary.by_type.conflict, 2);
    }

    #[test]
    fn model_discrepancies_come_before_rule_ones() {
        let stub = StubModel(
            r#"{"discrepancies": [{
                "id": "model-1",
                "type": "missing",
                "description": "HbA1c absent from first report",
                "severity": "medium",
                "report2Text": "Glucose: 130 mg/dL"
            }]}"#,
        );
        let engine =
            ComparisonEngine::new(Some(Box::new(stub)), CompareOptions::default());
        let r1 = report("report-1", "Glucose: 100 mg/dL (70-99)");
        let r2 = report("report-2", "Glucose: 130 mg/dL (70-99)");

        let result = engine.compare(&r1, &r2).unwrap();
        assert_eq!(result.discrepancies.len(), 2);
        assert_eq!(result.discrepancies[0].id, "model-1");
        assert_eq!(result.discrepancies[0].kind, DiscrepancyType::Missing);
        assert_eq!(result.discrepancies[1].kind, DiscrepancyType::Conflict);

        // Excerpt got verified against report-2's actual content.
        let span = result.discrepancies[0].location.report2_location.unwrap();
        assert_eq!(&r2.content[span.start..span.end], "Glucose: 130 mg/dL");

        assert_eq!(result.summary.total_discrepancies, 2);
        assert_eq!(result.summary.by_severity.medium, 1);
        assert_eq!(result.summary.by_severity.high, 1);
    }

    #[test]
    fn malformed_model_payload_fails_the_invocation() {
        let engine = ComparisonEngine::new(
            Some(Box::new(StubModel("certainly! here are the differences..."))),
            CompareOptions::default(),
        );
        let r1 = report("report-1", "Glucose: 100 mg/dL (70-99)");
        let r2 = report("report-2", "Glucose: 130 mg/dL (70-99)");
        let err = engine.compare(&r1, &r2).unwrap_err();
        assert!(matches!(err, CompareError::MalformedResponse(_)));
    }

    #[test]
    fn model_failure_propagates() {
        let engine =
            ComparisonEngine::new(Some(Box::new(FailingModel)), CompareOptions::default());
        let r1 = report("report-1", "");
        let r2 = report("report-2", "");
        assert!(matches!(
            engine.compare(&r1, &r2),
            Err(CompareError::Connection(_))
        ));
    }

    #[test]
    fn each_invocation_gets_a_fresh_id() {
        let engine = ComparisonEngine::rule_based(CompareOptions::default());
        let r1 = report("report-1", "Glucose: 100 mg/dL (70-99)");
        let r2 = report("report-2", "Glucose: 100 mg/dL (70-99)");
        let a = engine.compare(&r1, &r2).unwrap();
        let b = engine.compare(&r1, &r2).unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.discrepancies.is_empty());
        assert!(b.discrepancies.is_empty());
    }
}
