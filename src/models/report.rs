use serde::{Deserialize, Serialize};

/// A medical report as supplied by the caller.
///
/// `content` is the single source of truth for every character offset the
/// engine emits. It is never mutated after load; all spans index into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub date: String,
    pub content: String,
    pub patient: Patient,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub test_type: String,
    pub ordered_by: String,
    pub reported_by: String,
}
