//! Shared fixtures: the two embedded sample reports.

use medcompare::models::{Patient, Report, ReportMetadata};

pub const REPORT_1_CONTENT: &str = r#"Patient: John Smith
Age: 55
Gender: Male
Test: Complete Blood Count (CBC)
Date: June 10, 2025

RESULTS:
WBC: 7.5 x 10^3/uL (4.5-11.0)
RBC: 4.8 x 10^6/uL (4.5-5.9)
Hemoglobin: 14.2 g/dL (13.5-17.5)
Hematocrit: 42% (41-50%)
MCV: 88 fL (80-100)
MCH: 29.5 pg (27-31)
MCHC: 33.8 g/dL (32-36)
Platelets: 250 x 10^3/uL (150-450)
Glucose: 115 mg/dL (70-99) - HIGH

INTERPRETATION:
Mild elevation in glucose levels suggesting pre-diabetic condition.
All other values within normal range.
Follow-up recommended in 3 months.

Dr. James Wilson
Laboratory Director"#;

pub const REPORT_2_CONTENT: &str = r#"PATIENT INFORMATION:
Name: John Smith
DOB: 01/15/1970
Sex: M
Collected: 06/12/2025 08:30 AM
Reported: 06/12/2025 10:15 AM

TEST RESULTS:
Glucose (fasting): 126 mg/dL [Reference: 65-95 mg/dL] *HIGH*
HbA1c: 6.2% [Reference: 4.0-5.6%] *HIGH*
WBC Count: 7.8 x 10^3/uL [Reference: 4.5-11.0 x 10^3/uL]
RBC Count: 4.9 x 10^6/uL [Reference: 4.5-5.9 x 10^6/uL]
Hemoglobin: 14.5 g/dL [Reference: 13.5-17.5 g/dL]
Platelets: 245 x 10^3/uL [Reference: 150-450 x 10^3/uL]

CLINICAL FINDINGS:
Patient presents with elevated glucose levels consistent with diabetes mellitus.
Recommend follow-up with primary care physician within 2 weeks.
Dietary modification and glucose monitoring advised.

Electronically signed by:
Dr. Patricia Lee, MD, FCAP
Laboratory Director
MediLab Services"#;

pub fn cbc_report() -> Report {
    Report {
        id: "report-1".into(),
        title: "Complete Blood Count".into(),
        provider: "City Hospital Lab".into(),
        date: "2025-06-10T14:30:00Z".into(),
        content: REPORT_1_CONTENT.into(),
        patient: patient(),
        metadata: ReportMetadata {
            test_type: "Complete Blood Count".into(),
            ordered_by: "Dr. Sarah Johnson".into(),
            reported_by: "Dr. James Wilson".into(),
        },
    }
}

pub fn chemistry_report() -> Report {
    Report {
        id: "report-2".into(),
        title: "Blood Chemistry Analysis".into(),
        provider: "MediLab Services".into(),
        date: "2025-06-12T10:15:00Z".into(),
        content: REPORT_2_CONTENT.into(),
        patient: patient(),
        metadata: ReportMetadata {
            test_type: "Blood Chemistry".into(),
            ordered_by: "Dr. Robert Chen".into(),
            reported_by: "Dr. Patricia Lee".into(),
        },
    }
}

fn patient() -> Patient {
    Patient {
        id: "P-12345".into(),
        name: "John Smith".into(),
        age: 55,
        gender: "Male".into(),
    }
}
