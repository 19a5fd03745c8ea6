#![allow(dead_code)]

use chrono::NaiveDate;
use pehchaan_core::{IssueForm, IssueType, Severity};
use pehchaan_notify::{NotifierRegistry, RecordingNotifier};

/// Fixed evaluation date for the sample maintenance schedule
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 10).unwrap()
}

/// Registry with one recorder; the returned clone shares its buffer
pub fn recording_registry() -> (NotifierRegistry, RecordingNotifier) {
    let recorder = RecordingNotifier::new();
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(recorder.clone()));
    (registry, recorder)
}

pub fn complete_form(component: &str) -> IssueForm {
    IssueForm {
        component_id: component.to_string(),
        issue_type: Some(IssueType::Crack),
        severity: Some(Severity::Critical),
        description: "Visible crack across the clip toe".to_string(),
    }
}
