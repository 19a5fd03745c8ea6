mod common;

use pehchaan_core::{IssueError, IssueForm, IssueLog, IssueStatus};

#[test]
fn test_flagging_sequence_is_newest_first() {
    let (mut notifier, recorder) = common::recording_registry();
    let mut log = IssueLog::new();

    for component in ["RC-2024-001", "RC-2024-002", "RC-2024-003"] {
        let mut form = common::complete_form(component);
        log.flag(&mut form, &mut notifier).unwrap();
        assert_eq!(form, IssueForm::default());
    }

    let order: Vec<&str> = log.issues().iter().map(|i| i.component_id.as_str()).collect();
    assert_eq!(order, vec!["RC-2024-003", "RC-2024-002", "RC-2024-001"]);
    assert!(log.issues().iter().all(|i| i.status == IssueStatus::Flagged));
    assert!(log.issues().iter().all(|i| i.id.starts_with("ISS-")));

    let mut ids: Vec<&str> = log.issues().iter().map(|i| i.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    assert_eq!(recorder.toasts().len(), 3);
}

#[test]
fn test_whitespace_description_is_rejected() {
    let (mut notifier, recorder) = common::recording_registry();
    let mut log = IssueLog::new();

    let mut form = common::complete_form("RC-2024-004");
    form.description = "   ".to_string();
    let before = form.clone();

    let err = log.flag(&mut form, &mut notifier).unwrap_err();
    assert_eq!(err, IssueError::MissingInformation(vec!["description"]));
    assert!(log.is_empty());
    assert_eq!(form, before);

    let toasts = recorder.toasts();
    assert_eq!(toasts.len(), 1);
    assert!(toasts[0].is_destructive());
}
