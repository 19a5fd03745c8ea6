use pehchaan_notify::{ConsoleNotifier, Notifier, NotifierRegistry, RecordingNotifier, Toast};

#[test]
fn test_quiet_console_is_dropped_but_recording_still_receives() {
    let recorder = RecordingNotifier::new();

    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(ConsoleNotifier::quiet()));
    registry.register(Box::new(recorder.clone()));

    assert_eq!(registry.len(), 1);

    registry.notify(&Toast::new("Complaint Logged", "assigned to our team"));
    registry.notify(&Toast::destructive("Error", "request failed"));

    let toasts = recorder.toasts();
    assert_eq!(toasts.len(), 2);
    assert!(!toasts[0].is_destructive());
    assert!(toasts[1].is_destructive());
}

#[test]
fn test_nested_registries() {
    let recorder = RecordingNotifier::new();

    let mut inner = NotifierRegistry::new();
    inner.register(Box::new(recorder.clone()));

    let mut outer = NotifierRegistry::new();
    outer.register(Box::new(inner));

    outer.notify(&Toast::new("Reminder Set", "EC57"));
    assert_eq!(recorder.titles(), vec!["Reminder Set"]);
}
