use pehchaan_core::{FlaggedIssue, IssueForm, IssueLog};
use pehchaan_notify::Notifier;

/// Flag one issue, then print a summary line and the recorded entry as JSON
pub fn run(mut form: IssueForm, notifier: &mut dyn Notifier) -> anyhow::Result<()> {
    let mut log = IssueLog::new();
    let issue = log.flag(&mut form, notifier)?;
    println!("{}", summary(issue));
    println!("{}", serde_json::to_string_pretty(issue)?);
    Ok(())
}

pub fn summary(issue: &FlaggedIssue) -> String {
    format!(
        "{} {} on {}: {} / {}",
        issue.id,
        issue.status,
        issue.component_id,
        issue.issue_type.label(),
        issue.severity.label()
    )
}
