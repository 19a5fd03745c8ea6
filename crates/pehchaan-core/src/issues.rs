//! In-memory issue flagging

use crate::types::{FlaggedIssue, IdClock, IssueStatus, IssueType, Severity};
use chrono::{DateTime, Utc};
use pehchaan_notify::{Notifier, Toast};

/// The four required inputs of the flag form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueForm {
    pub component_id: String,
    pub issue_type: Option<IssueType>,
    pub severity: Option<Severity>,
    pub description: String,
}

impl IssueForm {
    /// Names of required fields that are still empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.component_id.trim().is_empty() {
            missing.push("component id");
        }
        if self.issue_type.is_none() {
            missing.push("issue type");
        }
        if self.severity.is_none() {
            missing.push("severity");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IssueError {
    #[error("Please fill in all fields before flagging the issue (missing: {})", .0.join(", "))]
    MissingInformation(Vec<&'static str>),
}

/// Flagged issues, newest first
#[derive(Debug, Default)]
pub struct IssueLog {
    issues: Vec<FlaggedIssue>,
    ids: IdClock,
}

impl IssueLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issues(&self) -> &[FlaggedIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn flag(
        &mut self,
        form: &mut IssueForm,
        notifier: &mut dyn Notifier,
    ) -> Result<&FlaggedIssue, IssueError> {
        self.flag_at(form, notifier, Utc::now())
    }

    /// Validate the form, prepend a new issue and clear the form.
    ///
    /// On a validation failure the log and the form are left untouched.
    pub fn flag_at(
        &mut self,
        form: &mut IssueForm,
        notifier: &mut dyn Notifier,
        now: DateTime<Utc>,
    ) -> Result<&FlaggedIssue, IssueError> {
        let (issue_type, severity) = match (form.issue_type, form.severity) {
            (Some(t), Some(s)) if form.is_complete() => (t, s),
            _ => {
                notifier.notify(&Toast::destructive(
                    "Missing Information",
                    "Please fill in all fields before flagging the issue.",
                ));
                return Err(IssueError::MissingInformation(form.missing_fields()));
            }
        };

        let issue = FlaggedIssue {
            id: format!("ISS-{}", self.ids.next(now)),
            component_id: form.component_id.trim().to_string(),
            issue_type,
            severity,
            description: form.description.trim().to_string(),
            timestamp: now,
            status: IssueStatus::Flagged,
        };

        tracing::info!(
            id = %issue.id,
            component = %issue.component_id,
            severity = %issue.severity,
            "issue flagged"
        );
        notifier.notify(&Toast::new(
            "Issue Flagged Successfully",
            format!(
                "Component {} issue has been logged to TMS database.",
                issue.component_id
            ),
        ));

        self.issues.insert(0, issue);
        form.clear();
        Ok(&self.issues[0])
    }
}
