//! Domain logic for Rail Pehchaan: records, classifier, lookup, issues and reminders

pub mod catalog;
pub mod classifier;
mod config;
pub mod issues;
pub mod maintenance;
pub mod scan;
mod types;

pub use catalog::{PartCatalog, DEMO_CODES};
pub use classifier::{classify_intent, respond, Classification, Intent};
pub use config::{ChatConfig, Config, ConfigError, ReminderConfig, ENV_CHAT_ENDPOINT, ENV_CHAT_KEY};
pub use issues::{IssueError, IssueForm, IssueLog};
pub use maintenance::{days_until, Dashboard, DashboardStats, DashboardView, Urgency};
pub use scan::{ScanError, ScanOutcome, ScanSession};
pub use types::{
    Author, Category, ChatMessage, ComponentRecord, ComponentStatus, FlaggedIssue, IdClock,
    IssueStatus, IssueType, PartRecord, PartStatus, Priority, Severity, Specifications,
};
