//! Core record types

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Bot,
}

/// Response category attached to bot replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Complaint,
    Info,
    Resolved,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Complaint => "complaint",
            Category::Info => "info",
            Category::Resolved => "resolved",
        };
        f.write_str(label)
    }
}

/// One chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    id: String,
    author: Author,
    text: String,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
}

impl ChatMessage {
    pub fn user(id: impl Into<String>, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            author: Author::User,
            text: text.into(),
            created_at,
            category: None,
        }
    }

    pub fn bot(
        id: impl Into<String>,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
        category: Option<Category>,
    ) -> Self {
        Self {
            id: id.into(),
            author: Author::Bot,
            text: text.into(),
            created_at,
            category,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }
}

/// Lifecycle status of a scanned part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartStatus {
    Active,
    Maintenance,
    #[serde(rename = "Replacement Due")]
    ReplacementDue,
}

impl fmt::Display for PartStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PartStatus::Active => "Active",
            PartStatus::Maintenance => "Maintenance",
            PartStatus::ReplacementDue => "Replacement Due",
        };
        f.write_str(label)
    }
}

/// A part record reachable by QR code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub part_type: String,
    pub manufacturing_date: NaiveDate,
    pub installation_date: NaiveDate,
    pub location: String,
    pub status: PartStatus,
    pub next_maintenance: NaiveDate,
    pub specifications: Specifications,
}

/// Named part specifications in listing order, serialized as a JSON object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Specifications(Vec<(String, String)>);

impl Specifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, keeping the original position of an existing key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Specifications {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut specs = Specifications::new();
        for (key, value) in iter {
            specs.insert(key, value);
        }
        specs
    }
}

impl Serialize for Specifications {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Specifications {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SpecificationsVisitor)
    }
}

struct SpecificationsVisitor;

impl<'de> Visitor<'de> for SpecificationsVisitor {
    type Value = Specifications;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of specification names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut specs = Specifications::new();
        while let Some((key, value)) = map.next_entry::<String, String>()? {
            specs.insert(key, value);
        }
        Ok(specs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Active,
    Warning,
    Critical,
}

/// A tracked track component with its maintenance schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub install_date: NaiveDate,
    pub expected_life_months: u32,
    pub condition_percent: u8,
    pub last_maintenance: NaiveDate,
    pub next_maintenance: NaiveDate,
    pub priority: Priority,
    pub qr_code: String,
    pub status: ComponentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueType {
    Crack,
    Wear,
    Corrosion,
    Deformation,
    Missing,
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 6] = [
        IssueType::Crack,
        IssueType::Wear,
        IssueType::Corrosion,
        IssueType::Deformation,
        IssueType::Missing,
        IssueType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IssueType::Crack => "Crack/Fracture",
            IssueType::Wear => "Excessive Wear",
            IssueType::Corrosion => "Corrosion",
            IssueType::Deformation => "Deformation",
            IssueType::Missing => "Missing Component",
            IssueType::Other => "Other",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for IssueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueType::ALL
            .into_iter()
            .find(|t| t.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown issue type: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical - Immediate Action",
            Severity::High => "High - Urgent",
            Severity::Medium => "Medium - Schedule Soon",
            Severity::Low => "Low - Routine Check",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|v| v.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown severity: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueStatus {
    Flagged,
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Flagged")
    }
}

/// A field report recorded from the issue form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedIssue {
    pub id: String,
    pub component_id: String,
    pub issue_type: IssueType,
    pub severity: Severity,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub status: IssueStatus,
}

/// Millisecond id source that never repeats within one owner
#[derive(Debug, Default)]
pub struct IdClock {
    last: i64,
}

impl IdClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> i64 {
        let millis = now.timestamp_millis();
        let id = if millis > self.last {
            millis
        } else {
            self.last + 1
        };
        self.last = id;
        id
    }
}
