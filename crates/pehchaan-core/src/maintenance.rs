//! Maintenance reminder dashboard over static component records

use crate::config::ReminderConfig;
use crate::types::{ComponentRecord, ComponentStatus, Priority};
use chrono::NaiveDate;
use pehchaan_notify::{Notifier, Toast};
use serde::{Deserialize, Serialize};

/// "This month" in the stats header is always a 30-day horizon
const THIS_MONTH_DAYS: i64 = 30;

/// Whole days from `today` until `next`; negative when overdue
pub fn days_until(next: NaiveDate, today: NaiveDate) -> i64 {
    (next - today).num_days()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Days past the due date
    Overdue(i64),
    /// Due within the urgent window
    Urgent(i64),
    Scheduled(i64),
}

impl Urgency {
    pub fn from_days(days: i64, urgent_days: i64) -> Self {
        if days < 0 {
            Urgency::Overdue(-days)
        } else if days <= urgent_days {
            Urgency::Urgent(days)
        } else {
            Urgency::Scheduled(days)
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Urgency::Overdue(d) => format!("{d} days overdue"),
            Urgency::Urgent(d) | Urgency::Scheduled(d) => format!("{d} days remaining"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    #[default]
    Upcoming,
    Critical,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub upcoming: usize,
    pub critical: usize,
    pub this_month: usize,
}

pub struct Dashboard {
    components: Vec<ComponentRecord>,
    upcoming_window_days: i64,
    urgent_days: i64,
}

impl Dashboard {
    pub fn new(components: Vec<ComponentRecord>, config: &ReminderConfig) -> Self {
        Self {
            components,
            upcoming_window_days: config.upcoming_window_days,
            urgent_days: config.urgent_days,
        }
    }

    pub fn sample(config: &ReminderConfig) -> Self {
        Self::new(sample_components(), config)
    }

    pub fn components(&self) -> &[ComponentRecord] {
        &self.components
    }

    pub fn find(&self, id: &str) -> Option<&ComponentRecord> {
        self.components.iter().find(|c| c.id == id || c.qr_code == id)
    }

    pub fn urgency(&self, component: &ComponentRecord, today: NaiveDate) -> Urgency {
        Urgency::from_days(
            days_until(component.next_maintenance, today),
            self.urgent_days,
        )
    }

    /// Due within the window, overdue included, in record order
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&ComponentRecord> {
        self.due_within(self.upcoming_window_days, today)
    }

    pub fn critical(&self) -> Vec<&ComponentRecord> {
        self.components
            .iter()
            .filter(|c| c.status == ComponentStatus::Critical)
            .collect()
    }

    /// Every component, soonest maintenance first
    pub fn all_sorted(&self, today: NaiveDate) -> Vec<&ComponentRecord> {
        let mut all: Vec<&ComponentRecord> = self.components.iter().collect();
        all.sort_by_key(|c| days_until(c.next_maintenance, today));
        all
    }

    pub fn view(&self, view: DashboardView, today: NaiveDate) -> Vec<&ComponentRecord> {
        match view {
            DashboardView::Upcoming => self.upcoming(today),
            DashboardView::Critical => self.critical(),
            DashboardView::All => self.all_sorted(today),
        }
    }

    pub fn stats(&self, today: NaiveDate) -> DashboardStats {
        DashboardStats {
            total: self.components.len(),
            upcoming: self.upcoming(today).len(),
            critical: self.critical().len(),
            this_month: self.due_within(THIS_MONTH_DAYS, today).len(),
        }
    }

    /// Emit a "Reminder Set" toast for the component, if it exists
    pub fn set_reminder(
        &self,
        id: &str,
        notifier: &mut dyn Notifier,
    ) -> Option<&ComponentRecord> {
        let component = self.find(id)?;
        tracing::info!(component = %component.name, "reminder set");
        notifier.notify(&Toast::new(
            "Reminder Set",
            format!("You'll be notified about {} maintenance.", component.name),
        ));
        Some(component)
    }

    fn due_within(&self, days: i64, today: NaiveDate) -> Vec<&ComponentRecord> {
        self.components
            .iter()
            .filter(|c| days_until(c.next_maintenance, today) <= days)
            .collect()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn sample_components() -> Vec<ComponentRecord> {
    vec![
        ComponentRecord {
            id: "1".to_string(),
            name: "Elastic Rail Clip - EC57".to_string(),
            location: "Delhi Junction - Track 3, KM 45.2".to_string(),
            install_date: date(2023, 3, 15),
            expected_life_months: 24,
            condition_percent: 75,
            last_maintenance: date(2024, 8, 15),
            next_maintenance: date(2024, 9, 20),
            priority: Priority::Critical,
            qr_code: "RC-EC57-2023-001".to_string(),
            status: ComponentStatus::Warning,
        },
        ComponentRecord {
            id: "2".to_string(),
            name: "Rail Pad - RP40".to_string(),
            location: "Mumbai Central - Track 1, KM 12.8".to_string(),
            install_date: date(2023, 6, 10),
            expected_life_months: 18,
            condition_percent: 45,
            last_maintenance: date(2024, 7, 20),
            next_maintenance: date(2024, 9, 18),
            priority: Priority::Critical,
            qr_code: "RC-RP40-2023-002".to_string(),
            status: ComponentStatus::Critical,
        },
        ComponentRecord {
            id: "3".to_string(),
            name: "Concrete Sleeper - CS80".to_string(),
            location: "Chennai Express - Track 2, KM 78.5".to_string(),
            install_date: date(2022, 11, 20),
            expected_life_months: 36,
            condition_percent: 88,
            last_maintenance: date(2024, 8, 1),
            next_maintenance: date(2024, 10, 15),
            priority: Priority::Low,
            qr_code: "RC-CS80-2022-003".to_string(),
            status: ComponentStatus::Active,
        },
        ComponentRecord {
            id: "4".to_string(),
            name: "Rail Liner - RL25".to_string(),
            location: "Bangalore Metro - Track 4, KM 23.1".to_string(),
            install_date: date(2023, 1, 5),
            expected_life_months: 12,
            condition_percent: 30,
            last_maintenance: date(2024, 6, 10),
            next_maintenance: date(2024, 9, 16),
            priority: Priority::Critical,
            qr_code: "RC-RL25-2023-004".to_string(),
            status: ComponentStatus::Critical,
        },
    ]
}
