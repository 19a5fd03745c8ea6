//! Static QR-code → part record table

use crate::types::{PartRecord, PartStatus, Specifications};
use chrono::NaiveDate;
use std::collections::HashMap;

pub const DEMO_CODES: [&str; 3] = ["RP001", "RP002", "RP003"];

#[derive(Debug, Clone)]
pub struct PartCatalog {
    parts: HashMap<String, PartRecord>,
}

impl PartCatalog {
    pub fn new(parts: impl IntoIterator<Item = PartRecord>) -> Self {
        Self {
            parts: parts.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    /// The three demo parts printed on the sample QR codes
    pub fn demo() -> Self {
        Self::new(demo_parts())
    }

    /// Exact-match lookup. A miss is a normal outcome.
    pub fn lookup(&self, code: &str) -> Option<&PartRecord> {
        self.parts.get(code)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.parts.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for PartCatalog {
    fn default() -> Self {
        Self::demo()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn specs(pairs: &[(&str, &str)]) -> Specifications {
    pairs.iter().copied().collect()
}

fn demo_parts() -> Vec<PartRecord> {
    vec![
        PartRecord {
            id: "RP001".to_string(),
            name: "Railway Wheel Set".to_string(),
            part_type: "Rolling Stock".to_string(),
            manufacturing_date: date(2024, 3, 15),
            installation_date: date(2024, 4, 20),
            location: "Mumbai Central Station - Platform 3".to_string(),
            status: PartStatus::Active,
            next_maintenance: date(2024, 12, 15),
            specifications: specs(&[
                ("Diameter", "920mm"),
                ("Material", "EN13262 Grade"),
                ("Load Capacity", "22.5 tons"),
                ("Speed Rating", "160 km/h"),
            ]),
        },
        PartRecord {
            id: "RP002".to_string(),
            name: "Rail Track Section".to_string(),
            part_type: "Infrastructure".to_string(),
            manufacturing_date: date(2024, 1, 10),
            installation_date: date(2024, 2, 28),
            location: "Delhi Junction - Track 7".to_string(),
            status: PartStatus::Maintenance,
            next_maintenance: date(2024, 10, 20),
            specifications: specs(&[
                ("Length", "12m"),
                ("Weight", "60kg/m"),
                ("Grade", "UIC 60"),
                ("Hardness", "320 HB"),
            ]),
        },
        PartRecord {
            id: "RP003".to_string(),
            name: "Signal Controller".to_string(),
            part_type: "Signaling".to_string(),
            manufacturing_date: date(2023, 11, 5),
            installation_date: date(2024, 1, 15),
            location: "Chennai Central - Junction Box 12".to_string(),
            status: PartStatus::ReplacementDue,
            next_maintenance: date(2024, 9, 30),
            specifications: specs(&[
                ("Voltage", "24V DC"),
                ("Current", "5A"),
                ("Protection", "IP65"),
                ("Operating Temp", "-40°C to +85°C"),
            ]),
        },
    ]
}
