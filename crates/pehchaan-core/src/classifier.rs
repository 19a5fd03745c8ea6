//! Keyword intent classifier for the scripted assistant
//!
//! Rules are checked in priority order and the first rule with a keyword
//! contained in the lowercased message wins.

use crate::types::Category;
use rand::Rng;

pub const WELCOME_MESSAGE: &str = "Hello! I'm your Rail Pehchaan AI assistant. I can help you with component complaints, technical issues, and system queries. How can I assist you today?";

pub const QUICK_ACTIONS: [&str; 4] = [
    "Component defect report",
    "QR code scanning issue",
    "Maintenance request",
    "System error report",
];

const QR_HELP: &str = "For QR code scanning issues: 1) Ensure good lighting, 2) Clean the QR code surface, 3) Update the mobile app. If issues persist, I can generate a backup tracking code for you.";
const MAINTENANCE_ACK: &str = "Maintenance request received. Based on AI analysis, I recommend scheduling maintenance within 7 days. I'll notify the maintenance team and provide you with a service ticket number.";
pub const FALLBACK_RESPONSE: &str = "Thank you for your query. I'm analyzing your request and will connect you with the appropriate department. Is this related to component tracking, maintenance, or technical support?";

/// Which rule matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Defect,
    QrScan,
    Maintenance,
    SystemError,
    General,
}

const RULES: &[(Intent, &[&str])] = &[
    (Intent::Defect, &["defect", "damage", "broken"]),
    (Intent::QrScan, &["qr", "scan"]),
    (Intent::Maintenance, &["maintenance"]),
    (Intent::SystemError, &["error", "problem"]),
];

impl Intent {
    pub fn category(&self) -> Category {
        match self {
            Intent::Defect | Intent::SystemError => Category::Complaint,
            Intent::QrScan | Intent::General => Category::Info,
            Intent::Maintenance => Category::Resolved,
        }
    }
}

/// Category plus the canned reply text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub intent: Intent,
    pub category: Category,
    pub response: String,
}

pub fn classify_intent(message: &str) -> Intent {
    let lower = message.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::General)
}

/// Classify a message and build its reply, drawing ticket numbers from `rng`
pub fn respond<R: Rng + ?Sized>(message: &str, rng: &mut R) -> Classification {
    let intent = classify_intent(message);
    let response = match intent {
        Intent::Defect => format!(
            "I understand you're reporting a component defect. I've logged your complaint with ID: #RC{}. Our maintenance team will inspect the component within 24 hours. Please share the QR code or location details.",
            rng.gen_range(0..10_000)
        ),
        Intent::QrScan => QR_HELP.to_string(),
        Intent::Maintenance => MAINTENANCE_ACK.to_string(),
        Intent::SystemError => format!(
            "System error reported. I've initiated diagnostic procedures and logged the issue. Our technical team will investigate and provide a fix within 2-4 hours. Error ID: #ERR{}",
            rng.gen_range(0..1_000)
        ),
        Intent::General => FALLBACK_RESPONSE.to_string(),
    };

    tracing::debug!(?intent, "classified message");

    Classification {
        intent,
        category: intent.category(),
        response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_broken_is_complaint() {
        for text in ["broken", "The clip is BROKEN", "unbroken rail?", "rail broken near km 45"] {
            let result = respond(text, &mut rng());
            assert_eq!(result.category, Category::Complaint, "{text}");
            assert!(result.response.contains("#RC"));
        }
    }

    #[test]
    fn test_unknown_text_falls_back_to_info() {
        for text in ["", "hello there", "what time is the train?"] {
            let result = respond(text, &mut rng());
            assert_eq!(result.intent, Intent::General);
            assert_eq!(result.category, Category::Info);
            assert_eq!(result.response, FALLBACK_RESPONSE);
        }
    }

    #[test]
    fn test_priority_order() {
        // defect beats every later rule
        assert_eq!(classify_intent("damage found while scanning"), Intent::Defect);
        // qr beats maintenance
        assert_eq!(classify_intent("QR needed for maintenance"), Intent::QrScan);
        // maintenance beats error
        assert_eq!(classify_intent("maintenance error"), Intent::Maintenance);
        assert_eq!(classify_intent("there is a problem"), Intent::SystemError);
    }

    #[test]
    fn test_categories() {
        assert_eq!(respond("scan fails", &mut rng()).category, Category::Info);
        assert_eq!(respond("maintenance", &mut rng()).category, Category::Resolved);
        assert_eq!(respond("error 500", &mut rng()).category, Category::Complaint);
    }

    #[test]
    fn test_ticket_numbers_in_range() {
        let mut rng = rng();
        for _ in 0..200 {
            let reply = respond("system error", &mut rng).response;
            let n: u32 = reply.rsplit("#ERR").next().unwrap().parse().unwrap();
            assert!(n < 1_000);
        }
    }

    #[test]
    fn test_quick_actions_cover_each_rule() {
        let intents: Vec<Intent> = QUICK_ACTIONS.iter().map(|a| classify_intent(a)).collect();
        assert_eq!(
            intents,
            vec![
                Intent::Defect,
                Intent::QrScan,
                Intent::Maintenance,
                Intent::SystemError
            ]
        );
    }
}
