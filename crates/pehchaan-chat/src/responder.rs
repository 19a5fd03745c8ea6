//! Responder seam and the scripted keyword responder

use crate::error::ChatError;
use crate::remote::RemoteResponder;
use async_trait::async_trait;
use pehchaan_core::{Category, ChatConfig, ChatMessage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;
use std::time::Duration;

/// Text and optional category for a bot message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub category: Option<Category>,
}

/// Produces the bot's answer to the last message in `history`
#[async_trait]
pub trait Responder: Send + Sync {
    fn name(&self) -> &str;

    async fn reply(&self, history: &[ChatMessage]) -> Result<Reply, ChatError>;
}

/// Keyword-matching assistant with a simulated typing delay
pub struct RuleResponder {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl RuleResponder {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic ticket numbers and no delay
    pub fn seeded(seed: u64) -> Self {
        Self {
            delay: Duration::ZERO,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

#[async_trait]
impl Responder for RuleResponder {
    fn name(&self) -> &str {
        "rules"
    }

    async fn reply(&self, history: &[ChatMessage]) -> Result<Reply, ChatError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let latest = history.last().map(ChatMessage::text).unwrap_or_default();
        let classification = match self.rng.lock() {
            Ok(mut rng) => pehchaan_core::respond(latest, &mut *rng),
            Err(poisoned) => pehchaan_core::respond(latest, &mut *poisoned.into_inner()),
        };

        Ok(Reply {
            text: classification.response,
            category: Some(classification.category),
        })
    }
}

/// Pick the scripted responder, or the remote one when asked for
pub fn responder_for(config: &ChatConfig, remote: bool) -> Result<Box<dyn Responder>, ChatError> {
    if !remote {
        return Ok(Box::new(RuleResponder::new(Duration::from_millis(
            config.reply_delay_ms,
        ))));
    }

    let endpoint = config.endpoint.clone().ok_or(ChatError::NoEndpoint)?;
    let responder = RemoteResponder::new(
        endpoint,
        config.api_key.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;
    Ok(Box::new(responder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_rule_responder_uses_latest_message() {
        let responder = RuleResponder::seeded(1);
        let history = vec![
            ChatMessage::user("1", "the rail is broken", Utc::now()),
            ChatMessage::bot("2", "logged", Utc::now(), Some(Category::Complaint)),
            ChatMessage::user("3", "scan not working", Utc::now()),
        ];

        let reply = responder.reply(&history).await.unwrap();
        assert_eq!(reply.category, Some(Category::Info));
        assert!(reply.text.starts_with("For QR code scanning issues"));
    }

    #[tokio::test]
    async fn test_rule_responder_empty_history() {
        let responder = RuleResponder::seeded(1);
        let reply = responder.reply(&[]).await.unwrap();
        assert_eq!(reply.category, Some(Category::Info));
    }

    #[test]
    fn test_responder_for_remote_requires_endpoint() {
        let config = ChatConfig::default();
        assert!(matches!(
            responder_for(&config, true),
            Err(ChatError::NoEndpoint)
        ));
        assert_eq!(responder_for(&config, false).unwrap().name(), "rules");
    }
}
