//! Remote inference responder
//!
//! Sends the whole conversation as `{"messages": [{"role", "content"}]}` and
//! expects `{"response": "..."}` or `{"error": "..."}` back.

use crate::error::ChatError;
use crate::responder::{Reply, Responder};
use async_trait::async_trait;
use pehchaan_core::{Author, ChatMessage};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl From<Author> for Role {
    fn from(author: Author) -> Self {
        match author {
            Author::User => Role::User,
            Author::Bot => Role::Assistant,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Turn<'a> {
    pub role: Role,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub messages: Vec<Turn<'a>>,
}

impl<'a> ChatRequest<'a> {
    pub fn from_history(history: &'a [ChatMessage]) -> Self {
        Self {
            messages: history
                .iter()
                .map(|m| Turn {
                    role: m.author().into(),
                    content: m.text(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Map an HTTP status and body onto a reply or a typed error
pub fn interpret_response(status: u16, body: &str) -> Result<Reply, ChatError> {
    let parsed: ChatResponse = serde_json::from_str(body).unwrap_or_default();

    if let Some(error) = parsed.error {
        if status == 429 || error.contains("Rate limit") {
            return Err(ChatError::RateLimited(error));
        }
        return Err(ChatError::Remote(error));
    }

    if status == 429 {
        return Err(ChatError::RateLimited(format!("HTTP {status}")));
    }
    if !(200..300).contains(&status) {
        return Err(ChatError::Remote(format!("HTTP {status}")));
    }

    match parsed.response {
        Some(text) => Ok(Reply {
            text,
            category: None,
        }),
        None => Err(ChatError::Remote("response field missing".to_string())),
    }
}

pub struct RemoteResponder {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl RemoteResponder {
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl Responder for RemoteResponder {
    fn name(&self) -> &str {
        "remote"
    }

    async fn reply(&self, history: &[ChatMessage]) -> Result<Reply, ChatError> {
        let request = ChatRequest::from_history(history);
        let mut builder = self.http.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        tracing::debug!(
            endpoint = %self.endpoint,
            turns = request.messages.len(),
            "sending chat request"
        );
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        interpret_response(status, &body)
    }
}
