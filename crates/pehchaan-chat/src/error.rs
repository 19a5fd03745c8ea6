#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("A reply is still pending")]
    Pending,

    #[error("No reply is pending")]
    NotPending,

    #[error("No chat endpoint configured")]
    NoEndpoint,

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Chat endpoint error: {0}")]
    Remote(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ChatError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ChatError::RateLimited(_))
    }
}
