//! Assistant chat: session bookkeeping and the responders behind it

mod error;
pub mod remote;
pub mod responder;
pub mod session;

pub use error::ChatError;
pub use remote::RemoteResponder;
pub use responder::{responder_for, Reply, Responder, RuleResponder};
pub use session::{ChatSession, FALLBACK_REPLY};
