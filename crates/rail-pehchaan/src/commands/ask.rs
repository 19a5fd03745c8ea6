use pehchaan_chat::{ChatSession, RuleResponder};
use pehchaan_notify::Notifier;
use std::time::Duration;

/// One-shot question to the scripted assistant, without the typing delay
pub fn run(text: &str, notifier: &mut dyn Notifier) -> anyhow::Result<()> {
    let responder = RuleResponder::new(Duration::ZERO);
    let mut session = ChatSession::empty();

    let rt = super::runtime()?;
    let reply = rt.block_on(session.send(text, &responder, notifier))?;

    match reply.category() {
        Some(category) => println!("[{category}] {}", reply.text()),
        None => println!("{}", reply.text()),
    }
    Ok(())
}
