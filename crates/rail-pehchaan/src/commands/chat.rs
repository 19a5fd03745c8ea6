use std::io::{BufRead, Write};

use pehchaan_chat::{responder_for, ChatError, ChatSession, Responder};
use pehchaan_core::classifier::QUICK_ACTIONS;
use pehchaan_notify::Notifier;

pub fn run(remote: bool, notifier: &mut dyn Notifier) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let responder = responder_for(&config.chat, remote)?;
    tracing::info!(responder = responder.name(), "chat started");

    let rt = super::runtime()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl(
        stdin.lock(),
        stdout.lock(),
        &rt,
        responder.as_ref(),
        notifier,
    )
}

/// Read lines until EOF or `/quit`, printing each reply
pub fn repl<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    rt: &tokio::runtime::Runtime,
    responder: &dyn Responder,
    notifier: &mut dyn Notifier,
) -> anyhow::Result<()> {
    let mut session = ChatSession::new();
    if let Some(greeting) = session.last() {
        writeln!(out, "bot> {}", greeting.text())?;
    }
    writeln!(out, "Quick actions:")?;
    for (i, action) in QUICK_ACTIONS.iter().enumerate() {
        writeln!(out, "  {}. {action}", i + 1)?;
    }
    writeln!(out, "Type a message, a quick action number, or /quit.")?;

    for line in input.lines() {
        let line = line?;
        let text = match line.trim() {
            "/quit" | "/exit" => break,
            other => quick_action(other).unwrap_or(other),
        };

        match rt.block_on(session.send(text, responder, notifier)) {
            Ok(reply) => writeln!(out, "bot> {}", reply.text())?,
            Err(ChatError::EmptyMessage) => continue,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn quick_action(input: &str) -> Option<&'static str> {
    let index: usize = input.parse().ok()?;
    QUICK_ACTIONS.get(index.checked_sub(1)?).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pehchaan_chat::RuleResponder;
    use pehchaan_notify::RecordingNotifier;

    #[test]
    fn test_quick_action_lookup() {
        assert_eq!(quick_action("1"), Some("Component defect report"));
        assert_eq!(quick_action("4"), Some("System error report"));
        assert_eq!(quick_action("0"), None);
        assert_eq!(quick_action("5"), None);
        assert_eq!(quick_action("hello"), None);
    }

    #[test]
    fn test_repl_transcript() {
        let rt = super::super::runtime().unwrap();
        let responder = RuleResponder::seeded(3);
        let mut notifier = RecordingNotifier::new();
        let input = "2\n\nthe rail is broken\n/quit\nnever sent\n".as_bytes();
        let mut out = Vec::new();

        repl(input, &mut out, &rt, &responder, &mut notifier).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("bot> Hello! I'm your Rail Pehchaan AI assistant."));
        assert!(text.contains("bot> For QR code scanning issues"));
        assert!(text.contains("#RC"));
        assert_eq!(text.matches("bot> ").count(), 3);
        assert_eq!(notifier.titles(), vec!["Complaint Logged".to_string()]);
    }
}
