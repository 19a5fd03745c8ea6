mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use pehchaan_notify::{ConsoleNotifier, NotifierRegistry};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut notifier = NotifierRegistry::new();
    if cli.quiet {
        notifier.register(Box::new(ConsoleNotifier::quiet()));
    } else {
        notifier.register(Box::new(ConsoleNotifier::new()));
    }

    match cli.command {
        Commands::Scan { code, json } => commands::scan::run(&code, json),
        Commands::DemoCodes => commands::demo_codes::run(),
        Commands::Ask { text } => commands::ask::run(&text, &mut notifier),
        Commands::Chat { remote } => commands::chat::run(remote, &mut notifier),
        Commands::Reminders {
            view,
            today,
            remind,
        } => commands::reminders::run(view.into(), today, remind.as_deref(), &mut notifier),
        Commands::Flag {
            component,
            issue_type,
            severity,
            description,
        } => {
            let form = pehchaan_core::IssueForm {
                component_id: component,
                issue_type,
                severity,
                description,
            };
            commands::flag::run(form, &mut notifier)
        }
        Commands::Init => commands::init::run(),
        Commands::Config => commands::config::run(),
        Commands::Version => commands::version::run(),
    }
}
