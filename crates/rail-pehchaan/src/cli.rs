use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use pehchaan_core::{DashboardView, IssueType, Severity};

#[derive(Parser)]
#[command(name = "rail-pehchaan")]
#[command(version)]
#[command(about = "Railway component tracking: QR lookup, issue flagging, reminders and chat")]
pub struct Cli {
    /// Suppress toast notifications on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a part by its QR code
    Scan {
        code: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the demo QR codes
    DemoCodes,

    /// Ask the scripted assistant a single question
    Ask { text: String },

    /// Interactive chat with the assistant
    Chat {
        /// Use the configured remote endpoint instead of the scripted assistant
        #[arg(long)]
        remote: bool,
    },

    /// Maintenance reminder dashboard
    Reminders {
        #[arg(long, value_enum, default_value_t = ViewArg::Upcoming)]
        view: ViewArg,

        /// Evaluate the schedule as of this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Set a reminder for a component id or QR code
        #[arg(long)]
        remind: Option<String>,
    },

    /// Flag an issue on a component
    Flag {
        #[arg(long, default_value = "")]
        component: String,

        /// crack, wear, corrosion, deformation, missing or other
        #[arg(long)]
        issue_type: Option<IssueType>,

        /// critical, high, medium or low
        #[arg(long)]
        severity: Option<Severity>,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Write a default config file
    Init,

    /// Show the effective configuration
    Config,

    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Upcoming,
    Critical,
    All,
}

impl From<ViewArg> for DashboardView {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Upcoming => DashboardView::Upcoming,
            ViewArg::Critical => DashboardView::Critical,
            ViewArg::All => DashboardView::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["rail-pehchaan", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_scan() {
        let cli = Cli::try_parse_from(["rail-pehchaan", "scan", "RP002"]).unwrap();
        if let Commands::Scan { code, json } = cli.command {
            assert_eq!(code, "RP002");
            assert!(!json);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_reminders() {
        let cli = Cli::try_parse_from([
            "rail-pehchaan",
            "reminders",
            "--view",
            "critical",
            "--today",
            "2024-09-10",
        ])
        .unwrap();
        if let Commands::Reminders { view, today, remind } = cli.command {
            assert_eq!(view, ViewArg::Critical);
            assert_eq!(today, NaiveDate::from_ymd_opt(2024, 9, 10));
            assert!(remind.is_none());
        } else {
            panic!("Expected Reminders command");
        }
    }

    #[test]
    fn test_cli_parse_flag() {
        let cli = Cli::try_parse_from([
            "rail-pehchaan",
            "flag",
            "--component",
            "RC-2024-001",
            "--issue-type",
            "Crack",
            "--severity",
            "high",
            "--description",
            "Hairline crack on the clip",
        ])
        .unwrap();
        if let Commands::Flag {
            component,
            issue_type,
            severity,
            description,
        } = cli.command
        {
            assert_eq!(component, "RC-2024-001");
            assert_eq!(issue_type, Some(IssueType::Crack));
            assert_eq!(severity, Some(Severity::High));
            assert_eq!(description, "Hairline crack on the clip");
        } else {
            panic!("Expected Flag command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_severity() {
        let cli = Cli::try_parse_from(["rail-pehchaan", "flag", "--severity", "extreme"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_quiet_is_global() {
        let cli = Cli::try_parse_from(["rail-pehchaan", "demo-codes", "--quiet"]).unwrap();
        assert!(cli.quiet);
    }
}
