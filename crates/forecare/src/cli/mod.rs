//! Command-line interface for forecare.
//!
//! This module provides the CLI structure for the `fcare` binary: the
//! marketing site's dashboard views, exposed as subcommands.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AlertsCommand, AskCommand, BatteryArg, ConfigCommand, DeviceStatusArg, DeviceTypeArg,
    DevicesCommand, InterventionsCommand, KindArg, LevelArg, LoginCommand, ModeArg, OpenCommand,
    OutputFormat, OverviewCommand, RegisterCommand, ReportsCommand, ResidentCommand,
    ResidentsCommand, StatusArg, TimeRangeArg, TrendsCommand,
};

/// fcare - Simulated care-monitoring dashboard
///
/// Browse resident risk data, alerts, device status, and AI-generated
/// narrative text from fixture data. Dashboard commands require a signed-in
/// session (`fcare login --demo` is the fastest way in).
#[derive(Debug, Parser)]
#[command(name = "fcare")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in with credentials or as the demo user
    Login(LoginCommand),

    /// Register a new profile (always succeeds)
    Register(RegisterCommand),

    /// Sign out and clear the session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Facility overview with the AI daily briefing
    Overview(OverviewCommand),

    /// List residents
    Residents(ResidentsCommand),

    /// Show one resident's profile
    Resident(ResidentCommand),

    /// List monitoring devices
    Devices(DevicesCommand),

    /// Show the alert feed
    Alerts(AlertsCommand),

    /// List facility reports
    Reports(ReportsCommand),

    /// Show trend charts
    Trends(TrendsCommand),

    /// Show the intervention timeline
    Interventions(InterventionsCommand),

    /// Ask the canned decision-support assistant
    Ask(AskCommand),

    /// Resolve a dashboard route path
    Open(OpenCommand),

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }

    /// Whether this command requires an authenticated session.
    #[must_use]
    pub fn requires_session(&self) -> bool {
        matches!(
            self.command,
            Command::Overview(_)
                | Command::Residents(_)
                | Command::Resident(_)
                | Command::Devices(_)
                | Command::Alerts(_)
                | Command::Reports(_)
                | Command::Trends(_)
                | Command::Interventions(_)
                | Command::Ask(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "fcare");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        let quiet = Cli::try_parse_from(["fcare", "-q", "whoami"]).unwrap();
        assert_eq!(quiet.verbosity(), crate::logging::Verbosity::Quiet);

        let normal = Cli::try_parse_from(["fcare", "whoami"]).unwrap();
        assert_eq!(normal.verbosity(), crate::logging::Verbosity::Normal);

        let verbose = Cli::try_parse_from(["fcare", "-v", "whoami"]).unwrap();
        assert_eq!(verbose.verbosity(), crate::logging::Verbosity::Verbose);

        let trace = Cli::try_parse_from(["fcare", "-vv", "whoami"]).unwrap();
        assert_eq!(trace.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_login_with_credentials() {
        let cli = Cli::try_parse_from(["fcare", "login", "demo@forecare.com", "Demo1234!"]).unwrap();
        match cli.command {
            Command::Login(cmd) => {
                assert_eq!(cmd.email.as_deref(), Some("demo@forecare.com"));
                assert!(!cmd.demo);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_login_demo_without_credentials() {
        let cli = Cli::try_parse_from(["fcare", "login", "--demo"]).unwrap();
        match cli.command {
            Command::Login(cmd) => assert!(cmd.demo),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_login_without_credentials_or_demo_fails() {
        assert!(Cli::try_parse_from(["fcare", "login"]).is_err());
    }

    #[test]
    fn test_parse_residents_filters() {
        let cli = Cli::try_parse_from([
            "fcare",
            "residents",
            "--search",
            "weber",
            "--status",
            "high-risk",
            "--unit",
            "Unit B",
        ])
        .unwrap();
        match cli.command {
            Command::Residents(cmd) => {
                assert_eq!(cmd.search, "weber");
                assert_eq!(cmd.status, Some(StatusArg::HighRisk));
                assert_eq!(cmd.unit.as_deref(), Some("Unit B"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_devices_type_and_battery() {
        let cli =
            Cli::try_parse_from(["fcare", "devices", "--type", "ring", "--battery", "low"])
                .unwrap();
        match cli.command {
            Command::Devices(cmd) => {
                assert_eq!(cmd.device_type, Some(DeviceTypeArg::Ring));
                assert_eq!(cmd.battery, Some(BatteryArg::Low));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_trends_with_resident_and_range() {
        let cli =
            Cli::try_parse_from(["fcare", "trends", "--resident", "2", "--range", "30d"]).unwrap();
        match cli.command {
            Command::Trends(cmd) => {
                assert_eq!(cmd.resident.as_deref(), Some("2"));
                assert_eq!(cmd.range, Some(TimeRangeArg::ThirtyDays));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_ask_collects_question_words() {
        let cli = Cli::try_parse_from(["fcare", "ask", "who", "needs", "attention"]).unwrap();
        match cli.command {
            Command::Ask(cmd) => assert_eq!(cmd.question, vec!["who", "needs", "attention"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_open_path() {
        let cli = Cli::try_parse_from(["fcare", "open", "/dashboard/trends?resident=4"]).unwrap();
        match cli.command {
            Command::Open(cmd) => assert_eq!(cmd.path, "/dashboard/trends?resident=4"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_requires_session_split() {
        let gated = Cli::try_parse_from(["fcare", "residents"]).unwrap();
        assert!(gated.requires_session());

        let public = Cli::try_parse_from(["fcare", "login", "--demo"]).unwrap();
        assert!(!public.requires_session());

        let open = Cli::try_parse_from(["fcare", "open", "/"]).unwrap();
        assert!(!open.requires_session());
    }

    #[test]
    fn test_parse_with_config_flag() {
        let cli = Cli::try_parse_from(["fcare", "-c", "/custom/config.toml", "whoami"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
