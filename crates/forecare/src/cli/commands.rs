//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands. Filter flags
//! mirror the criteria structs in [`crate::filter`]; omitting a flag is
//! the "all" sentinel.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::config::TimeRange;
use crate::model::{AlertLevel, BatteryBand, DeviceStatus, DeviceType, ReportKind, ReportMode,
    RiskStatus};

/// Login command arguments.
#[derive(Debug, Args)]
pub struct LoginCommand {
    /// Business email
    #[arg(required_unless_present = "demo")]
    pub email: Option<String>,

    /// Password
    #[arg(required_unless_present = "demo")]
    pub password: Option<String>,

    /// Sign in as the canned demo user, bypassing credentials
    #[arg(long)]
    pub demo: bool,
}

/// Register command arguments.
#[derive(Debug, Args)]
pub struct RegisterCommand {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Business email
    #[arg(long)]
    pub email: String,

    /// Password
    #[arg(long)]
    pub password: String,

    /// Facility or organization name
    #[arg(long)]
    pub organization: String,

    /// Role at the facility
    #[arg(long)]
    pub role: String,

    /// Country of the facility
    #[arg(long)]
    pub country: String,
}

/// Overview command arguments.
#[derive(Debug, Args)]
pub struct OverviewCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Residents list arguments.
#[derive(Debug, Args)]
pub struct ResidentsCommand {
    /// Free-text filter over name, room, and id
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Filter by status bucket
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Filter by unit label (e.g. "Unit A")
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Single resident profile arguments.
#[derive(Debug, Args)]
pub struct ResidentCommand {
    /// Resident id
    pub id: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Device list arguments.
#[derive(Debug, Args)]
pub struct DevicesCommand {
    /// Free-text filter over resident name, device id, and room
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Filter by connectivity state
    #[arg(long, value_enum)]
    pub status: Option<DeviceStatusArg>,

    /// Filter by hardware kind
    #[arg(short = 't', long = "type", value_enum)]
    pub device_type: Option<DeviceTypeArg>,

    /// Filter by battery bucket
    #[arg(short, long, value_enum)]
    pub battery: Option<BatteryArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Alert feed arguments.
#[derive(Debug, Args)]
pub struct AlertsCommand {
    /// Free-text filter over category, resident name, and room
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Filter by severity level
    #[arg(short, long, value_enum)]
    pub level: Option<LevelArg>,

    /// Only show unacknowledged alerts
    #[arg(long)]
    pub unacknowledged: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Report list arguments.
#[derive(Debug, Args)]
pub struct ReportsCommand {
    /// Free-text filter over name, summary, and tags
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Filter by report category
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Filter by automation mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Filter by display date substring (e.g. "Jan")
    #[arg(long)]
    pub date: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Trend charts arguments.
#[derive(Debug, Args)]
pub struct TrendsCommand {
    /// Resident id to scope the charts to
    #[arg(short, long)]
    pub resident: Option<String>,

    /// Time window override
    #[arg(long, value_enum)]
    pub range: Option<TimeRangeArg>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Intervention timeline arguments.
#[derive(Debug, Args)]
pub struct InterventionsCommand {
    /// Resident id to scope the timeline to
    #[arg(short, long)]
    pub resident: Option<String>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Assistant query arguments.
#[derive(Debug, Args)]
pub struct AskCommand {
    /// The question, as free text
    #[arg(required = true, trailing_var_arg = true)]
    pub question: Vec<String>,

    /// Resident id to use as conversation context
    #[arg(short, long)]
    pub resident: Option<String>,
}

/// Route resolution arguments.
#[derive(Debug, Args)]
pub struct OpenCommand {
    /// Path to resolve, e.g. "/dashboard/trends?resident=2"
    pub path: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Risk status argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// High-risk residents
    HighRisk,
    /// Residents under closer observation
    Monitor,
    /// Stable residents
    Stable,
}

impl From<StatusArg> for RiskStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::HighRisk => Self::HighRisk,
            StatusArg::Monitor => Self::Monitor,
            StatusArg::Stable => Self::Stable,
        }
    }
}

/// Device connectivity argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeviceStatusArg {
    /// Reporting normally
    Online,
    /// Not reachable
    Offline,
    /// Catching up on data
    Syncing,
}

impl From<DeviceStatusArg> for DeviceStatus {
    fn from(arg: DeviceStatusArg) -> Self {
        match arg {
            DeviceStatusArg::Online => Self::Online,
            DeviceStatusArg::Offline => Self::Offline,
            DeviceStatusArg::Syncing => Self::Syncing,
        }
    }
}

/// Device kind argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeviceTypeArg {
    /// Wearable rings
    Ring,
    /// Room sensors
    Sensor,
    /// Gateways
    Gateway,
}

impl From<DeviceTypeArg> for DeviceType {
    fn from(arg: DeviceTypeArg) -> Self {
        match arg {
            DeviceTypeArg::Ring => Self::WearableRing,
            DeviceTypeArg::Sensor => Self::RoomSensor,
            DeviceTypeArg::Gateway => Self::Gateway,
        }
    }
}

/// Battery bucket argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BatteryArg {
    /// Below 30%
    Low,
    /// 30% to 69%
    Medium,
    /// 70% and above
    High,
}

impl From<BatteryArg> for BatteryBand {
    fn from(arg: BatteryArg) -> Self {
        match arg {
            BatteryArg::Low => Self::Low,
            BatteryArg::Medium => Self::Medium,
            BatteryArg::High => Self::High,
        }
    }
}

/// Alert severity argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    /// Critical alerts
    Critical,
    /// Warnings
    Warning,
    /// Informational alerts
    Info,
}

impl From<LevelArg> for AlertLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Critical => Self::Critical,
            LevelArg::Warning => Self::Warning,
            LevelArg::Info => Self::Info,
        }
    }
}

/// Report category argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Risk summaries
    Risk,
    /// Incident records
    Incident,
    /// Compliance reports
    Compliance,
    /// Analytics reports
    Analytics,
}

impl From<KindArg> for ReportKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Risk => Self::Risk,
            KindArg::Incident => Self::Incident,
            KindArg::Compliance => Self::Compliance,
            KindArg::Analytics => Self::Analytics,
        }
    }
}

/// Report mode argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Scheduled reports
    Automated,
    /// Staff-requested reports
    OnDemand,
}

impl From<ModeArg> for ReportMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Automated => Self::Automated,
            ModeArg::OnDemand => Self::OnDemand,
        }
    }
}

/// Time window argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeRangeArg {
    /// The past seven days
    #[value(name = "7d")]
    SevenDays,
    /// The past thirty days
    #[value(name = "30d")]
    ThirtyDays,
}

impl From<TimeRangeArg> for TimeRange {
    fn from(arg: TimeRangeArg) -> Self {
        match arg {
            TimeRangeArg::SevenDays => Self::SevenDays,
            TimeRangeArg::ThirtyDays => Self::ThirtyDays,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Plain,
    /// Formatted table
    #[default]
    Table,
    /// JSON output
    Json,
}
