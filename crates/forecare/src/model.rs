//! Core entity types for the care dashboard.
//!
//! Every entity is a flat record authored once as fixture data and never
//! mutated afterwards. Status and severity fields are stored redundantly
//! alongside numeric scores and are not recomputed or cross-validated;
//! that looseness is part of the data set's contract.

use serde::{Deserialize, Serialize};

/// Typed identifier for a resident record.
///
/// Lookups by id return `Option`; callers supply the fallback. Nothing
/// guarantees that an id carried in from elsewhere (a device row, a query
/// parameter) refers to an existing resident.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResidentId(String);

impl ResidentId {
    /// Create a resident id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResidentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResidentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Risk status bucket shown next to a resident.
///
/// Stored independently of the numeric risk score; fixture entries author
/// both fields by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    /// Needs clinical attention now.
    HighRisk,
    /// Under closer observation.
    Monitor,
    /// Within expected range.
    Stable,
}

impl RiskStatus {
    /// Display bucket for a raw risk score (used for table coloring only,
    /// never written back to a record).
    #[must_use]
    pub fn band(risk: u8) -> Self {
        if risk >= 80 {
            Self::HighRisk
        } else if risk >= 60 {
            Self::Monitor
        } else {
            Self::Stable
        }
    }
}

impl std::fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HighRisk => write!(f, "High Risk"),
            Self::Monitor => write!(f, "Monitor"),
            Self::Stable => write!(f, "Stable"),
        }
    }
}

/// A simulated care-facility occupant record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resident {
    /// Unique resident id.
    pub id: ResidentId,
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: u8,
    /// Room label, e.g. `A-12`.
    pub room: String,
    /// Unit label, e.g. `Unit A`.
    pub unit: String,
    /// Static risk score in `0..=100`; not computed by anything.
    pub risk: u8,
    /// Authored status bucket.
    pub status: RiskStatus,
    /// Free-text trend label, e.g. `Declining`.
    pub trend: String,
    /// Display string for the last check, not a real timestamp.
    pub last_check: String,
    /// Display string for the next scheduled check.
    pub next_check: String,
    /// Staff member responsible for this resident.
    pub assigned_to: String,
    /// Why this resident is flagged, if flagged at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Kind of monitoring hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    /// Wearable ring worn by a resident.
    WearableRing,
    /// Fixed ambient sensor installed in a room.
    RoomSensor,
    /// Network gateway aggregating sensor traffic.
    Gateway,
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WearableRing => write!(f, "Wearable Ring"),
            Self::RoomSensor => write!(f, "Room Sensor"),
            Self::Gateway => write!(f, "Gateway"),
        }
    }
}

/// Connectivity state of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    /// Reporting normally.
    Online,
    /// Not reachable.
    Offline,
    /// Connected but still catching up on data.
    Syncing,
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "Online"),
            Self::Offline => write!(f, "Offline"),
            Self::Syncing => write!(f, "Syncing"),
        }
    }
}

/// Battery charge bucket used by the device list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryBand {
    /// Below 30%.
    Low,
    /// 30% to 69%.
    Medium,
    /// 70% and above.
    High,
}

impl BatteryBand {
    /// Bucket a battery percentage.
    #[must_use]
    pub fn of(percent: u8) -> Self {
        if percent < 30 {
            Self::Low
        } else if percent < 70 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl std::fmt::Display for BatteryBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// A sensor or wearable in the monitoring fleet.
///
/// Devices reference their resident by display name rather than by id; the
/// original data set carries that looseness and it is preserved here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Device id, e.g. `D-001`.
    pub id: String,
    /// Name of the resident this device is assigned to.
    pub resident: String,
    /// Room where the device lives.
    pub room: String,
    /// Hardware kind.
    pub device_type: DeviceType,
    /// Connectivity state.
    pub status: DeviceStatus,
    /// Battery percentage; `None` for mains-powered hardware.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery: Option<u8>,
    /// Display string for the last sync, not a real timestamp.
    pub last_sync: String,
    /// Open issue on this device, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

impl Device {
    /// Battery bucket for this device, if it has a battery at all.
    #[must_use]
    pub fn battery_band(&self) -> Option<BatteryBand> {
        self.battery.map(BatteryBand::of)
    }
}

/// Severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// Requires immediate action.
    Critical,
    /// Needs review soon.
    Warning,
    /// Informational only.
    Info,
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "Critical"),
            Self::Warning => write!(f, "Warning"),
            Self::Info => write!(f, "Info"),
        }
    }
}

/// A single alert feed entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Alert id.
    pub id: u32,
    /// Category text, e.g. `Fall risk increase`.
    pub category: String,
    /// Resident display name.
    pub resident: String,
    /// Room label.
    pub room: String,
    /// Display time, e.g. `08:32`.
    pub time: String,
    /// Severity level.
    pub level: AlertLevel,
    /// Whether staff have acknowledged the alert.
    pub acknowledged: bool,
    /// Canned explanation of why the alert fired.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Canned recommended action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Category of a facility report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Risk summaries.
    Risk,
    /// Incident records.
    Incident,
    /// Regulatory compliance.
    Compliance,
    /// Usage and trend analytics.
    Analytics,
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Risk => write!(f, "Risk"),
            Self::Incident => write!(f, "Incident"),
            Self::Compliance => write!(f, "Compliance"),
            Self::Analytics => write!(f, "Analytics"),
        }
    }
}

/// How a report is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Generated on a schedule.
    Automated,
    /// Requested by a staff member.
    OnDemand,
}

impl std::fmt::Display for ReportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Automated => write!(f, "Automated"),
            Self::OnDemand => write!(f, "On-demand"),
        }
    }
}

/// A generated facility report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report title.
    pub name: String,
    /// Display date, e.g. `Feb 17, 2026`.
    pub date: String,
    /// Report category.
    pub kind: ReportKind,
    /// Severity label, e.g. `Routine` or `Elevated`.
    pub severity: String,
    /// Automation mode.
    pub mode: ReportMode,
    /// Resident this report is scoped to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resident: Option<ResidentId>,
    /// One-paragraph summary.
    pub summary: String,
    /// Free-form tags.
    pub tags: Vec<String>,
}

/// Completion state of an intervention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionStatus {
    /// Done.
    Completed,
    /// Booked for later.
    Scheduled,
}

impl std::fmt::Display for InterventionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "Completed"),
            Self::Scheduled => write!(f, "Scheduled"),
        }
    }
}

/// One entry in the intervention timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    /// Display time, e.g. `09:15`.
    pub time: String,
    /// Display day, e.g. `Today` or `Yesterday`.
    pub date: String,
    /// Short action label.
    pub action: String,
    /// Longer detail line.
    pub detail: String,
    /// Completion state.
    pub status: InterventionStatus,
    /// Resident this entry belongs to, if it is resident-scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resident: Option<ResidentId>,
}

/// A single point in a trend chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Axis label, e.g. `Mon` or `W3`.
    pub label: String,
    /// Plotted value.
    pub value: f64,
}

impl TrendPoint {
    /// Convenience constructor for fixture data.
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A named chart series with its unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Series title, e.g. `Mobility Trend`.
    pub name: String,
    /// Unit label, e.g. `steps` or `hours`.
    pub unit: String,
    /// Ordered points.
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// Build a series from `(label, value)` pairs.
    #[must_use]
    pub fn from_pairs(
        name: impl Into<String>,
        unit: impl Into<String>,
        pairs: &[(&str, f64)],
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            points: pairs
                .iter()
                .map(|(label, value)| TrendPoint::new(*label, *value))
                .collect(),
        }
    }
}
