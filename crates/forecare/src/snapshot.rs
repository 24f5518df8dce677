//! Derived facility counts.
//!
//! The overview header and the device status strip show numbers computed
//! from the fixture collections: status bucket counts, alert totals,
//! connectivity percentages. Everything here is recomputed on demand from
//! the collections it is given; there is no caching and no stored state.

use serde::Serialize;

use crate::fixtures;
use crate::model::{Alert, AlertLevel, Device, DeviceStatus, Resident, RiskStatus};

/// Point-in-time summary numbers for the facility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilitySnapshot {
    /// Residents monitored.
    pub residents_monitored: usize,
    /// Residents in the high-risk bucket.
    pub high_risk: usize,
    /// Residents in the monitor bucket.
    pub monitor: usize,
    /// Residents in the stable bucket.
    pub stable: usize,
    /// Mean of the authored risk scores.
    pub average_risk: f64,
    /// Alerts in the feed.
    pub active_alerts: usize,
    /// Alerts not yet acknowledged.
    pub unacknowledged_alerts: usize,
    /// Critical alerts.
    pub critical_alerts: usize,
    /// Devices in the fleet.
    pub devices_total: usize,
    /// Devices currently online.
    pub devices_online: usize,
    /// Devices currently offline.
    pub devices_offline: usize,
    /// Rooms with an offline device.
    pub offline_rooms: Vec<String>,
    /// Online share of the fleet, rounded to whole percent.
    pub connectivity_percent: u8,
}

impl FacilitySnapshot {
    /// Compute a snapshot from the given collections.
    #[must_use]
    pub fn compute(residents: &[Resident], devices: &[Device], alerts: &[Alert]) -> Self {
        let count_status =
            |status: RiskStatus| residents.iter().filter(|r| r.status == status).count();

        let average_risk = if residents.is_empty() {
            0.0
        } else {
            let total: u32 = residents.iter().map(|r| u32::from(r.risk)).sum();
            f64::from(total) / residents.len() as f64
        };

        let devices_online = devices
            .iter()
            .filter(|d| d.status == DeviceStatus::Online)
            .count();
        let devices_offline = devices
            .iter()
            .filter(|d| d.status == DeviceStatus::Offline)
            .count();
        let offline_rooms = devices
            .iter()
            .filter(|d| d.status == DeviceStatus::Offline)
            .map(|d| d.room.clone())
            .collect();

        let connectivity_percent = if devices.is_empty() {
            100
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let percent = (devices_online as f64 / devices.len() as f64 * 100.0).round() as u8;
            percent
        };

        Self {
            residents_monitored: residents.len(),
            high_risk: count_status(RiskStatus::HighRisk),
            monitor: count_status(RiskStatus::Monitor),
            stable: count_status(RiskStatus::Stable),
            average_risk,
            active_alerts: alerts.len(),
            unacknowledged_alerts: alerts.iter().filter(|a| !a.acknowledged).count(),
            critical_alerts: alerts
                .iter()
                .filter(|a| a.level == AlertLevel::Critical)
                .count(),
            devices_total: devices.len(),
            devices_online,
            devices_offline,
            offline_rooms,
            connectivity_percent,
        }
    }

    /// Compute a snapshot from the built-in fixture data.
    #[must_use]
    pub fn current() -> Self {
        Self::compute(
            &fixtures::residents(),
            &fixtures::devices(),
            &fixtures::alerts(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_buckets_sum_to_roster() {
        let snapshot = FacilitySnapshot::current();
        assert_eq!(
            snapshot.high_risk + snapshot.monitor + snapshot.stable,
            snapshot.residents_monitored
        );
        assert_eq!(snapshot.high_risk, 3);
        assert_eq!(snapshot.monitor, 2);
        assert_eq!(snapshot.stable, 5);
    }

    #[test]
    fn test_alert_counts() {
        let snapshot = FacilitySnapshot::current();
        assert_eq!(snapshot.active_alerts, 7);
        assert_eq!(snapshot.unacknowledged_alerts, 3);
        assert_eq!(snapshot.critical_alerts, 2);
    }

    #[test]
    fn test_device_connectivity() {
        let snapshot = FacilitySnapshot::current();
        assert_eq!(snapshot.devices_total, 10);
        assert_eq!(snapshot.devices_online, 7);
        assert_eq!(snapshot.devices_offline, 2);
        assert_eq!(snapshot.connectivity_percent, 70);
        assert_eq!(snapshot.offline_rooms, vec!["C-02", "B-11"]);
    }

    #[test]
    fn test_average_risk() {
        let snapshot = FacilitySnapshot::current();
        assert!((snapshot.average_risk - 55.9).abs() < 1e-9);
    }

    #[test]
    fn test_empty_collections_do_not_divide_by_zero() {
        let snapshot = FacilitySnapshot::compute(&[], &[], &[]);
        assert_eq!(snapshot.residents_monitored, 0);
        assert!((snapshot.average_risk - 0.0).abs() < f64::EPSILON);
        assert_eq!(snapshot.connectivity_percent, 100);
    }

    #[test]
    fn test_snapshot_serializes_for_json_output() {
        let snapshot = FacilitySnapshot::current();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"residents_monitored\":10"));
    }
}
