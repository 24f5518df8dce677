//! The device fleet.

use crate::model::{Device, DeviceStatus, DeviceType};

#[allow(clippy::too_many_arguments)]
fn device(
    id: &str,
    resident: &str,
    room: &str,
    device_type: DeviceType,
    status: DeviceStatus,
    battery: Option<u8>,
    last_sync: &str,
    issue: Option<&str>,
) -> Device {
    Device {
        id: id.to_string(),
        resident: resident.to_string(),
        room: room.to_string(),
        device_type,
        status,
        battery,
        last_sync: last_sync.to_string(),
        issue: issue.map(String::from),
    }
}

/// All monitoring devices.
///
/// Room sensors and gateways are mains powered (`battery: None`); the
/// unit-level gateway is not assigned to a resident and carries the
/// placeholder name `Facility`.
#[must_use]
pub fn devices() -> Vec<Device> {
    vec![
        device(
            "D-001",
            "Maria Schmidt",
            "A-12",
            DeviceType::WearableRing,
            DeviceStatus::Online,
            Some(72),
            "2 min ago",
            None,
        ),
        device(
            "D-002",
            "Hans Weber",
            "B-04",
            DeviceType::WearableRing,
            DeviceStatus::Online,
            Some(85),
            "1 min ago",
            None,
        ),
        device(
            "D-003",
            "Klaus Bauer",
            "C-02",
            DeviceType::RoomSensor,
            DeviceStatus::Offline,
            None,
            "3 hours ago",
            Some("Not reachable since 06:30"),
        ),
        device(
            "D-004",
            "Ingrid Müller",
            "A-07",
            DeviceType::WearableRing,
            DeviceStatus::Online,
            Some(45),
            "4 min ago",
            None,
        ),
        device(
            "D-005",
            "Elisabeth Braun",
            "B-11",
            DeviceType::RoomSensor,
            DeviceStatus::Offline,
            None,
            "1 hour ago",
            Some("Power interruption reported"),
        ),
        device(
            "D-006",
            "Wolfgang Richter",
            "A-03",
            DeviceType::WearableRing,
            DeviceStatus::Online,
            Some(91),
            "30 sec ago",
            None,
        ),
        device(
            "D-007",
            "Helga Fischer",
            "C-08",
            DeviceType::WearableRing,
            DeviceStatus::Syncing,
            Some(18),
            "12 min ago",
            Some("Low battery"),
        ),
        device(
            "D-008",
            "Facility",
            "B-Wing",
            DeviceType::Gateway,
            DeviceStatus::Online,
            None,
            "just now",
            None,
        ),
        device(
            "D-009",
            "Peter Hoffmann",
            "B-06",
            DeviceType::RoomSensor,
            DeviceStatus::Online,
            None,
            "5 min ago",
            None,
        ),
        device(
            "D-010",
            "Ursula Koch",
            "A-15",
            DeviceType::WearableRing,
            DeviceStatus::Online,
            Some(33),
            "2 min ago",
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_size() {
        assert_eq!(devices().len(), 10);
    }

    #[test]
    fn test_device_ids_are_unique() {
        let all = devices();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate device id {}", a.id);
            }
        }
    }

    #[test]
    fn test_mains_powered_devices_have_no_battery() {
        for d in devices() {
            if matches!(d.device_type, DeviceType::RoomSensor | DeviceType::Gateway) {
                assert!(d.battery.is_none(), "{} should be mains powered", d.id);
            } else {
                assert!(d.battery.is_some(), "{} should report battery", d.id);
            }
        }
    }

    #[test]
    fn test_offline_devices_carry_an_issue() {
        for d in devices() {
            if d.status == DeviceStatus::Offline {
                assert!(d.issue.is_some(), "{} is offline without an issue", d.id);
            }
        }
    }
}
