//! List filtering engine for the dashboard views.
//!
//! Every list view (residents, devices, alerts, reports) narrows a static
//! collection with the same mechanism: a free-text search combined with a
//! handful of categorical criteria, ANDed together. This module holds that
//! mechanism once, as a criteria struct per entity with a pure
//! `matches` predicate, instead of re-implementing it per view.
//!
//! Filtering never mutates the source collection, preserves input order,
//! and treats absent optional fields (a sensor without a battery, a
//! resident without a flag reason) as a non-match for criteria that
//! reference them rather than an error.

use crate::model::{
    Alert, AlertLevel, BatteryBand, Device, DeviceStatus, DeviceType, Report, ReportKind,
    ReportMode, Resident, RiskStatus,
};

/// A pure filter over one entity type.
pub trait Predicate<T> {
    /// Whether the item satisfies every active criterion.
    fn matches(&self, item: &T) -> bool;
}

/// Apply criteria to a collection, borrowing the survivors in input order.
pub fn apply<'a, T, P>(items: &'a [T], criteria: &P) -> Vec<&'a T>
where
    P: Predicate<T>,
{
    items.iter().filter(|item| criteria.matches(item)).collect()
}

/// Case-insensitive substring containment.
///
/// An empty needle matches everything; this is what turns a cleared search
/// box back into "no text filter".
fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when any of the given fields contains the needle.
fn any_field_ci(fields: &[&str], needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|field| contains_ci(field, needle))
}

/// Criteria for the residents list.
///
/// `None` on a categorical field is the "all" sentinel: that criterion
/// contributes no exclusions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResidentCriteria {
    /// Free-text search over name, room, and id.
    pub search: String,
    /// Status bucket, or all.
    pub status: Option<RiskStatus>,
    /// Unit label, or all.
    pub unit: Option<String>,
}

impl Predicate<Resident> for ResidentCriteria {
    fn matches(&self, item: &Resident) -> bool {
        any_field_ci(&[&item.name, &item.room, item.id.as_str()], &self.search)
            && self.status.map_or(true, |status| item.status == status)
            && self
                .unit
                .as_deref()
                .map_or(true, |unit| item.unit.eq_ignore_ascii_case(unit))
    }
}

/// Criteria for the device list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceCriteria {
    /// Free-text search over resident name, device id, and room.
    pub search: String,
    /// Connectivity state, or all.
    pub status: Option<DeviceStatus>,
    /// Hardware kind, or all.
    pub device_type: Option<DeviceType>,
    /// Battery bucket, or all. Devices without a battery never match an
    /// active battery criterion.
    pub battery: Option<BatteryBand>,
}

impl Predicate<Device> for DeviceCriteria {
    fn matches(&self, item: &Device) -> bool {
        any_field_ci(&[&item.resident, &item.id, &item.room], &self.search)
            && self.status.map_or(true, |status| item.status == status)
            && self.device_type.map_or(true, |dt| item.device_type == dt)
            && self
                .battery
                .map_or(true, |band| item.battery_band() == Some(band))
    }
}

/// Criteria for the alert feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertCriteria {
    /// Free-text search over category, resident name, and room.
    pub search: String,
    /// Severity level, or all.
    pub level: Option<AlertLevel>,
    /// Acknowledgement state, or all.
    pub acknowledged: Option<bool>,
}

impl Predicate<Alert> for AlertCriteria {
    fn matches(&self, item: &Alert) -> bool {
        any_field_ci(&[&item.category, &item.resident, &item.room], &self.search)
            && self.level.map_or(true, |level| item.level == level)
            && self
                .acknowledged
                .map_or(true, |acked| item.acknowledged == acked)
    }
}

/// Criteria for the report list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportCriteria {
    /// Free-text search over name, summary, and tags.
    pub search: String,
    /// Report category, or all.
    pub kind: Option<ReportKind>,
    /// Automation mode, or all.
    pub mode: Option<ReportMode>,
    /// Substring match against the display date (e.g. `Jan`), or all.
    /// Dates are display strings, so this is containment, not a range.
    pub date: Option<String>,
}

impl Predicate<Report> for ReportCriteria {
    fn matches(&self, item: &Report) -> bool {
        let text_match = if self.search.is_empty() {
            true
        } else {
            contains_ci(&item.name, &self.search)
                || contains_ci(&item.summary, &self.search)
                || item.tags.iter().any(|tag| contains_ci(tag, &self.search))
        };

        text_match
            && self.kind.map_or(true, |kind| item.kind == kind)
            && self.mode.map_or(true, |mode| item.mode == mode)
            && self
                .date
                .as_deref()
                .map_or(true, |date| contains_ci(&item.date, date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_default_criteria_keep_everything() {
        let residents = fixtures::residents();
        let filtered = apply(&residents, &ResidentCriteria::default());
        assert_eq!(filtered.len(), residents.len());
    }

    #[test]
    fn test_result_is_subset_in_original_order() {
        let residents = fixtures::residents();
        let criteria = ResidentCriteria {
            status: Some(RiskStatus::Stable),
            ..Default::default()
        };
        let filtered = apply(&residents, &criteria);

        assert!(!filtered.is_empty());
        assert!(filtered.len() < residents.len());
        // Survivors appear in the same relative order as the source.
        let mut last_index = 0;
        for item in &filtered {
            let index = residents.iter().position(|r| r.id == item.id).unwrap();
            assert!(index >= last_index);
            last_index = index;
        }
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let residents = fixtures::residents();
        let criteria = ResidentCriteria {
            search: "schmi".to_string(),
            ..Default::default()
        };
        let filtered = apply(&residents, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Maria Schmidt");
    }

    #[test]
    fn test_search_matches_room_and_id_fields() {
        let residents = fixtures::residents();

        let by_room = ResidentCriteria {
            search: "a-12".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&residents, &by_room).len(), 1);

        let by_id = ResidentCriteria {
            search: "10".to_string(),
            ..Default::default()
        };
        assert!(apply(&residents, &by_id)
            .iter()
            .any(|r| r.name == "Friedrich Schäfer"));
    }

    #[test]
    fn test_empty_search_equals_no_text_filter() {
        let residents = fixtures::residents();
        let with_empty = ResidentCriteria {
            search: String::new(),
            status: Some(RiskStatus::Monitor),
            ..Default::default()
        };
        let without = ResidentCriteria {
            status: Some(RiskStatus::Monitor),
            ..Default::default()
        };
        assert_eq!(apply(&residents, &with_empty), apply(&residents, &without));
    }

    #[test]
    fn test_all_sentinel_contributes_no_exclusions() {
        let devices = fixtures::devices();
        let all_sentinel = DeviceCriteria {
            status: None,
            device_type: None,
            battery: None,
            ..Default::default()
        };
        assert_eq!(apply(&devices, &all_sentinel).len(), devices.len());
    }

    #[test]
    fn test_combined_criteria_equal_intersection() {
        let residents = fixtures::residents();

        let by_status = ResidentCriteria {
            status: Some(RiskStatus::HighRisk),
            ..Default::default()
        };
        let by_unit = ResidentCriteria {
            unit: Some("Unit A".to_string()),
            ..Default::default()
        };
        let combined = ResidentCriteria {
            status: Some(RiskStatus::HighRisk),
            unit: Some("Unit A".to_string()),
            ..Default::default()
        };

        let status_ids: Vec<_> = apply(&residents, &by_status)
            .iter()
            .map(|r| r.id.clone())
            .collect();
        let unit_ids: Vec<_> = apply(&residents, &by_unit)
            .iter()
            .map(|r| r.id.clone())
            .collect();
        let combined_ids: Vec<_> = apply(&residents, &combined)
            .iter()
            .map(|r| r.id.clone())
            .collect();

        let intersection: Vec<_> = status_ids
            .iter()
            .filter(|id| unit_ids.contains(id))
            .cloned()
            .collect();
        assert_eq!(combined_ids, intersection);
    }

    #[test]
    fn test_missing_battery_excluded_safely_from_battery_criterion() {
        let devices = fixtures::devices();
        let criteria = DeviceCriteria {
            battery: Some(BatteryBand::Low),
            ..Default::default()
        };
        let filtered = apply(&devices, &criteria);
        // Only battery-powered devices below 30% survive; mains-powered
        // sensors are excluded without panicking.
        assert!(filtered.iter().all(|d| d.battery.is_some()));
        assert!(filtered.iter().all(|d| d.battery.unwrap() < 30));
    }

    #[test]
    fn test_device_type_filter_exact_match() {
        let devices = fixtures::devices();
        let criteria = DeviceCriteria {
            device_type: Some(DeviceType::Gateway),
            ..Default::default()
        };
        let filtered = apply(&devices, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "D-008");
    }

    #[test]
    fn test_alert_level_and_acknowledged_filters() {
        let alerts = fixtures::alerts();

        let critical = AlertCriteria {
            level: Some(AlertLevel::Critical),
            ..Default::default()
        };
        assert_eq!(apply(&alerts, &critical).len(), 2);

        let unacked = AlertCriteria {
            acknowledged: Some(false),
            ..Default::default()
        };
        assert_eq!(apply(&alerts, &unacked).len(), 3);
    }

    #[test]
    fn test_report_search_covers_tags_and_summary() {
        let reports = fixtures::reports();

        let by_tag = ReportCriteria {
            search: "gdpr".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&reports, &by_tag).len(), 1);

        let by_summary = ReportCriteria {
            search: "maria schmidt".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&reports, &by_summary).len(), 1);
    }

    #[test]
    fn test_report_date_substring_filter() {
        let reports = fixtures::reports();
        let criteria = ReportCriteria {
            date: Some("Jan".to_string()),
            ..Default::default()
        };
        let filtered = apply(&reports, &criteria);
        assert_eq!(filtered.len(), 4);
        assert!(filtered.iter().all(|r| r.date.contains("Jan")));
    }

    #[test]
    fn test_report_kind_and_mode_combined() {
        let reports = fixtures::reports();
        let criteria = ReportCriteria {
            kind: Some(ReportKind::Analytics),
            mode: Some(ReportMode::OnDemand),
            ..Default::default()
        };
        let filtered = apply(&reports, &criteria);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_no_match_returns_empty_not_error() {
        let residents = fixtures::residents();
        let criteria = ResidentCriteria {
            search: "zzz-no-such-resident".to_string(),
            ..Default::default()
        };
        assert!(apply(&residents, &criteria).is_empty());
    }

    #[test]
    fn test_filtering_does_not_mutate_source() {
        let residents = fixtures::residents();
        let before = residents.clone();
        let _ = apply(
            &residents,
            &ResidentCriteria {
                search: "weber".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(residents, before);
    }
}
