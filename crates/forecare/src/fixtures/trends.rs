//! Trend chart series and the intervention timeline.

use crate::model::{Intervention, InterventionStatus, ResidentId, TrendSeries};

/// Facility-wide chart series shown on the trends view.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityTrends {
    /// Average activity per resident, by week.
    pub activity: TrendSeries,
    /// Average stability score, by week.
    pub stability: TrendSeries,
    /// Alert counts, by weekday.
    pub alert_frequency: TrendSeries,
    /// Behavioral changes detected, by week.
    pub behavioral_changes: TrendSeries,
}

/// Per-resident chart series shown when a resident context is active.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidentTrends {
    /// The resident these series belong to; `None` for the fallback set.
    pub resident: Option<ResidentId>,
    /// Daily step counts.
    pub mobility: TrendSeries,
    /// Nightly sleep hours.
    pub sleep: TrendSeries,
}

/// Facility-wide series over the past six weeks.
#[must_use]
pub fn facility_trends() -> FacilityTrends {
    FacilityTrends {
        activity: TrendSeries::from_pairs(
            "Average Activity Over Time",
            "steps",
            &[
                ("W1", 3100.0),
                ("W2", 2900.0),
                ("W3", 2700.0),
                ("W4", 2500.0),
                ("W5", 2600.0),
                ("W6", 2400.0),
            ],
        ),
        stability: TrendSeries::from_pairs(
            "Stability Score Trend",
            "score",
            &[
                ("W1", 88.0),
                ("W2", 86.0),
                ("W3", 84.0),
                ("W4", 82.0),
                ("W5", 83.0),
                ("W6", 82.0),
            ],
        ),
        alert_frequency: TrendSeries::from_pairs(
            "Alert Frequency",
            "alerts",
            &[
                ("Mon", 8.0),
                ("Tue", 12.0),
                ("Wed", 6.0),
                ("Thu", 14.0),
                ("Fri", 9.0),
                ("Sat", 5.0),
                ("Sun", 4.0),
            ],
        ),
        behavioral_changes: TrendSeries::from_pairs(
            "Behavioral Changes Detected",
            "changes",
            &[
                ("W1", 3.0),
                ("W2", 5.0),
                ("W3", 4.0),
                ("W4", 7.0),
                ("W5", 6.0),
                ("W6", 8.0),
            ],
        ),
    }
}

/// Per-resident series, for the residents that have authored data.
///
/// Only a couple of residents carry their own series; everyone else falls
/// back to [`default_trends`].
#[must_use]
pub fn resident_trends(id: &ResidentId) -> Option<ResidentTrends> {
    match id.as_str() {
        "1" => Some(ResidentTrends {
            resident: Some(id.clone()),
            mobility: TrendSeries::from_pairs(
                "Mobility Trend",
                "steps",
                &[
                    ("Mon", 3200.0),
                    ("Tue", 2800.0),
                    ("Wed", 2100.0),
                    ("Thu", 1900.0),
                    ("Fri", 1600.0),
                    ("Sat", 1400.0),
                    ("Sun", 1200.0),
                ],
            ),
            sleep: TrendSeries::from_pairs(
                "Sleep Trend",
                "hours",
                &[
                    ("Mon", 7.2),
                    ("Tue", 6.8),
                    ("Wed", 5.5),
                    ("Thu", 4.9),
                    ("Fri", 5.1),
                    ("Sat", 4.3),
                    ("Sun", 4.0),
                ],
            ),
        }),
        "2" => Some(ResidentTrends {
            resident: Some(id.clone()),
            mobility: TrendSeries::from_pairs(
                "Mobility Trend",
                "steps",
                &[
                    ("Mon", 2600.0),
                    ("Tue", 2500.0),
                    ("Wed", 2550.0),
                    ("Thu", 2400.0),
                    ("Fri", 2450.0),
                    ("Sat", 2300.0),
                    ("Sun", 2350.0),
                ],
            ),
            sleep: TrendSeries::from_pairs(
                "Sleep Trend",
                "hours",
                &[
                    ("Mon", 5.8),
                    ("Tue", 4.9),
                    ("Wed", 4.2),
                    ("Thu", 3.6),
                    ("Fri", 3.4),
                    ("Sat", 3.2),
                    ("Sun", 3.1),
                ],
            ),
        }),
        _ => None,
    }
}

/// The fallback series rendered when a resident has no authored data.
#[must_use]
pub fn default_trends() -> ResidentTrends {
    ResidentTrends {
        resident: None,
        mobility: TrendSeries::from_pairs(
            "Mobility Trend (facility average)",
            "steps",
            &[
                ("Mon", 2700.0),
                ("Tue", 2650.0),
                ("Wed", 2600.0),
                ("Thu", 2600.0),
                ("Fri", 2550.0),
                ("Sat", 2500.0),
                ("Sun", 2500.0),
            ],
        ),
        sleep: TrendSeries::from_pairs(
            "Sleep Trend (facility average)",
            "hours",
            &[
                ("Mon", 6.9),
                ("Tue", 6.8),
                ("Wed", 6.7),
                ("Thu", 6.7),
                ("Fri", 6.6),
                ("Sat", 6.8),
                ("Sun", 6.7),
            ],
        ),
    }
}

fn entry(
    time: &str,
    date: &str,
    action: &str,
    detail: &str,
    status: InterventionStatus,
    resident: Option<&str>,
) -> Intervention {
    Intervention {
        time: time.to_string(),
        date: date.to_string(),
        action: action.to_string(),
        detail: detail.to_string(),
        status,
        resident: resident.map(ResidentId::new),
    }
}

/// The intervention timeline, most recent day first.
#[must_use]
pub fn interventions() -> Vec<Intervention> {
    vec![
        entry(
            "09:15",
            "Today",
            "Observation completed",
            "Maria Schmidt — mobility assessment",
            InterventionStatus::Completed,
            Some("1"),
        ),
        entry(
            "08:30",
            "Today",
            "Nurse visit",
            "Hans Weber — vitals check and medication review",
            InterventionStatus::Completed,
            Some("2"),
        ),
        entry(
            "14:00",
            "Today",
            "Follow-up scheduled",
            "Ingrid Müller — nutritional assessment",
            InterventionStatus::Scheduled,
            Some("3"),
        ),
        entry(
            "16:30",
            "Today",
            "Condition stable",
            "Klaus Bauer — fall risk reassessed, downgraded to monitor",
            InterventionStatus::Completed,
            Some("4"),
        ),
        entry(
            "11:00",
            "Yesterday",
            "Clinical review",
            "Maria Schmidt — care plan updated by Dr. Krause",
            InterventionStatus::Completed,
            Some("1"),
        ),
        entry(
            "09:45",
            "Yesterday",
            "Observation completed",
            "Elisabeth Braun — behavioral observation",
            InterventionStatus::Completed,
            Some("5"),
        ),
        entry(
            "15:00",
            "Yesterday",
            "Follow-up scheduled",
            "Hans Weber — sleep monitoring initiated",
            InterventionStatus::Scheduled,
            Some("2"),
        ),
    ]
}
