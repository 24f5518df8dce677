//! The alert feed.

use crate::model::{Alert, AlertLevel};

#[allow(clippy::too_many_arguments)]
fn alert(
    id: u32,
    category: &str,
    resident: &str,
    room: &str,
    time: &str,
    level: AlertLevel,
    acknowledged: bool,
    explanation: Option<&str>,
    action: Option<&str>,
) -> Alert {
    Alert {
        id,
        category: category.to_string(),
        resident: resident.to_string(),
        room: room.to_string(),
        time: time.to_string(),
        level,
        acknowledged,
        explanation: explanation.map(String::from),
        action: action.map(String::from),
    }
}

/// Today's alert feed, newest first.
#[must_use]
pub fn alerts() -> Vec<Alert> {
    vec![
        alert(
            1,
            "Fall risk increase",
            "Maria Schmidt",
            "A-12",
            "08:32",
            AlertLevel::Critical,
            false,
            Some(
                "Fall risk score spiked due to reduced mobility (62% below baseline) \
                 combined with gait instability. Multiple evidence signals crossed \
                 their threshold simultaneously.",
            ),
            Some("Check within 1 hour"),
        ),
        alert(
            2,
            "Sudden change detected",
            "Hans Weber",
            "B-04",
            "07:45",
            AlertLevel::Critical,
            false,
            Some("Resting heart rate elevated +18 bpm against the overnight baseline."),
            Some("Review vitals"),
        ),
        alert(
            3,
            "Reduced mobility",
            "Ingrid Müller",
            "A-07",
            "07:10",
            AlertLevel::Warning,
            false,
            None,
            Some("Nutritional assessment"),
        ),
        alert(
            4,
            "Device offline",
            "Klaus Bauer",
            "C-02",
            "06:30",
            AlertLevel::Info,
            true,
            Some("Room sensor C-02 stopped reporting; last sync 3 hours ago."),
            None,
        ),
        alert(
            5,
            "Sleep disruption",
            "Elisabeth Braun",
            "B-11",
            "06:15",
            AlertLevel::Warning,
            true,
            Some("Irregular sleep-wake cycle detected across the past three nights."),
            None,
        ),
        alert(
            6,
            "Missed monitoring signal",
            "Wolfgang Richter",
            "A-03",
            "05:55",
            AlertLevel::Info,
            true,
            None,
            None,
        ),
        alert(
            7,
            "Behavioral change",
            "Helga Fischer",
            "C-08",
            "05:20",
            AlertLevel::Warning,
            true,
            None,
            Some("Observation"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_size() {
        assert_eq!(alerts().len(), 7);
    }

    #[test]
    fn test_three_unacknowledged() {
        let unacked = alerts().iter().filter(|a| !a.acknowledged).count();
        assert_eq!(unacked, 3);
    }

    #[test]
    fn test_critical_alerts_have_explanation_and_action() {
        for a in alerts() {
            if a.level == AlertLevel::Critical {
                assert!(a.explanation.is_some(), "alert {} lacks explanation", a.id);
                assert!(a.action.is_some(), "alert {} lacks action", a.id);
            }
        }
    }

    #[test]
    fn test_alert_ids_are_unique() {
        let all = alerts();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
