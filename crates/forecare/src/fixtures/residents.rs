//! The resident roster.

use crate::model::{Resident, ResidentId, RiskStatus};

#[allow(clippy::too_many_arguments)]
fn resident(
    id: &str,
    name: &str,
    age: u8,
    room: &str,
    unit: &str,
    risk: u8,
    status: RiskStatus,
    trend: &str,
    last_check: &str,
    next_check: &str,
    assigned_to: &str,
    reason: Option<&str>,
) -> Resident {
    Resident {
        id: ResidentId::new(id),
        name: name.to_string(),
        age,
        room: room.to_string(),
        unit: unit.to_string(),
        risk,
        status,
        trend: trend.to_string(),
        last_check: last_check.to_string(),
        next_check: next_check.to_string(),
        assigned_to: assigned_to.to_string(),
        reason: reason.map(String::from),
    }
}

/// All monitored residents, ordered by descending risk as authored.
#[must_use]
pub fn residents() -> Vec<Resident> {
    vec![
        resident(
            "1",
            "Maria Schmidt",
            84,
            "A-12",
            "Unit A",
            92,
            RiskStatus::HighRisk,
            "Declining",
            "Not checked",
            "Overdue",
            "Nurse Becker",
            Some("Reduced mobility detected"),
        ),
        resident(
            "2",
            "Hans Weber",
            79,
            "B-04",
            "Unit B",
            85,
            RiskStatus::HighRisk,
            "Declining",
            "2h ago",
            "14:30",
            "Nurse Vogel",
            Some("Sleep disruption pattern"),
        ),
        resident(
            "3",
            "Ingrid Müller",
            88,
            "A-07",
            "Unit A",
            78,
            RiskStatus::HighRisk,
            "Declining",
            "Today 09:15",
            "15:15",
            "Nurse Becker",
            Some("Weight loss trend"),
        ),
        resident(
            "4",
            "Klaus Bauer",
            76,
            "C-02",
            "Unit C",
            71,
            RiskStatus::Monitor,
            "Fluctuating",
            "Today 08:30",
            "14:30",
            "Nurse Klein",
            Some("Increased fall risk"),
        ),
        resident(
            "5",
            "Elisabeth Braun",
            82,
            "B-11",
            "Unit B",
            68,
            RiskStatus::Monitor,
            "Fluctuating",
            "Yesterday",
            "10:00",
            "Nurse Vogel",
            Some("Behavioral change"),
        ),
        resident(
            "6",
            "Wolfgang Richter",
            73,
            "A-03",
            "Unit A",
            45,
            RiskStatus::Stable,
            "Stable",
            "Today 10:00",
            "16:00",
            "Nurse Becker",
            None,
        ),
        resident(
            "7",
            "Helga Fischer",
            90,
            "C-08",
            "Unit C",
            38,
            RiskStatus::Stable,
            "Improving",
            "Today 07:45",
            "13:45",
            "Nurse Klein",
            None,
        ),
        resident(
            "8",
            "Peter Hoffmann",
            81,
            "B-06",
            "Unit B",
            32,
            RiskStatus::Stable,
            "Stable",
            "Today 08:00",
            "14:00",
            "Nurse Vogel",
            None,
        ),
        resident(
            "9",
            "Ursula Koch",
            77,
            "A-15",
            "Unit A",
            28,
            RiskStatus::Stable,
            "Stable",
            "Today 09:30",
            "15:30",
            "Nurse Becker",
            None,
        ),
        resident(
            "10",
            "Friedrich Schäfer",
            86,
            "C-12",
            "Unit C",
            22,
            RiskStatus::Stable,
            "Stable",
            "Yesterday",
            "10:00",
            "Nurse Klein",
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_size() {
        assert_eq!(residents().len(), 10);
    }

    #[test]
    fn test_high_risk_residents_have_reasons() {
        for r in residents() {
            if r.status == RiskStatus::HighRisk {
                assert!(r.reason.is_some(), "{} is high risk without a reason", r.name);
            }
        }
    }

    #[test]
    fn test_risk_scores_in_range() {
        for r in residents() {
            assert!(r.risk <= 100, "{} has out-of-range risk {}", r.name, r.risk);
        }
    }

    #[test]
    fn test_roster_ordered_by_descending_risk() {
        let all = residents();
        for pair in all.windows(2) {
            assert!(pair[0].risk >= pair[1].risk);
        }
    }
}
