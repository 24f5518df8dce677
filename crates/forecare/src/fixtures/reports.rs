//! The facility report list.

use crate::model::{Report, ReportKind, ReportMode, ResidentId};

#[allow(clippy::too_many_arguments)]
fn report(
    name: &str,
    date: &str,
    kind: ReportKind,
    severity: &str,
    mode: ReportMode,
    resident: Option<&str>,
    summary: &str,
    tags: &[&str],
) -> Report {
    Report {
        name: name.to_string(),
        date: date.to_string(),
        kind,
        severity: severity.to_string(),
        mode,
        resident: resident.map(ResidentId::new),
        summary: summary.to_string(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
    }
}

/// Automated and on-demand facility reports, newest first.
#[must_use]
pub fn reports() -> Vec<Report> {
    vec![
        report(
            "Weekly Risk Summary",
            "Feb 17, 2026",
            ReportKind::Risk,
            "Routine",
            ReportMode::Automated,
            None,
            "Facility-wide risk posture for the week of Feb 10-16. Three residents \
             remain in the high-risk bucket; average stability score held at 82%.",
            &["weekly", "risk"],
        ),
        report(
            "Monthly Incident Report",
            "Feb 1, 2026",
            ReportKind::Incident,
            "Elevated",
            ReportMode::Automated,
            None,
            "Two fall incidents recorded in January, both without lasting injury. \
             Response times stayed under the four-minute target.",
            &["monthly", "incidents"],
        ),
        report(
            "Resident Stability Analysis",
            "Jan 31, 2026",
            ReportKind::Analytics,
            "Elevated",
            ReportMode::OnDemand,
            Some("1"),
            "Six-week stability breakdown for Maria Schmidt, covering mobility, \
             sleep, and weight trends.",
            &["stability", "resident"],
        ),
        report(
            "Alert Response Times",
            "Jan 28, 2026",
            ReportKind::Compliance,
            "Routine",
            ReportMode::Automated,
            None,
            "Average acknowledgement time of 3.8 minutes across all alert levels, \
             within the compliance target.",
            &["alerts", "response"],
        ),
        report(
            "Intervention Effectiveness",
            "Jan 15, 2026",
            ReportKind::Analytics,
            "Routine",
            ReportMode::OnDemand,
            None,
            "Completed interventions against observed risk deltas over the past \
             quarter.",
            &["interventions"],
        ),
        report(
            "Quarterly Compliance Audit",
            "Jan 5, 2026",
            ReportKind::Compliance,
            "Routine",
            ReportMode::Automated,
            None,
            "Data handling and retention audit for Q4. No findings.",
            &["audit", "gdpr"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_count() {
        assert_eq!(reports().len(), 6);
    }

    #[test]
    fn test_resident_scoped_report_references_roster_id() {
        let scoped: Vec<_> = reports()
            .into_iter()
            .filter(|r| r.resident.is_some())
            .collect();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].resident, Some(ResidentId::new("1")));
    }

    #[test]
    fn test_every_report_has_tags() {
        for r in reports() {
            assert!(!r.tags.is_empty(), "{} has no tags", r.name);
        }
    }
}
