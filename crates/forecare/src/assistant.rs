//! Canned decision-support assistant.
//!
//! There is no model inference anywhere in here. The assistant scans the
//! input for an ordered list of keyword groups (case-insensitive substring
//! match) and returns the first matching canned response; the ordering is
//! load-bearing, since an input like "explain the sleep alert" could match
//! several groups. A simulated typing delay makes the replies feel
//! asynchronous; a reply abandoned mid-delay is simply dropped.

use std::time::Duration;

use tracing::trace;

/// One keyword group with its canned reply.
#[derive(Debug, Clone)]
pub struct ResponseGroup {
    /// Name of the group for identification.
    pub name: &'static str,
    /// Keywords that trigger the group.
    pub keywords: &'static [&'static str],
    /// The canned reply text.
    pub response: &'static str,
}

impl ResponseGroup {
    /// Whether the input mentions any of this group's keywords.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        let lower = input.to_lowercase();
        self.keywords.iter().any(|keyword| lower.contains(keyword))
    }
}

/// The reply returned when no keyword group matches.
pub const DEFAULT_RESPONSE: &str = "I can help you understand resident trends, alert \
     explanations, anomaly summaries, and more. Try asking about a specific resident or alert.";

/// The built-in keyword groups, in priority order. First match wins.
#[must_use]
pub fn builtin_responses() -> Vec<ResponseGroup> {
    vec![
        ResponseGroup {
            name: "maria",
            keywords: &["maria", "schmidt"],
            response: "Maria Schmidt (Room A-12) shows a continued decline pattern over the \
                 past 7 days. Key concerns:\n\n\
                 • Mobility dropped 62% below her personal baseline\n\
                 • Sleep averaging only 4.0 hours (baseline: 7h)\n\
                 • Resting heart rate elevated +18 bpm\n\
                 • Weight loss of 1.2 kg over 7 days\n\n\
                 Recommendation: Prioritize clinical review within 24 hours. Consider \
                 adjusting her care plan to include increased safety checks and \
                 physiotherapy assessment.",
        },
        ResponseGroup {
            name: "sleep",
            keywords: &["sleep", "rest"],
            response: "Across the facility, 8 residents show sleep disruption patterns this \
                 week. The most affected:\n\n\
                 1. Hans Weber — 4+ wake events nightly, averaging 3.1h total sleep\n\
                 2. Maria Schmidt — averaging 4.0h, declining from 7h baseline\n\
                 3. Elisabeth Braun — irregular sleep-wake cycle detected\n\n\
                 Common contributing factors include medication timing, ambient noise \
                 levels during night shift, and reduced daytime activity. Consider \
                 reviewing sleep hygiene protocols.",
        },
        ResponseGroup {
            name: "alert",
            keywords: &["alert", "explain"],
            response: "The most recent critical alert was for Maria Schmidt at 08:32 — her \
                 fall risk score spiked due to a combination of reduced mobility (62% below \
                 baseline) and gait instability (score 3.1/10). This alert was generated \
                 because multiple evidence signals crossed their threshold simultaneously, \
                 suggesting a compound risk pattern rather than an isolated event.",
        },
        ResponseGroup {
            name: "fall",
            keywords: &["fall", "risk"],
            response: "Current fall risk summary:\n\n\
                 • 3 residents at high fall risk (score >70)\n\
                 • Maria Schmidt: highest risk at 92 — reduced mobility + gait instability\n\
                 • Klaus Bauer: risk at 71 — gait variability increased 40%\n\
                 • Overall facility fall risk has increased 12% this week\n\n\
                 Primary drivers: seasonal activity reduction and recent medication changes \
                 in 2 residents.",
        },
        ResponseGroup {
            name: "handover",
            keywords: &["handover", "shift", "summary"],
            response: "Shift handover summary:\n\n\
                 Priority: Maria Schmidt — vitals check overdue by 45 min, mobility declining\n\
                 Monitor: Hans Weber — 3 overnight wake events, review sleep data\n\
                 Monitor: Ingrid Müller — appetite reduced, weigh-in due today\n\n\
                 Stable overnight: 121 of 124 residents. 3 devices need attention \
                 (offline/low battery).\n\n\
                 All critical alerts were acknowledged. Average response time: 3.8 minutes.",
        },
    ]
}

/// Suggested starter questions shown before the first exchange.
#[must_use]
pub fn quick_queries() -> &'static [&'static str] {
    &[
        "Summarize overnight shift",
        "Who needs attention today?",
        "Explain latest alert",
        "Fall risk summary",
    ]
}

/// The canned decision-support assistant.
#[derive(Debug)]
pub struct Assistant {
    groups: Vec<ResponseGroup>,
    typing_delay: Duration,
    context: Option<String>,
}

impl Assistant {
    /// Create an assistant with the built-in response groups.
    #[must_use]
    pub fn new(typing_delay: Duration) -> Self {
        Self {
            groups: builtin_responses(),
            typing_delay,
            context: None,
        }
    }

    /// Scope the assistant to a resident; the name is appended to every
    /// query before matching and changes the greeting.
    #[must_use]
    pub fn with_context(mut self, resident_name: impl Into<String>) -> Self {
        self.context = Some(resident_name.into());
        self
    }

    /// The opening message for a new conversation.
    #[must_use]
    pub fn greeting(&self) -> String {
        match &self.context {
            Some(name) => {
                format!("I'm ready to help with {name}'s data. What would you like to know?")
            }
            None => "Hello! I'm ForeCare AI. Ask me about resident trends, alerts, \
                 anomalies, or request a summary."
                .to_string(),
        }
    }

    /// Pick the reply for an input: first matching keyword group wins,
    /// otherwise the default response.
    #[must_use]
    pub fn respond(&self, input: &str) -> &'static str {
        let query = match &self.context {
            Some(name) => format!("{input} {name}"),
            None => input.to_string(),
        };

        for group in &self.groups {
            if group.matches(&query) {
                trace!(group = group.name, "canned response matched");
                return group.response;
            }
        }
        DEFAULT_RESPONSE
    }

    /// Reply after the simulated typing delay.
    ///
    /// Dropping the future mid-delay discards the pending reply; there is
    /// nothing to clean up.
    pub async fn reply(&self, input: &str) -> &'static str {
        tokio::time::sleep(self.typing_delay).await;
        self.respond(input)
    }

    /// The configured typing delay.
    #[must_use]
    pub fn typing_delay(&self) -> Duration {
        self.typing_delay
    }
}

/// One linked line in the daily briefing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BriefingItem {
    /// Narrative text.
    pub text: &'static str,
    /// Dashboard route the line links to.
    pub link: &'static str,
}

/// A category block of the daily briefing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BriefingGroup {
    /// Category label, e.g. `Rising Risk`.
    pub category: &'static str,
    /// Lines in this category.
    pub items: Vec<BriefingItem>,
}

/// Overnight counters shown at the top of the briefing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvernightSummary {
    /// Residents flagged overnight.
    pub flagged: u32,
    /// Residents that transitioned back to stable.
    pub improved: u32,
    /// Alerts resolved overnight.
    pub alerts_resolved: u32,
    /// Average acknowledgement time.
    pub avg_response: &'static str,
}

/// The AI daily briefing shown on the overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBriefing {
    /// Overnight counters.
    pub overnight: OvernightSummary,
    /// Category blocks.
    pub groups: Vec<BriefingGroup>,
    /// Closing predictive note.
    pub predictive_note: &'static str,
}

/// The canned daily briefing.
#[must_use]
pub fn daily_briefing() -> DailyBriefing {
    DailyBriefing {
        overnight: OvernightSummary {
            flagged: 3,
            improved: 2,
            alerts_resolved: 5,
            avg_response: "3.8 min",
        },
        groups: vec![
            BriefingGroup {
                category: "Rising Risk",
                items: vec![
                    BriefingItem {
                        text: "Maria Schmidt's mobility declined 60% below baseline — risk \
                               score now 92",
                        link: "/dashboard/residents/1",
                    },
                    BriefingItem {
                        text: "Hans Weber shows 4+ nightly wake events — sleep disruption \
                               worsening",
                        link: "/dashboard/residents/2",
                    },
                ],
            },
            BriefingGroup {
                category: "New Anomalies",
                items: vec![
                    BriefingItem {
                        text: "Ingrid Müller — 1.2 kg weight loss over 7 days, appetite \
                               reduced",
                        link: "/dashboard/residents/3",
                    },
                    BriefingItem {
                        text: "Elisabeth Braun — behavioral change detected, withdrawn from \
                               group activities",
                        link: "/dashboard/residents/5",
                    },
                ],
            },
            BriefingGroup {
                category: "Monitoring Gaps",
                items: vec![
                    BriefingItem {
                        text: "3 devices offline — Room C-02, B-11, A-03 sensors not syncing",
                        link: "/dashboard/devices",
                    },
                    BriefingItem {
                        text: "Klaus Bauer's wearable last synced 6 hours ago",
                        link: "/dashboard/residents/4",
                    },
                ],
            },
        ],
        predictive_note: "Based on current patterns, Maria Schmidt and Hans Weber may \
             require care plan adjustments within the next 48 hours. Early clinical review \
             recommended.",
    }
}

/// Canned per-resident insight paragraph for the profile view, if one was
/// authored for this resident id.
#[must_use]
pub fn resident_insight(resident_id: &str) -> Option<&'static str> {
    match resident_id {
        "1" => Some(
            "Reduced activity and sleep disruption detected over the past 5 days — possible \
             early decline. Mobility has dropped 60% below baseline. Combined with 1.2kg \
             weight loss, this pattern suggests increased fall risk and potential health \
             deterioration. Recommend clinical review within 24 hours.",
        ),
        "2" => Some(
            "Fragmented sleep across the past week with 4+ wake events nightly. Daytime \
             activity remains near baseline, but resting heart rate is trending up. \
             Recommend reviewing evening medication timing and initiating sleep monitoring.",
        ),
        _ => None,
    }
}
