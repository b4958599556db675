//! Incident - Recent Security Incidents

use serde::Serialize;

use crate::domain::style::{BadgeStyle, Tone};
use crate::domain::time_filter::TimeFilter;

/// Incident severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Icon tint and badge colours derived from a severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    /// Tint of the warning icon tile
    pub icon: BadgeStyle,
    /// Colours of the severity pill
    pub badge: BadgeStyle,
}

impl Severity {
    /// Token rendered inside the severity badge
    pub fn token(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    /// Icon/badge colours: high is red, medium yellow, low green
    pub fn style(self) -> SeverityStyle {
        let tone = match self {
            Severity::High => Tone::Red,
            Severity::Medium => Tone::Yellow,
            Severity::Low => Tone::Green,
        };
        SeverityStyle {
            icon: BadgeStyle::tinted(tone),
            badge: BadgeStyle::tinted(tone),
        }
    }

    pub fn all() -> &'static [Severity] {
        &[Severity::Low, Severity::Medium, Severity::High]
    }
}

impl std::str::FromStr for Severity {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => Err(crate::error::Error::Invalid {
                message: format!("unknown severity '{other}'"),
            }),
        }
    }
}

/// A recent incident shown in the sidebar list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Incident {
    pub title: &'static str,
    pub location: &'static str,
    /// Display-only time of day, never parsed
    pub time: &'static str,
    pub severity: Severity,
    pub is_new: bool,
}

/// Incidents to render for the given time filter.
///
/// The predicate accepts every incident whatever the filter: incidents only
/// carry a display time, so there is nothing to bucket on yet. Order is
/// preserved and the iterator can be recreated at will.
pub fn filter_incidents(
    incidents: &[Incident],
    filter: TimeFilter,
) -> impl Iterator<Item = &Incident> + Clone + '_ {
    incidents
        .iter()
        .filter(move |incident| matches_filter(incident, filter))
}

fn matches_filter(_incident: &Incident, _filter: TimeFilter) -> bool {
    // TODO: bucket by timestamp once incidents carry one instead of a display string
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use proptest::prelude::*;

    #[test]
    fn severity_style_table() {
        assert_eq!(Severity::High.style().icon, BadgeStyle::tinted(Tone::Red));
        assert_eq!(Severity::High.style().badge, BadgeStyle::tinted(Tone::Red));
        assert_eq!(Severity::Medium.style().icon, BadgeStyle::tinted(Tone::Yellow));
        assert_eq!(Severity::Medium.style().badge, BadgeStyle::tinted(Tone::Yellow));
        assert_eq!(Severity::Low.style().icon, BadgeStyle::tinted(Tone::Green));
        assert_eq!(Severity::Low.style().badge, BadgeStyle::tinted(Tone::Green));
    }

    #[test]
    fn severity_parse_rejects_unknown_values() {
        assert_eq!("high".parse::<Severity>().ok(), Some(Severity::High));
        assert!("critical".parse::<Severity>().is_err());
        assert!("High".parse::<Severity>().is_err());
    }

    #[test]
    fn severity_tokens_round_trip_through_parse() {
        for severity in Severity::all() {
            assert_eq!(severity.token().parse::<Severity>().ok(), Some(*severity));
        }
    }

    #[test]
    fn filter_is_restartable() {
        let incidents = fixtures::incidents();
        let first = filter_incidents(incidents, TimeFilter::Week);
        let second = first.clone();
        assert_eq!(first.count(), second.count());
    }

    proptest! {
        #[test]
        fn filter_returns_every_incident_in_order(idx in 0usize..3) {
            let filter = TimeFilter::all()[idx];
            let incidents = fixtures::incidents();
            let shown: Vec<&Incident> = filter_incidents(incidents, filter).collect();
            let expected: Vec<&Incident> = incidents.iter().collect();
            prop_assert_eq!(shown, expected);
        }
    }
}
