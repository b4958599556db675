//! SystemStatus - Subsystem Health Rows

use serde::Serialize;

use crate::domain::style::{BadgeStyle, Tone};

/// Normalised health of a subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComponentStatus {
    Operational,
    Degraded,
    Offline,
}

impl ComponentStatus {
    pub fn badge(self) -> BadgeStyle {
        match self {
            ComponentStatus::Operational => BadgeStyle::tinted(Tone::Green),
            ComponentStatus::Degraded => BadgeStyle::tinted(Tone::Yellow),
            ComponentStatus::Offline => BadgeStyle::tinted(Tone::Red),
        }
    }
}

/// One row of the "System Status" widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemComponent {
    pub title: &'static str,
    /// Free text shown in the badge, kept exactly as written
    pub status_text: &'static str,
    /// Drives the badge colours only
    pub status: ComponentStatus,
}

impl SystemComponent {
    pub fn badge(&self) -> BadgeStyle {
        self.status.badge()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn fixture_text_is_kept_verbatim() {
        let texts: Vec<_> = fixtures::system_components()
            .iter()
            .map(|c| c.status_text)
            .collect();
        assert_eq!(texts, vec!["Operational", "Operational", "Degraded", "Offline"]);
    }

    #[test]
    fn badge_follows_normalised_status() {
        let rows = fixtures::system_components();
        assert_eq!(rows[0].badge(), BadgeStyle::tinted(Tone::Green));
        assert_eq!(rows[2].badge(), BadgeStyle::tinted(Tone::Yellow));
        assert_eq!(rows[3].badge(), BadgeStyle::tinted(Tone::Red));
    }
}
