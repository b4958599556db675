//! Stat - Summary Tiles

use serde::Serialize;

use crate::domain::style::Tone;

/// Direction badge on a stat tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// Label and tint of a trend badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendBadge {
    /// Translation key ("↑ Increasing" / "↓ Decreasing")
    pub label_key: &'static str,
    pub tone: Tone,
}

impl Trend {
    /// Badge to draw, `None` for a neutral trend
    pub fn badge(self) -> Option<TrendBadge> {
        match self {
            Trend::Up => Some(TrendBadge {
                label_key: "trend.increasing",
                tone: Tone::Green,
            }),
            Trend::Down => Some(TrendBadge {
                label_key: "trend.decreasing",
                tone: Tone::Red,
            }),
            Trend::Neutral => None,
        }
    }
}

/// Icon shown in the corner of a stat tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatIcon {
    Camera,
    People,
    Notification,
    Heartbeat,
}

impl StatIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            StatIcon::Camera => "◉",
            StatIcon::People => "☺",
            StatIcon::Notification => "!",
            StatIcon::Heartbeat => "♥",
        }
    }
}

/// A summary tile in the top row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatTile {
    pub icon: StatIcon,
    pub title: &'static str,
    /// Rendered verbatim, may be a number or a word like "Optimal"
    pub value: &'static str,
    pub description: &'static str,
    pub trend: Trend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_badges() {
        let up = Trend::Up.badge().expect("up badge");
        assert_eq!(up.label_key, "trend.increasing");
        assert_eq!(up.tone, Tone::Green);

        let down = Trend::Down.badge().expect("down badge");
        assert_eq!(down.label_key, "trend.decreasing");
        assert_eq!(down.tone, Tone::Red);

        assert!(Trend::Neutral.badge().is_none());
    }
}
