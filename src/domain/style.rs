//! Style - Presentation Tones
//!
//! Colour-free tokens the domain hands to the theme. The theme decides the
//! actual RGB values (see `theme::colors::SentinelColors::tone_*`).

/// A colour family used for badges, icon tints and highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Yellow,
    Red,
    Blue,
    Neutral,
}

/// Background/text pair for a pill-shaped badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BadgeStyle {
    /// Tone of the pill background (light shade)
    pub background: Tone,
    /// Tone of the text (strong shade)
    pub text: Tone,
}

impl BadgeStyle {
    /// Badge where background and text share one tone
    pub const fn tinted(tone: Tone) -> Self {
        Self {
            background: tone,
            text: tone,
        }
    }
}
