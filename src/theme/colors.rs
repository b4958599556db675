//! Colors - Sentinel Theme Colors

use gpui::{rgb, rgba, Rgba};

use crate::domain::style::{BadgeStyle, Tone};

/// Sentinel color palette - All colors are accessed via associated functions
pub struct SentinelColors;

impl SentinelColors {
    // Primary colors
    /// Primary accent - Blue (active filter, selection ring, bars)
    pub fn accent() -> Rgba { rgb(0x3b82f6) }
    /// Accent on hover
    pub fn accent_hover() -> Rgba { rgb(0x2563eb) }
    /// Light accent background
    pub fn accent_soft() -> Rgba { rgb(0xeff6ff) }
    /// Bar fill (50% accent)
    pub fn bar_fill() -> Rgba { rgba(0x3b82f680) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf9fafb) }
    /// Card background
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xffffff) }
    /// Feed viewport background
    pub fn feed_bg() -> Rgba { rgb(0x111827) }
    /// Fullscreen backdrop
    pub fn fullscreen_bg() -> Rgba { rgb(0x000000) }
    /// Translucent black for overlays on the feed
    pub fn overlay_bg() -> Rgba { rgba(0x000000b3) }
    /// Lighter translucent black for the clock chip
    pub fn overlay_soft_bg() -> Rgba { rgba(0x00000080) }
    /// Subtle hover background
    pub fn hover_bg() -> Rgba { rgb(0xf3f4f6) }
    /// Chart plot background
    pub fn plot_bg() -> Rgba { rgb(0xf9fafb) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Strong text (stat values)
    pub fn text_strong() -> Rgba { rgb(0x111827) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }
    /// Dimmed light text (on dark backgrounds)
    pub fn text_light_dim() -> Rgba { rgb(0xd1d5db) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xf3f4f6) }
    /// Button group border
    pub fn border_strong() -> Rgba { rgb(0xe5e7eb) }

    // Detail icon tints on the feed overlay
    pub fn detail_people() -> Rgba { rgb(0x60a5fa) }
    pub fn detail_alerts() -> Rgba { rgb(0xfb923c) }
    pub fn detail_vehicles() -> Rgba { rgb(0x4ade80) }
    pub fn detail_objects() -> Rgba { rgb(0xc084fc) }
}

/// Tone mapping for badges and tints
impl SentinelColors {
    /// Light background shade of a tone
    pub fn tone_bg(tone: Tone) -> Rgba {
        match tone {
            Tone::Green => rgb(0xdcfce7),
            Tone::Yellow => rgb(0xfef9c3),
            Tone::Red => rgb(0xfee2e2),
            Tone::Blue => rgb(0xdbeafe),
            Tone::Neutral => rgb(0xf3f4f6),
        }
    }

    /// Strong text shade of a tone
    pub fn tone_text(tone: Tone) -> Rgba {
        match tone {
            Tone::Green => rgb(0x16a34a),
            Tone::Yellow => rgb(0xca8a04),
            Tone::Red => rgb(0xdc2626),
            Tone::Blue => rgb(0x2563eb),
            Tone::Neutral => rgb(0x374151),
        }
    }

    /// Saturated shade, for solid pills and icons on dark backgrounds
    pub fn tone_solid(tone: Tone) -> Rgba {
        match tone {
            Tone::Green => rgb(0x22c55e),
            Tone::Yellow => rgb(0xeab308),
            Tone::Red => rgb(0xef4444),
            Tone::Blue => rgb(0x3b82f6),
            Tone::Neutral => rgb(0x6b7280),
        }
    }

    /// (background, text) of a badge
    pub fn badge(style: BadgeStyle) -> (Rgba, Rgba) {
        (Self::tone_bg(style.background), Self::tone_text(style.text))
    }
}
