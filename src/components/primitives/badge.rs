//! Badge Component

use gpui::{
    div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window,
};

use crate::domain::style::{BadgeStyle, Tone};
use crate::theme::colors::SentinelColors;

/// A small pill-shaped label
#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    style: BadgeStyle,
    solid: bool,
    large: bool,
}

impl Badge {
    /// Light background with strong text
    pub fn new(label: impl Into<SharedString>, style: BadgeStyle) -> Self {
        Self {
            label: label.into(),
            style,
            solid: false,
            large: false,
        }
    }

    /// Saturated background with white text, for use on top of images
    pub fn solid(label: impl Into<SharedString>, tone: Tone) -> Self {
        Self {
            solid: true,
            ..Self::new(label, BadgeStyle::tinted(tone))
        }
    }

    /// Rounded rectangle sized like a button
    pub fn large(mut self) -> Self {
        self.large = true;
        self
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, text) = if self.solid {
            (
                SentinelColors::tone_solid(self.style.background),
                SentinelColors::text_light(),
            )
        } else {
            SentinelColors::badge(self.style)
        };

        div()
            .flex()
            .items_center()
            .bg(bg)
            .text_color(text)
            .font_weight(gpui::FontWeight::MEDIUM)
            .map(|el| {
                if self.large {
                    el.px_3().py(px(6.0)).rounded_lg().text_sm()
                } else {
                    el.px_2().py(px(2.0)).rounded_full().text_xs()
                }
            })
            .child(self.label)
    }
}
