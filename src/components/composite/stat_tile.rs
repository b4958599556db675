//! Stat Tile Component

use gpui::{
    div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window,
};

use crate::domain::stat::StatTile;
use crate::theme::colors::SentinelColors;

/// One summary tile of the top row
#[derive(IntoElement)]
pub struct StatTileCard {
    tile: StatTile,
    /// Translated trend badge text and its tone, if any
    trend: Option<(SharedString, crate::domain::style::Tone)>,
}

impl StatTileCard {
    pub fn new(tile: StatTile, trend_label: impl Fn(&'static str) -> SharedString) -> Self {
        let trend = tile
            .trend
            .badge()
            .map(|badge| (trend_label(badge.label_key), badge.tone));
        Self { tile, trend }
    }
}

impl RenderOnce for StatTileCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex_1()
            .min_w(px(220.0))
            .p_5()
            .bg(SentinelColors::card_bg())
            .rounded_xl()
            .border_1()
            .border_color(SentinelColors::border())
            .shadow_sm()
            .flex()
            .flex_col()
            .child(
                div()
                    .mb_2()
                    .flex()
                    .items_start()
                    .justify_between()
                    .child(
                        div()
                            .p_2()
                            .rounded_lg()
                            .bg(SentinelColors::accent_soft())
                            .text_color(SentinelColors::accent())
                            .text_2xl()
                            .child(self.tile.icon.glyph()),
                    )
                    .when_some(self.trend, |el, (label, tone)| {
                        el.child(
                            div()
                                .px_2()
                                .py_1()
                                .rounded_full()
                                .bg(SentinelColors::tone_bg(tone))
                                .text_color(SentinelColors::tone_solid(tone))
                                .text_xs()
                                .font_weight(gpui::FontWeight::MEDIUM)
                                .child(label),
                        )
                    }),
            )
            .child(
                div()
                    .mt_1()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(SentinelColors::text_secondary())
                    .child(self.tile.title),
            )
            .child(
                div()
                    .mt_1()
                    .text_2xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(SentinelColors::text_strong())
                    .child(self.tile.value),
            )
            .child(
                div()
                    .mt_1()
                    .text_xs()
                    .text_color(SentinelColors::text_secondary())
                    .child(self.tile.description),
            )
    }
}
