//! Dashboard Widgets
//!
//! Render helpers for the individual panels of the dashboard page.

use std::time::Duration;

use gpui::{
    div, prelude::*, pulsating_between, px, Animation, AnimationExt, ClickEvent, Context,
    InteractiveElement, IntoElement, ParentElement, SharedString, StatefulInteractiveElement,
    Styled,
};

use crate::components::composite::bar_chart::BarChart;
use crate::components::composite::card::Card;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::Button;
use crate::components::primitives::feed_image::FeedImageView;
use crate::constants::{
    CAMERA_TILE_HEIGHT, CAMERA_TILE_WIDTH, FEED_FULLSCREEN_HEIGHT, FEED_HEIGHT,
    INCIDENT_LIST_MAX_HEIGHT, LIVE_PULSE_MS,
};
use crate::domain::incident::Incident;
use crate::domain::style::{BadgeStyle, Tone};
use crate::domain::system_status::SystemComponent;
use crate::features::dashboard::page::DashboardPage;
use crate::features::dashboard::view_model::{CameraTileView, FeedView};
use crate::fixtures::ChartFixture;
use crate::i18n::{tr, tr_count, Locale};
use crate::state::feed_image_state::FeedImageState;
use crate::theme::colors::SentinelColors;
use crate::utils::format::location_line;

/// Live feed viewer plus the "Available Cameras" grid
pub(super) fn feed_panel(
    feed: &FeedView,
    tiles: Vec<CameraTileView>,
    images: &FeedImageState,
    locale: Locale,
    cx: &Context<DashboardPage>,
) -> impl IntoElement {
    let status_badge = Badge::new(tr(locale, feed.status.badge_key), feed.status.badge).large();
    let feed_height = if feed.fullscreen {
        FEED_FULLSCREEN_HEIGHT
    } else {
        FEED_HEIGHT
    };

    div()
        .w_full()
        .p_4()
        .bg(SentinelColors::card_bg())
        .rounded_xl()
        .border_1()
        .border_color(SentinelColors::border())
        .shadow_sm()
        .flex()
        .flex_col()
        // Header: title, status badge, fullscreen toggle
        .child(
            div()
                .mb_4()
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .text_xl()
                        .font_weight(gpui::FontWeight::BOLD)
                        .text_color(SentinelColors::text_primary())
                        .child(tr(locale, "feed.title")),
                )
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap_2()
                        .child(status_badge)
                        .child(
                            Button::icon_only("fullscreen-toggle", "⛶").on_click(cx.listener(
                                |this, _event: &ClickEvent, _window, cx| {
                                    this.controller().toggle_fullscreen(cx);
                                },
                            )),
                        ),
                ),
        )
        // Viewport
        .child(
            div()
                .relative()
                .w_full()
                .h(px(feed_height))
                .rounded_xl()
                .overflow_hidden()
                .bg(SentinelColors::feed_bg())
                .child(FeedImageView::for_source(images, feed.feed_source, locale))
                .when_some(feed.status.overlay, |el, overlay| {
                    el.child(
                        div()
                            .absolute()
                            .inset_0()
                            .bg(SentinelColors::overlay_bg())
                            .flex()
                            .flex_col()
                            .items_center()
                            .justify_center()
                            .gap_1()
                            .child(
                                div()
                                    .text_size(px(36.0))
                                    .text_color(SentinelColors::tone_solid(overlay.icon_tone))
                                    .child("⚠"),
                            )
                            .child(
                                div()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(SentinelColors::text_light())
                                    .child(tr(locale, overlay.title_key)),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(SentinelColors::text_light_dim())
                                    .child(tr(locale, overlay.detail_key)),
                            ),
                    )
                })
                // Clock
                .child(
                    div()
                        .absolute()
                        .top_4()
                        .left_4()
                        .p_2()
                        .rounded_lg()
                        .bg(SentinelColors::overlay_soft_bg())
                        .text_color(SentinelColors::text_light())
                        .text_sm()
                        .child(feed.timestamp.clone()),
                )
                // Camera name and counters
                .child(detail_overlay(feed, locale)),
        )
        .child(camera_grid(tiles, images, locale, cx))
}

fn detail_overlay(feed: &FeedView, locale: Locale) -> impl IntoElement {
    let counter = |glyph: &'static str, color: gpui::Rgba, key: &str, count: u32| {
        div()
            .flex()
            .items_center()
            .gap_2()
            .text_sm()
            .child(div().text_color(color).child(glyph))
            .child(tr_count(locale, key, count))
    };
    let details = feed.details;

    div()
        .absolute()
        .bottom_4()
        .left_4()
        .p_3()
        .rounded_lg()
        .bg(SentinelColors::overlay_bg())
        .text_color(SentinelColors::text_light())
        .child(
            div()
                .flex()
                .items_center()
                .text_lg()
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .child(feed.name)
                .when(feed.status.live_marker, |el| el.child(live_marker(locale))),
        )
        .child(
            div()
                .mt_2()
                .flex()
                .gap_6()
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .gap_1()
                        .child(counter(
                            "☺",
                            SentinelColors::detail_people(),
                            "feed.people",
                            details.people,
                        ))
                        .child(counter(
                            "◉",
                            SentinelColors::detail_vehicles(),
                            "feed.vehicles",
                            details.vehicles,
                        )),
                )
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .gap_1()
                        .child(counter(
                            "!",
                            SentinelColors::detail_alerts(),
                            "feed.alerts",
                            details.alerts,
                        ))
                        .child(counter(
                            "♥",
                            SentinelColors::detail_objects(),
                            "feed.objects",
                            details.objects,
                        )),
                ),
        )
}

fn live_marker(locale: Locale) -> impl IntoElement {
    div()
        .ml_2()
        .px_2()
        .py(px(2.0))
        .flex()
        .items_center()
        .gap_1()
        .rounded_full()
        .bg(SentinelColors::tone_solid(Tone::Green))
        .text_xs()
        .text_color(SentinelColors::text_light())
        .child(
            div()
                .size(px(8.0))
                .rounded_full()
                .bg(SentinelColors::text_light())
                .with_animation(
                    "live-pulse",
                    Animation::new(Duration::from_millis(LIVE_PULSE_MS))
                        .repeat()
                        .with_easing(pulsating_between(0.3, 1.0)),
                    |dot, delta| dot.opacity(delta),
                ),
        )
        .child(tr(locale, "feed.live-marker"))
}

fn camera_grid(
    tiles: Vec<CameraTileView>,
    images: &FeedImageState,
    locale: Locale,
    cx: &Context<DashboardPage>,
) -> impl IntoElement {
    let people_label = |count| tr_count(locale, "grid.people", count);

    div()
        .mt_6()
        .flex()
        .flex_col()
        .child(
            div()
                .mb_4()
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .text_lg()
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .text_color(SentinelColors::text_primary())
                        .child(tr(locale, "grid.title")),
                )
                .child(
                    Button::link("view-all-cameras", tr(locale, "action.view-all"))
                        .icon("👁")
                        .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.controller().navigate_to_all_cameras(cx);
                        })),
                ),
        )
        .child(
            div()
                .flex()
                .flex_wrap()
                .gap_4()
                .children(tiles.into_iter().map(|tile| {
                    let id = tile.id;
                    let ring = if tile.selected {
                        SentinelColors::accent()
                    } else {
                        gpui::rgba(0x00000000)
                    };

                    div()
                        .id(SharedString::from(format!("camera-{}", tile.id)))
                        .relative()
                        .w(px(CAMERA_TILE_WIDTH))
                        .h(px(CAMERA_TILE_HEIGHT))
                        .rounded_lg()
                        .overflow_hidden()
                        .bg(SentinelColors::feed_bg())
                        .border_2()
                        .border_color(ring)
                        .cursor_pointer()
                        .hover(|s| s.border_color(SentinelColors::detail_people()))
                        .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                            this.controller().select_camera(id, cx);
                        }))
                        .child(
                            FeedImageView::for_source(images, tile.feed_source, locale)
                                .opacity(0.8),
                        )
                        .when(tile.offline, |el| {
                            el.child(
                                div()
                                    .absolute()
                                    .inset_0()
                                    .bg(SentinelColors::overlay_soft_bg())
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .child(Badge::solid(tr(locale, "feed.offline"), Tone::Red)),
                            )
                        })
                        .child(
                            div()
                                .absolute()
                                .bottom_0()
                                .left_0()
                                .right_0()
                                .p_2()
                                .bg(SentinelColors::overlay_bg())
                                .child(
                                    div()
                                        .text_sm()
                                        .font_weight(gpui::FontWeight::MEDIUM)
                                        .text_color(SentinelColors::text_light())
                                        .child(tile.name),
                                )
                                .child(
                                    div()
                                        .flex()
                                        .justify_between()
                                        .text_xs()
                                        .text_color(SentinelColors::text_light_dim())
                                        .child(people_label(tile.people))
                                        .when_some(tile.alerts, |el, alerts| {
                                            el.child(alert_count(alerts, locale))
                                        }),
                                ),
                        )
                })),
        )
}

/// Red alert count of a grid tile
fn alert_count(alerts: u32, locale: Locale) -> impl IntoElement {
    div()
        .text_color(SentinelColors::tone_solid(Tone::Red))
        .child(tr_count(locale, "grid.alerts", alerts))
}

/// "Detection Trends" card
pub(super) fn detection_trends(chart: &ChartFixture, locale: Locale) -> impl IntoElement {
    Card::new(tr(locale, "trends.title"))
        .subtitle(tr(locale, "trends.subtitle"))
        .child(
            div()
                .p_4()
                .rounded_lg()
                .bg(SentinelColors::plot_bg())
                .child(
                    BarChart::new(chart.data.clone(), chart.options.clone())
                        .empty_label(tr(locale, "chart.no-data")),
                ),
        )
}

/// "Recent Incidents" card
pub(super) fn recent_incidents<'a>(
    incidents: impl Iterator<Item = &'a Incident>,
    locale: Locale,
) -> impl IntoElement {
    let new_label = tr(locale, "incidents.new");

    Card::new(tr(locale, "incidents.title"))
        .subtitle(tr(locale, "incidents.subtitle"))
        .child(
            div()
                .id("incident-list")
                .max_h(px(INCIDENT_LIST_MAX_HEIGHT))
                .overflow_y_scroll()
                .flex()
                .flex_col()
                .gap_3()
                .children(incidents.map(|incident| incident_row(incident, new_label.clone()))),
        )
        .child(
            div().mt_4().child(
                Button::link("view-all-incidents", tr(locale, "action.view-all-incidents"))
                    .full_width()
                    .disabled(true),
            ),
        )
}

fn incident_row(incident: &Incident, new_label: SharedString) -> impl IntoElement {
    let style = incident.severity.style();
    let (icon_bg, icon_fg) = SentinelColors::badge(style.icon);

    div()
        .flex()
        .items_center()
        .justify_between()
        .p_3()
        .rounded_lg()
        .border_1()
        .border_color(SentinelColors::border())
        .child(
            div()
                .flex()
                .items_start()
                .gap_3()
                .child(div().p_2().rounded_lg().bg(icon_bg).text_color(icon_fg).child("⚠"))
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .child(
                            div()
                                .flex()
                                .items_center()
                                .gap_2()
                                .child(
                                    div()
                                        .font_weight(gpui::FontWeight::MEDIUM)
                                        .text_color(SentinelColors::text_primary())
                                        .child(incident.title),
                                )
                                .when(incident.is_new, |el| {
                                    el.child(Badge::new(new_label, BadgeStyle::tinted(Tone::Blue)))
                                }),
                        )
                        .child(
                            div()
                                .text_sm()
                                .text_color(SentinelColors::text_secondary())
                                .child(location_line(incident.location, incident.time)),
                        ),
                ),
        )
        .child(Badge::new(incident.severity.token(), style.badge))
}

/// "System Status" card
pub(super) fn system_status(components: &[SystemComponent], locale: Locale) -> impl IntoElement {
    Card::new(tr(locale, "status.title"))
        .subtitle(tr(locale, "status.subtitle"))
        .child(
            div()
                .flex()
                .flex_col()
                .gap_3()
                .children(components.iter().map(|component| {
                    div()
                        .p_2()
                        .flex()
                        .items_center()
                        .justify_between()
                        .child(
                            div()
                                .text_sm()
                                .font_weight(gpui::FontWeight::MEDIUM)
                                .text_color(SentinelColors::text_primary())
                                .child(component.title),
                        )
                        .child(Badge::new(component.status_text, component.badge()))
                })),
        )
}
