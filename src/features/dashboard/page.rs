//! Dashboard Page
//!
//! Security overview: stat tiles, the live feed with its camera grid, the
//! sidebar widgets and the weekly incident report.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::bar_chart::BarChart;
use crate::components::composite::card::Card;
use crate::components::composite::fullscreen::FullscreenOverlay;
use crate::components::composite::stat_tile::StatTileCard;
use crate::components::primitives::button::Button;
use crate::constants::WIDGET_COLUMN_WIDTH;
use crate::features::dashboard::controller::DashboardController;
use crate::features::dashboard::view_model::{
    visible_incidents, CameraTileView, FeedPlacement, FeedView, FilterButtonView,
};
use crate::features::dashboard::widgets;
use crate::fixtures::{self, WEEKLY_REPORT_RANGE};
use crate::i18n::{tr, Locale};
use crate::state::dashboard_state::DashboardState;
use crate::theme::colors::SentinelColors;
use crate::utils::clock::{Clock, SystemClock};

/// Dashboard page component
pub struct DashboardPage {
    entities: AppEntities,
    controller: DashboardController,
    clock: Box<dyn Clock>,
}

impl DashboardPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = DashboardController::new(entities.clone());

        // Observe view state changes
        cx.observe(&entities.dashboard, |_this, _, cx| cx.notify())
            .detach();

        // Observe feed image downloads
        cx.observe(&entities.feed_images, |_this, _, cx| cx.notify())
            .detach();

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
            clock: Box::new(SystemClock),
        }
    }

    pub(super) fn controller(&self) -> &DashboardController {
        &self.controller
    }

    /// Title row with the time range group and the report button
    fn render_header(
        &self,
        state: &DashboardState,
        locale: Locale,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let filters = FilterButtonView::all(state);

        div()
            .mb_6()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(SentinelColors::text_primary())
                            .child(tr(locale, "dashboard.title")),
                    )
                    .child(
                        div()
                            .text_color(SentinelColors::text_secondary())
                            .child(tr(locale, "dashboard.subtitle")),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .flex()
                            .rounded_lg()
                            .overflow_hidden()
                            .border_1()
                            .border_color(SentinelColors::border_strong())
                            .children(filters.into_iter().map(|button| {
                                let filter = button.filter;
                                Button::segment(
                                    SharedString::from(format!("filter-{}", filter.as_str())),
                                    tr(locale, filter.label_key()),
                                    button.active,
                                )
                                .on_click(cx.listener(
                                    move |this, _event: &ClickEvent, _window, cx| {
                                        this.controller.set_time_filter(filter, cx);
                                    },
                                ))
                            })),
                    )
                    // No report view exists yet
                    .child(
                        Button::primary("view-report", tr(locale, "action.view-report"))
                            .icon("⟲")
                            .disabled(true),
                    ),
            )
    }

    fn render_stat_tiles(&self, locale: Locale) -> impl IntoElement {
        div()
            .mb_6()
            .flex()
            .flex_wrap()
            .gap_6()
            .children(
                fixtures::stat_tiles()
                    .iter()
                    .map(|tile| StatTileCard::new(tile.clone(), |key| tr(locale, key))),
            )
    }

    fn render_weekly_report(&self, locale: Locale, cx: &Context<Self>) -> impl IntoElement {
        let chart = &self.entities.charts.weekly_incidents;
        let title = chart.options.title_text.clone().unwrap_or_default();

        Card::new(tr(locale, "report.title"))
            .subtitle(WEEKLY_REPORT_RANGE)
            .action(
                Button::link("export-weekly", tr(locale, "action.export"))
                    .icon("⇩")
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, _cx| {
                        this.controller.export_weekly_report(&title);
                    })),
            )
            .child(
                BarChart::new(chart.data.clone(), chart.options.clone())
                    .empty_label(tr(locale, "chart.no-data")),
            )
    }
}

impl Render for DashboardPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let state = self.entities.dashboard.read(cx).clone();
        let feed = FeedView::build(&state, self.clock.as_ref());
        let tiles = CameraTileView::all(&state);
        let charts = self.entities.charts.clone();

        let images = self.entities.feed_images.read(cx);
        let feed_panel = widgets::feed_panel(&feed, tiles, images, locale, cx).into_any_element();
        let (inline_feed, fullscreen_feed) = match feed.placement() {
            FeedPlacement::Inline => (Some(feed_panel), None),
            FeedPlacement::Viewport => (None, Some(feed_panel)),
        };

        div()
            .size_full()
            .relative()
            .child(
                div()
                    .id("dashboard-scroll")
                    .size_full()
                    .overflow_y_scroll()
                    .p_6()
                    .bg(SentinelColors::background())
                    .child(self.render_header(&state, locale, cx))
                    .child(self.render_stat_tiles(locale))
                    .child(
                        div()
                            .mb_6()
                            .flex()
                            .items_start()
                            .gap_6()
                            .child(div().flex_1().min_w(px(0.0)).children(inline_feed))
                            .child(
                                div()
                                    .w(px(WIDGET_COLUMN_WIDTH))
                                    .flex_none()
                                    .flex()
                                    .flex_col()
                                    .gap_6()
                                    .child(widgets::detection_trends(
                                        &charts.detection_trend,
                                        locale,
                                    ))
                                    .child(widgets::recent_incidents(
                                        visible_incidents(&state),
                                        locale,
                                    ))
                                    .child(widgets::system_status(
                                        fixtures::system_components(),
                                        locale,
                                    )),
                            ),
                    )
                    .child(self.render_weekly_report(locale, cx)),
            )
            .when_some(fullscreen_feed, |el, panel| {
                el.child(FullscreenOverlay::new(panel))
            })
    }
}
