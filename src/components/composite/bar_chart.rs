//! Bar Chart Component
//!
//! Draws a `TimeSeries` as vertical bars. The data is used exactly as
//! given; only bar heights are scaled to the plot area.

use gpui::{
    div, prelude::*, px, AnyElement, App, IntoElement, ParentElement, RenderOnce, Rgba,
    SharedString, Styled, Window,
};

use crate::constants::CHART_REFERENCE_WIDTH;
use crate::domain::series::{ChartOptions, LegendPosition, TimeSeries};
use crate::theme::colors::SentinelColors;
use crate::utils::format::bar_height;

/// Fill colours assigned to series in order
fn series_color(index: usize) -> Rgba {
    match index % 3 {
        0 => SentinelColors::bar_fill(),
        1 => gpui::rgba(0x22c55e80),
        _ => gpui::rgba(0xf59e0b80),
    }
}

/// Value the bars grow from
pub fn baseline(data: &TimeSeries, options: &ChartOptions) -> u32 {
    if options.begin_at_zero() {
        return 0;
    }
    data.series()
        .iter()
        .flat_map(|s| s.data.iter().copied())
        .min()
        .unwrap_or(0)
        .saturating_sub(1)
}

/// Bar chart component
#[derive(IntoElement)]
pub struct BarChart {
    data: TimeSeries,
    options: ChartOptions,
    empty_label: SharedString,
}

impl BarChart {
    pub fn new(data: TimeSeries, options: ChartOptions) -> Self {
        Self {
            data,
            options,
            empty_label: SharedString::from("No data"),
        }
    }

    /// Text shown when the series has no labels
    pub fn empty_label(mut self, label: impl Into<SharedString>) -> Self {
        self.empty_label = label.into();
        self
    }

    fn render_legend(&self) -> impl IntoElement {
        div()
            .flex()
            .flex_wrap()
            .justify_center()
            .gap_4()
            .text_xs()
            .text_color(SentinelColors::text_secondary())
            .children(self.data.series().iter().enumerate().map(|(i, series)| {
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(div().size(px(10.0)).bg(series_color(i)))
                    .child(series.label.clone())
            }))
    }

    fn render_plot(&self) -> AnyElement {
        let plot_height = self.options.plot_height(CHART_REFERENCE_WIDTH);
        let base = baseline(&self.data, &self.options);
        let max = self.data.max_value().saturating_sub(base);
        let responsive = self.options.responsive();

        let columns = self.data.labels().iter().enumerate().map(|(idx, label)| {
            let bars = self.data.series().iter().enumerate().map(|(i, series)| {
                let value = series.data[idx];
                div()
                    .flex_1()
                    .h(px(bar_height(value.saturating_sub(base), max, plot_height)))
                    .bg(series_color(i))
                    .border_1()
                    .border_color(SentinelColors::accent())
            });

            div()
                .flex()
                .flex_col()
                .items_center()
                .gap_1()
                .map(|el| if responsive { el.flex_1() } else { el.w(px(40.0)) })
                .child(
                    div()
                        .w_full()
                        .h(px(plot_height))
                        .flex()
                        .items_end()
                        .gap_1()
                        .px_1()
                        .children(bars),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(SentinelColors::text_secondary())
                        .child(label.clone()),
                )
        });

        div()
            .w_full()
            .flex()
            .items_end()
            .gap_1()
            .border_b_1()
            .border_color(SentinelColors::border_strong())
            .children(columns)
            .into_any_element()
    }
}

impl RenderOnce for BarChart {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        if self.data.is_empty() {
            return div()
                .w_full()
                .h(px(self.options.plot_height(CHART_REFERENCE_WIDTH)))
                .flex()
                .items_center()
                .justify_center()
                .text_sm()
                .text_color(SentinelColors::text_muted())
                .child(self.empty_label.clone());
        }

        let legend = self.options.legend_position();
        let axis_text = |text: &String| {
            div()
                .text_xs()
                .text_color(SentinelColors::text_secondary())
                .child(text.clone())
        };

        let body = div()
            .flex_1()
            .flex()
            .flex_col()
            .gap_1()
            .when_some(self.options.y_axis_title.as_ref(), |el, title| el.child(axis_text(title)))
            .child(self.render_plot())
            .when_some(self.options.x_axis_title.as_ref(), |el, title| {
                el.child(div().w_full().flex().justify_center().child(axis_text(title)))
            });

        let row = matches!(legend, LegendPosition::Left | LegendPosition::Right);

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_2()
            .when_some(self.options.title_text.clone(), |el, title| {
                el.child(
                    div()
                        .w_full()
                        .flex()
                        .justify_center()
                        .text_sm()
                        .font_weight(gpui::FontWeight::BOLD)
                        .text_color(SentinelColors::text_secondary())
                        .child(title),
                )
            })
            .child(
                div()
                    .w_full()
                    .flex()
                    .gap_2()
                    .map(|el| if row { el.flex_row() } else { el.flex_col() })
                    .when(
                        matches!(legend, LegendPosition::Top | LegendPosition::Left),
                        |el| el.child(self.render_legend()),
                    )
                    .child(body)
                    .when(
                        matches!(legend, LegendPosition::Bottom | LegendPosition::Right),
                        |el| el.child(self.render_legend()),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn baseline_starts_at_zero_by_default() {
        let data = fixtures::hourly_detections().expect("hourly series");
        assert_eq!(baseline(&data, &ChartOptions::default()), 0);
    }

    #[test]
    fn baseline_sits_below_minimum_when_not_zero_based() {
        let data = fixtures::hourly_detections().expect("hourly series");
        let options = ChartOptions {
            begin_at_zero: Some(false),
            ..Default::default()
        };
        assert_eq!(baseline(&data, &options), 2);
    }
}
