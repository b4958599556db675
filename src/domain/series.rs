//! Series - Chart Time Series and Options
//!
//! Fixed data handed to the bar chart as-is. The only rule enforced here is
//! the shape: every series has exactly one value per label.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One named series of values aligned by index with the labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub data: Vec<u32>,
}

impl Series {
    pub fn new(label: impl Into<String>, data: Vec<u32>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }
}

/// Category labels plus one or more aligned series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeries {
    labels: Vec<String>,
    series: Vec<Series>,
}

impl TimeSeries {
    /// Build a time series, rejecting series that don't match the label count
    pub fn new<L>(labels: impl IntoIterator<Item = L>, series: Vec<Series>) -> Result<Self>
    where
        L: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if let Some(bad) = series.iter().find(|s| s.data.len() != labels.len()) {
            return Err(Error::SeriesShape {
                series: bad.label.clone(),
                expected: labels.len(),
                actual: bad.data.len(),
            });
        }

        Ok(Self { labels, series })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest value over every series, used to scale bars
    pub fn max_value(&self) -> u32 {
        self.series
            .iter()
            .flat_map(|s| s.data.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// Legend placement relative to the plot area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    /// No legend at all
    Hidden,
}

/// Options recognised by the bar chart. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartOptions {
    pub responsive: Option<bool>,
    pub legend_position: Option<LegendPosition>,
    pub title_text: Option<String>,
    pub maintain_aspect_ratio: Option<bool>,
    pub y_axis_title: Option<String>,
    pub x_axis_title: Option<String>,
    pub begin_at_zero: Option<bool>,
    /// Fixed plot height in pixels
    pub height: Option<f32>,
}

impl ChartOptions {
    pub fn responsive(&self) -> bool {
        self.responsive.unwrap_or(true)
    }

    pub fn legend_position(&self) -> LegendPosition {
        self.legend_position.unwrap_or_default()
    }

    pub fn maintain_aspect_ratio(&self) -> bool {
        self.maintain_aspect_ratio.unwrap_or(true)
    }

    pub fn begin_at_zero(&self) -> bool {
        self.begin_at_zero.unwrap_or(true)
    }

    /// Plot height, derived from a 2:1 aspect ratio when none is fixed
    pub fn plot_height(&self, width: f32) -> f32 {
        match self.height {
            Some(h) => h,
            None if self.maintain_aspect_ratio() => width / 2.0,
            None => crate::constants::CHART_DEFAULT_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_misaligned_series() {
        let err = TimeSeries::new(["a", "b", "c"], vec![Series::new("x", vec![1, 2])])
            .expect_err("misaligned series");
        match err {
            Error::SeriesShape {
                series,
                expected,
                actual,
            } => {
                assert_eq!(series, "x");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn max_value_spans_all_series() {
        let ts = TimeSeries::new(
            ["a", "b"],
            vec![Series::new("x", vec![1, 9]), Series::new("y", vec![4, 2])],
        )
        .expect("valid series");
        assert_eq!(ts.max_value(), 9);
        assert_eq!(ts.len(), 2);
    }

    #[test]
    fn option_defaults() {
        let opts = ChartOptions::default();
        assert!(opts.responsive());
        assert!(opts.maintain_aspect_ratio());
        assert_eq!(opts.legend_position(), LegendPosition::Top);
        assert_eq!(opts.plot_height(400.0), 200.0);

        let fixed = ChartOptions {
            maintain_aspect_ratio: Some(false),
            ..Default::default()
        };
        assert_eq!(fixed.plot_height(400.0), crate::constants::CHART_DEFAULT_HEIGHT);
    }
}
