//! TimeFilter - Dashboard Time Range Selector

use serde::{Deserialize, Serialize};

/// Time range chosen in the dashboard header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilter {
    #[default]
    Today,
    Week,
    Month,
}

impl TimeFilter {
    /// Buttons in header order
    pub fn all() -> &'static [TimeFilter] {
        &[TimeFilter::Today, TimeFilter::Week, TimeFilter::Month]
    }

    /// Get the translation key for the button label
    pub fn label_key(&self) -> &'static str {
        match self {
            TimeFilter::Today => "filter.today",
            TimeFilter::Week => "filter.week",
            TimeFilter::Month => "filter.month",
        }
    }

    /// Wire value, as stored verbatim in the view state
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFilter::Today => "today",
            TimeFilter::Week => "week",
            TimeFilter::Month => "month",
        }
    }
}
