//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by concern so a locale switch doesn't re-render the feed.

use std::sync::Arc;

use gpui::{App, AppContext, Entity, Global};

use crate::fixtures::DashboardCharts;
use crate::i18n::Locale;
use crate::state::{
    dashboard_state::DashboardState, feed_image_state::FeedImageState, i18n_state::I18nState,
    navigation_state::NavigationState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Dashboard view state (selection, fullscreen, time filter)
    pub dashboard: Entity<DashboardState>,
    /// Active page and navigation history
    pub navigation: Entity<NavigationState>,
    /// Downloaded feed images
    pub feed_images: Entity<FeedImageState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Chart fixtures, immutable
    pub charts: Arc<DashboardCharts>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with their launch values
    pub fn init(locale: Locale, charts: DashboardCharts, cx: &mut App) -> Self {
        Self {
            dashboard: cx.new(|_| DashboardState::default()),
            navigation: cx.new(|_| NavigationState::default()),
            feed_images: cx.new(|_| FeedImageState::default()),
            i18n: cx.new(|_| I18nState::new(locale)),
            charts: Arc::new(charts),
        }
    }
}
