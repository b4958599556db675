//! Navigation - Routes and Navigation Intents
//!
//! Defines the pages available in the application and the intent emitted
//! when a view asks to move to another page.

use serde::{Deserialize, Serialize};

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Route {
    /// Security dashboard
    #[default]
    Dashboard,
    /// Camera listing view
    LiveFeed,
}

impl Route {
    /// Stable route token
    pub fn token(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::LiveFeed => "/Live-Feed",
        }
    }

    /// Get the icon glyph for the sidebar entry
    pub fn icon(&self) -> &'static str {
        match self {
            Route::Dashboard => "▦",
            Route::LiveFeed => "◉",
        }
    }

    /// Get the translation key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            Route::Dashboard => "nav.dashboard",
            Route::LiveFeed => "nav.live-feed",
        }
    }

    /// Get all available pages for sidebar
    pub fn all() -> &'static [Route] {
        &[Route::Dashboard, Route::LiveFeed]
    }
}

/// Request to show another page. Carries no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationIntent {
    pub route: Route,
}

impl NavigationIntent {
    pub fn to(route: Route) -> Self {
        Self { route }
    }

    /// The "View All" intent of the camera grid
    pub fn all_cameras() -> Self {
        Self::to(Route::LiveFeed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_cameras_targets_live_feed_token() {
        let intent = NavigationIntent::all_cameras();
        assert_eq!(intent.route, Route::LiveFeed);
        assert_eq!(intent.route.token(), "/Live-Feed");
    }
}
