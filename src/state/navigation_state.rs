//! NavigationState - Active Page and Intent History

use crate::app::navigation::{NavigationIntent, Route};
use crate::constants::NAVIGATION_HISTORY_LIMIT;
use crate::utils::bounded::BoundedDeque;

/// State for page navigation
#[derive(Debug)]
pub struct NavigationState {
    /// Currently active page
    active: Route,
    /// Most recent intents, oldest first
    history: BoundedDeque<NavigationIntent>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: Route::default(),
            history: BoundedDeque::new(NAVIGATION_HISTORY_LIMIT),
        }
    }
}

impl NavigationState {
    /// Apply an intent and make its route active
    pub fn navigate(&mut self, intent: NavigationIntent) {
        self.active = intent.route;
        self.history.push(intent);
    }

    /// Emit the camera grid's "View All" intent and return it
    pub fn request_all_cameras(&mut self) -> NavigationIntent {
        let intent = NavigationIntent::all_cameras();
        self.navigate(intent);
        intent
    }

    /// Get the active page
    pub fn active(&self) -> Route {
        self.active
    }

    /// Recent intents, capped at `NAVIGATION_HISTORY_LIMIT`
    pub fn history(&self) -> &BoundedDeque<NavigationIntent> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard() {
        let nav = NavigationState::default();
        assert_eq!(nav.active(), Route::Dashboard);
        assert!(nav.history().is_empty());
    }

    #[test]
    fn navigate_records_intent() {
        let mut nav = NavigationState::default();
        nav.navigate(NavigationIntent::to(Route::LiveFeed));
        assert_eq!(nav.active(), Route::LiveFeed);
        assert_eq!(nav.history().last(), Some(&NavigationIntent::to(Route::LiveFeed)));
    }

    #[test]
    fn view_all_emits_exactly_one_live_feed_intent() {
        let mut nav = NavigationState::default();

        let intent = nav.request_all_cameras();

        assert_eq!(intent.route.token(), "/Live-Feed");
        assert_eq!(nav.active(), Route::LiveFeed);
        assert_eq!(nav.history().len(), 1);
        assert_eq!(nav.history().last(), Some(&intent));

        // A second click from the listing is one more intent, not a burst
        nav.request_all_cameras();
        assert_eq!(nav.history().len(), 2);
    }

    #[test]
    fn history_is_capped() {
        let mut nav = NavigationState::default();
        for _ in 0..NAVIGATION_HISTORY_LIMIT + 10 {
            nav.navigate(NavigationIntent::to(Route::Dashboard));
        }
        nav.request_all_cameras();

        assert_eq!(nav.history().len(), NAVIGATION_HISTORY_LIMIT);
        assert_eq!(nav.history().last(), Some(&NavigationIntent::all_cameras()));
    }
}
