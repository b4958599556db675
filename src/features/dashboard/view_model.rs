//! Dashboard View Model
//!
//! What the dashboard page draws, derived from the view state and the
//! fixtures. Nothing here touches GPUI, so render output can be checked
//! without opening a window.

use crate::domain::camera::{Camera, CameraId, DetectionCounts, StatusPresentation};
use crate::domain::incident::{filter_incidents, Incident};
use crate::domain::time_filter::TimeFilter;
use crate::fixtures;
use crate::state::dashboard_state::DashboardState;
use crate::utils::clock::Clock;

/// Content of the large feed viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedView {
    pub camera_id: CameraId,
    pub name: &'static str,
    pub feed_source: &'static str,
    pub details: DetectionCounts,
    pub status: StatusPresentation,
    pub fullscreen: bool,
    /// Clock overlay text, sampled when the view is built
    pub timestamp: String,
}

impl FeedView {
    pub fn build(state: &DashboardState, clock: &dyn Clock) -> Self {
        let camera = state.selected_camera();
        Self {
            camera_id: camera.id,
            name: camera.name,
            feed_source: camera.feed_source,
            details: camera.details,
            status: camera.status.presentation(),
            fullscreen: state.is_fullscreen(),
            timestamp: clock.now_display(),
        }
    }
}

/// Where the feed panel is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPlacement {
    /// In the dashboard flow, next to the widgets
    Inline,
    /// Over the whole window, hiding header and sidebar
    Viewport,
}

impl FeedView {
    pub fn placement(&self) -> FeedPlacement {
        if self.fullscreen {
            FeedPlacement::Viewport
        } else {
            FeedPlacement::Inline
        }
    }
}

/// One tile of the "Available Cameras" grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraTileView {
    pub id: CameraId,
    pub name: &'static str,
    pub feed_source: &'static str,
    pub people: u32,
    /// Alert count, only present when there is at least one alert
    pub alerts: Option<u32>,
    pub offline: bool,
    pub selected: bool,
}

impl CameraTileView {
    pub fn new(camera: &'static Camera, state: &DashboardState) -> Self {
        Self {
            id: camera.id,
            name: camera.name,
            feed_source: camera.feed_source,
            people: camera.details.people,
            alerts: (camera.details.alerts > 0).then_some(camera.details.alerts),
            offline: !camera.is_online(),
            selected: state.is_selected(camera.id),
        }
    }

    /// Tiles for every fixture camera, in fixture order
    pub fn all(state: &DashboardState) -> Vec<Self> {
        fixtures::cameras()
            .iter()
            .map(|camera| Self::new(camera, state))
            .collect()
    }
}

/// A time range button in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterButtonView {
    pub filter: TimeFilter,
    pub active: bool,
}

impl FilterButtonView {
    pub fn all(state: &DashboardState) -> Vec<Self> {
        TimeFilter::all()
            .iter()
            .map(|&filter| Self {
                filter,
                active: state.time_filter() == filter,
            })
            .collect()
    }
}

/// Incidents listed under "Recent Incidents"
pub fn visible_incidents(
    state: &DashboardState,
) -> impl Iterator<Item = &'static Incident> + Clone {
    filter_incidents(fixtures::incidents(), state.time_filter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::camera::CameraStatus;
    use crate::utils::clock::FixedClock;
    use chrono::{Local, TimeZone};

    fn clock() -> FixedClock {
        FixedClock(
            Local
                .with_ymd_and_hms(2025, 3, 7, 14, 35, 0)
                .single()
                .expect("unambiguous local time"),
        )
    }

    #[test]
    fn feed_shows_exactly_the_selected_camera() {
        for camera in fixtures::cameras() {
            let mut state = DashboardState::default();
            state.select_camera(camera.id);
            let feed = FeedView::build(&state, &clock());

            assert_eq!(feed.camera_id, camera.id);
            assert_eq!(feed.name, camera.name);
            assert_eq!(feed.feed_source, camera.feed_source);
            assert_eq!(feed.details, camera.details);
            assert_eq!(feed.status, camera.status.presentation());
        }
    }

    #[test]
    fn clicking_storage_room_shows_offline_overlay() {
        let mut state = DashboardState::default();
        state.select_camera(CameraId(4));
        let feed = FeedView::build(&state, &clock());

        assert_eq!(feed.name, "Storage Room");
        assert_eq!(feed.status, CameraStatus::Offline.presentation());
        let overlay = feed.status.overlay.expect("offline overlay");
        assert_eq!(overlay.title_key, "feed.camera-offline");
        assert_eq!(overlay.detail_key, "feed.connection-lost");
        assert!(!feed.status.live_marker);
    }

    #[test]
    fn feed_carries_clock_and_fullscreen() {
        let mut state = DashboardState::default();
        state.toggle_fullscreen();
        let feed = FeedView::build(&state, &clock());
        assert!(feed.fullscreen);
        assert_eq!(feed.timestamp, "14:35:00");
    }

    #[test]
    fn fullscreen_moves_feed_over_the_window() {
        let mut state = DashboardState::default();
        assert_eq!(FeedView::build(&state, &clock()).placement(), FeedPlacement::Inline);

        state.toggle_fullscreen();
        assert_eq!(FeedView::build(&state, &clock()).placement(), FeedPlacement::Viewport);

        state.toggle_fullscreen();
        assert_eq!(FeedView::build(&state, &clock()).placement(), FeedPlacement::Inline);
    }

    #[test]
    fn grid_highlights_only_selected_tile() {
        let mut state = DashboardState::default();
        state.select_camera(CameraId(2));
        let tiles = CameraTileView::all(&state);

        assert_eq!(tiles.len(), 4);
        let selected: Vec<_> = tiles.iter().filter(|t| t.selected).map(|t| t.id).collect();
        assert_eq!(selected, vec![CameraId(2)]);
    }

    #[test]
    fn grid_hides_zero_alerts_and_flags_offline() {
        let tiles = CameraTileView::all(&DashboardState::default());
        let restricted = tiles.iter().find(|t| t.id == CameraId(3)).expect("camera 3");
        assert_eq!(restricted.alerts, None);
        assert!(!restricted.offline);

        let storage = tiles.iter().find(|t| t.id == CameraId(4)).expect("camera 4");
        assert_eq!(storage.alerts, Some(2));
        assert!(storage.offline);
    }

    #[test]
    fn exactly_one_filter_button_is_active() {
        let mut state = DashboardState::default();
        state.set_time_filter(TimeFilter::Week);
        let buttons = FilterButtonView::all(&state);
        let active: Vec<_> = buttons.iter().filter(|b| b.active).map(|b| b.filter).collect();
        assert_eq!(active, vec![TimeFilter::Week]);
    }

    #[test]
    fn every_filter_lists_all_incidents() {
        for &filter in TimeFilter::all() {
            let mut state = DashboardState::default();
            state.set_time_filter(filter);
            assert_eq!(visible_incidents(&state).count(), fixtures::incidents().len());
        }
    }
}
