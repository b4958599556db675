//! DashboardState - View State of the Security Dashboard
//!
//! The only mutable data on the dashboard: which camera is shown, whether
//! the feed panel covers the window, and the header time range.

use tracing::{debug, warn};

use crate::domain::camera::{Camera, CameraId};
use crate::domain::time_filter::TimeFilter;
use crate::fixtures;

/// View state owned by the dashboard page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    selected_camera: CameraId,
    fullscreen: bool,
    time_filter: TimeFilter,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(fixtures::cameras())
    }
}

impl DashboardState {
    /// Initial state: first camera, inline feed, "today"
    pub fn new(cameras: &[Camera]) -> Self {
        Self {
            selected_camera: cameras.first().map(|c| c.id).unwrap_or(CameraId(1)),
            fullscreen: false,
            time_filter: TimeFilter::default(),
        }
    }

    // ==================== Getters ====================

    pub fn selected_camera_id(&self) -> CameraId {
        self.selected_camera
    }

    /// The camera shown in the feed panel
    pub fn selected_camera(&self) -> &'static Camera {
        fixtures::camera(self.selected_camera).unwrap_or(&fixtures::cameras()[0])
    }

    pub fn is_selected(&self, id: CameraId) -> bool {
        self.selected_camera == id
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn time_filter(&self) -> TimeFilter {
        self.time_filter
    }

    // ==================== Transitions ====================

    /// Show another fixture camera. Unknown ids are ignored.
    pub fn select_camera(&mut self, id: CameraId) -> bool {
        if fixtures::camera(id).is_none() {
            warn!(camera_id = %id, "Ignoring selection of unknown camera");
            return false;
        }
        debug!(from = %self.selected_camera, to = %id, "Camera selected");
        self.selected_camera = id;
        true
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        debug!(fullscreen = self.fullscreen, "Fullscreen toggled");
    }

    /// Store the time range. Displayed data doesn't depend on it yet.
    pub fn set_time_filter(&mut self, filter: TimeFilter) {
        debug!(filter = filter.as_str(), "Time filter set");
        self.time_filter = filter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn initial_state() {
        let state = DashboardState::default();
        assert_eq!(state.selected_camera_id(), CameraId(1));
        assert_eq!(state.selected_camera().name, "Front Entrance");
        assert!(!state.is_fullscreen());
        assert_eq!(state.time_filter(), TimeFilter::Today);
    }

    #[test]
    fn select_offline_camera() {
        let mut state = DashboardState::default();
        assert!(state.select_camera(CameraId(4)));
        assert_eq!(state.selected_camera().name, "Storage Room");
        assert!(!state.selected_camera().is_online());
        assert!(state.is_selected(CameraId(4)));
        assert!(!state.is_selected(CameraId(1)));
    }

    #[test]
    fn unknown_camera_is_ignored() {
        let mut state = DashboardState::default();
        let before = state.clone();
        assert!(!state.select_camera(CameraId(42)));
        assert_eq!(state, before);
    }

    #[test]
    fn time_filter_is_stored_verbatim() {
        let mut state = DashboardState::default();
        state.set_time_filter(TimeFilter::Month);
        assert_eq!(state.time_filter(), TimeFilter::Month);
        assert_eq!(state.time_filter().as_str(), "month");
    }

    fn transition() -> impl Strategy<Value = (u8, u32)> {
        (0u8..3, 1u32..5)
    }

    proptest! {
        #[test]
        fn toggle_fullscreen_twice_is_identity(
            steps in prop::collection::vec(transition(), 0..16)
        ) {
            let mut state = DashboardState::default();
            for (kind, arg) in steps {
                match kind {
                    0 => { state.select_camera(CameraId(arg)); }
                    1 => state.toggle_fullscreen(),
                    _ => state.set_time_filter(TimeFilter::all()[(arg as usize) % 3]),
                }
            }

            let before = state.clone();
            state.toggle_fullscreen();
            prop_assert_ne!(state.is_fullscreen(), before.is_fullscreen());
            state.toggle_fullscreen();
            prop_assert_eq!(state, before);
        }

        #[test]
        fn any_fixture_camera_can_be_selected(idx in 0usize..4) {
            let camera = &fixtures::cameras()[idx];
            let mut state = DashboardState::default();
            prop_assert!(state.select_camera(camera.id));
            prop_assert_eq!(state.selected_camera(), camera);
        }
    }
}
