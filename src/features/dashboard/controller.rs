//! Dashboard Controller
//!
//! Turns clicks on the dashboard into view-state transitions, navigation
//! intents and exports.

use std::path::PathBuf;

use gpui::App;
use tracing::{error, info};

use crate::app::entities::AppEntities;
use crate::domain::camera::CameraId;
use crate::domain::time_filter::TimeFilter;
use crate::fixtures::WEEKLY_REPORT_RANGE;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::{dirs, export};

/// Dashboard page controller
pub struct DashboardController {
    entities: AppEntities,
}

impl DashboardController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Show a camera in the feed panel and highlight its tile
    pub fn select_camera(&self, id: CameraId, cx: &mut App) {
        self.entities.dashboard.update(cx, |state, cx| {
            if state.select_camera(id) {
                cx.notify();
            }
        });
    }

    /// Switch the feed panel between inline and full-window layout
    pub fn toggle_fullscreen(&self, cx: &mut App) {
        self.entities.dashboard.update(cx, |state, cx| {
            state.toggle_fullscreen();
            cx.notify();
        });
    }

    pub fn set_time_filter(&self, filter: TimeFilter, cx: &mut App) {
        self.entities.dashboard.update(cx, |state, cx| {
            if state.time_filter() != filter {
                state.set_time_filter(filter);
                cx.notify();
            }
        });
    }

    /// "View All": ask for the camera-listing page. Dashboard state is left alone.
    pub fn navigate_to_all_cameras(&self, cx: &mut App) {
        self.entities.navigation.update(cx, |nav, cx| {
            let intent = nav.request_all_cameras();
            info!(route = intent.route.token(), "Navigating to camera listing");
            cx.notify();
        });
    }

    /// Write the weekly incident series to the data directory
    pub fn export_weekly_report(&self, title: &str) -> Option<PathBuf> {
        let result = dirs::data_dir().and_then(|base| {
            export::export_weekly_report(
                &base,
                title,
                WEEKLY_REPORT_RANGE,
                &self.entities.charts.weekly_incidents.data,
                SystemClock.now(),
            )
        });

        match result {
            Ok(path) => Some(path),
            Err(e) => {
                error!(error = %e, "Failed to export weekly report");
                None
            }
        }
    }
}
