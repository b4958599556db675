//! Fixtures - Sample Dashboard Data
//!
//! Hardcoded values standing in for a real data source. Everything here is
//! created once and never mutated.

use crate::domain::camera::{Camera, CameraId, CameraStatus, DetectionCounts};
use crate::domain::incident::{Incident, Severity};
use crate::domain::series::{ChartOptions, LegendPosition, Series, TimeSeries};
use crate::domain::stat::{StatIcon, StatTile, Trend};
use crate::domain::system_status::{ComponentStatus, SystemComponent};
use crate::error::Result;

static CAMERAS: [Camera; 4] = [
    Camera {
        id: CameraId(1),
        name: "Front Entrance",
        feed_source: "https://developer-blogs.nvidia.com/wp-content/uploads/2022/12/Figure8-output_blurred-compressed.gif",
        details: DetectionCounts {
            people: 4,
            vehicles: 1,
            alerts: 4,
            objects: 5,
        },
        status: CameraStatus::Online,
    },
    Camera {
        id: CameraId(2),
        name: "Parking Lot",
        feed_source: "https://user-images.githubusercontent.com/11428131/139924111-58637f2e-f2f6-42d8-8812-ab42fece92b4.gif",
        details: DetectionCounts {
            people: 2,
            vehicles: 3,
            alerts: 1,
            objects: 2,
        },
        status: CameraStatus::Online,
    },
    Camera {
        id: CameraId(3),
        name: "Restricted Area",
        feed_source: "https://developer-blogs.nvidia.com/wp-content/uploads/2024/05/gif-people-in-store-bounding-boxes.gif",
        details: DetectionCounts {
            people: 0,
            vehicles: 0,
            alerts: 0,
            objects: 1,
        },
        status: CameraStatus::Online,
    },
    Camera {
        id: CameraId(4),
        name: "Storage Room",
        feed_source: "https://user-images.githubusercontent.com/11428131/137016574-0d180d9b-fb9a-42a9-94b7-fbc0dbc18560.gif",
        details: DetectionCounts {
            people: 1,
            vehicles: 0,
            alerts: 2,
            objects: 3,
        },
        status: CameraStatus::Offline,
    },
];

static INCIDENTS: [Incident; 4] = [
    Incident {
        title: "Unauthorized Access",
        location: "Front Entrance",
        time: "14:35",
        severity: Severity::High,
        is_new: true,
    },
    Incident {
        title: "Vehicle Stopped",
        location: "Parking Lot",
        time: "10:35",
        severity: Severity::Low,
        is_new: false,
    },
    Incident {
        title: "Person Detected",
        location: "Restricted Area",
        time: "14:35",
        severity: Severity::Medium,
        is_new: true,
    },
    Incident {
        title: "Motion Detected",
        location: "Storage Room",
        time: "14:35",
        severity: Severity::Low,
        is_new: false,
    },
];

static SYSTEM_COMPONENTS: [SystemComponent; 4] = [
    SystemComponent {
        title: "Video Processing",
        status_text: "Operational",
        status: ComponentStatus::Operational,
    },
    SystemComponent {
        title: "Object Detection",
        status_text: "Operational",
        status: ComponentStatus::Operational,
    },
    SystemComponent {
        title: "Facial Recognition",
        status_text: "Degraded",
        status: ComponentStatus::Degraded,
    },
    SystemComponent {
        title: "License Plate Reader",
        status_text: "Offline",
        status: ComponentStatus::Offline,
    },
];

static STAT_TILES: [StatTile; 4] = [
    StatTile {
        icon: StatIcon::Camera,
        title: "Total Cameras",
        value: "5",
        description: "4 offline, 8 online",
        trend: Trend::Neutral,
    },
    StatTile {
        icon: StatIcon::People,
        title: "Active Detections",
        value: "25",
        description: "+15% from last hour",
        trend: Trend::Up,
    },
    StatTile {
        icon: StatIcon::Notification,
        title: "Current Alerts",
        value: "7",
        description: "+2 new alerts",
        trend: Trend::Up,
    },
    StatTile {
        icon: StatIcon::Heartbeat,
        title: "System Status",
        value: "Optimal",
        description: "All systems operational",
        trend: Trend::Neutral,
    },
];

/// Date range shown under the weekly report title
pub const WEEKLY_REPORT_RANGE: &str = "March 1 - March 7, 2025";

pub fn cameras() -> &'static [Camera] {
    &CAMERAS
}

pub fn incidents() -> &'static [Incident] {
    &INCIDENTS
}

pub fn system_components() -> &'static [SystemComponent] {
    &SYSTEM_COMPONENTS
}

pub fn stat_tiles() -> &'static [StatTile] {
    &STAT_TILES
}

/// Look up a fixture camera by id
pub fn camera(id: CameraId) -> Option<&'static Camera> {
    CAMERAS.iter().find(|c| c.id == id)
}

/// Incidents reported per day over the first week of March
pub fn daily_incidents() -> Result<TimeSeries> {
    TimeSeries::new(
        [
            "March 1", "March 2", "March 3", "March 4", "March 5", "March 6", "March 7",
        ],
        vec![Series::new("Incidents Reported", vec![3, 5, 2, 6, 8, 4, 7])],
    )
}

/// People detected per hour during today's shift
pub fn hourly_detections() -> Result<TimeSeries> {
    TimeSeries::new(
        [
            "8:00", "9:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00",
        ],
        vec![Series::new("People", vec![4, 3, 7, 12, 9, 8, 17, 25])],
    )
}

/// A time series together with the options it is drawn with
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFixture {
    pub data: TimeSeries,
    pub options: ChartOptions,
}

/// Both chart widgets of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCharts {
    pub weekly_incidents: ChartFixture,
    pub detection_trend: ChartFixture,
}

impl DashboardCharts {
    pub fn load() -> Result<Self> {
        Ok(Self {
            weekly_incidents: ChartFixture {
                data: daily_incidents()?,
                options: ChartOptions {
                    responsive: Some(true),
                    legend_position: Some(LegendPosition::Top),
                    title_text: Some("Weekly Incident Report".to_string()),
                    height: Some(crate::constants::WEEKLY_CHART_HEIGHT),
                    ..Default::default()
                },
            },
            detection_trend: ChartFixture {
                data: hourly_detections()?,
                options: ChartOptions {
                    maintain_aspect_ratio: Some(false),
                    begin_at_zero: Some(true),
                    y_axis_title: Some("Count".to_string()),
                    x_axis_title: Some("Time".to_string()),
                    legend_position: Some(LegendPosition::Top),
                    height: Some(crate::constants::DETECTION_CHART_HEIGHT),
                    ..Default::default()
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn camera_ids_are_unique() {
        let ids: HashSet<_> = cameras().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), cameras().len());
    }

    #[test]
    fn first_camera_is_front_entrance() {
        let first = &cameras()[0];
        assert_eq!(first.id, CameraId(1));
        assert_eq!(first.name, "Front Entrance");
    }

    #[test]
    fn storage_room_is_offline() {
        let cam = camera(CameraId(4)).expect("storage room");
        assert_eq!(cam.name, "Storage Room");
        assert_eq!(cam.status, CameraStatus::Offline);
        assert!(camera(CameraId(99)).is_none());
    }

    #[test]
    fn daily_incident_series_has_seven_points() {
        let ts = daily_incidents().expect("daily series");
        assert_eq!(ts.labels().len(), 7);
        for series in ts.series() {
            assert_eq!(series.data.len(), 7);
        }
        assert_eq!(ts.series()[0].data, vec![3, 5, 2, 6, 8, 4, 7]);
    }

    #[test]
    fn hourly_detection_series_has_eight_points() {
        let ts = hourly_detections().expect("hourly series");
        assert_eq!(ts.labels().len(), 8);
        for series in ts.series() {
            assert_eq!(series.data.len(), 8);
        }
        assert_eq!(ts.series()[0].label, "People");
    }

    #[test]
    fn charts_pass_data_through_untouched() {
        let charts = DashboardCharts::load().expect("charts");
        assert_eq!(charts.weekly_incidents.data, daily_incidents().expect("daily"));
        assert_eq!(charts.detection_trend.data, hourly_detections().expect("hourly"));
        assert_eq!(
            charts.weekly_incidents.options.title_text.as_deref(),
            Some("Weekly Incident Report")
        );
        assert_eq!(charts.detection_trend.options.y_axis_title.as_deref(), Some("Count"));
    }

    #[test]
    fn stat_values_are_verbatim() {
        let values: Vec<_> = stat_tiles().iter().map(|s| s.value).collect();
        assert_eq!(values, vec!["5", "25", "7", "Optimal"]);
    }
}
