//! Camera - Surveillance Camera Fixture Types

use serde::{Deserialize, Serialize};

use crate::domain::style::{BadgeStyle, Tone};

/// Stable camera identifier, unique within the camera set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CameraId(pub u32);

impl std::fmt::Display for CameraId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connection status of a camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    Online,
    Offline,
}

/// Per-camera detection counters shown in the feed overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionCounts {
    pub people: u32,
    pub vehicles: u32,
    pub alerts: u32,
    pub objects: u32,
}

/// A single camera with its feed source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Camera {
    pub id: CameraId,
    pub name: &'static str,
    /// Opaque image URI, handed to the image loader untouched
    pub feed_source: &'static str,
    pub details: DetectionCounts,
    pub status: CameraStatus,
}

impl Camera {
    pub fn is_online(&self) -> bool {
        self.status == CameraStatus::Online
    }
}

/// Warning block drawn over the feed of an offline camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfflineOverlay {
    /// Translation key of the headline ("Camera Offline")
    pub title_key: &'static str,
    /// Translation key of the detail line ("Connection lost")
    pub detail_key: &'static str,
    /// Tint of the warning icon
    pub icon_tone: Tone,
}

/// Everything the feed panel derives from a camera status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPresentation {
    /// Translation key of the header badge ("Live" / "Offline")
    pub badge_key: &'static str,
    pub badge: BadgeStyle,
    /// Whether the pulsing "LIVE" marker is drawn next to the camera name
    pub live_marker: bool,
    pub overlay: Option<OfflineOverlay>,
}

impl CameraStatus {
    /// Badge, marker and overlay for this status
    pub fn presentation(self) -> StatusPresentation {
        match self {
            CameraStatus::Online => StatusPresentation {
                badge_key: "feed.live",
                badge: BadgeStyle::tinted(Tone::Green),
                live_marker: true,
                overlay: None,
            },
            CameraStatus::Offline => StatusPresentation {
                badge_key: "feed.offline",
                badge: BadgeStyle::tinted(Tone::Red),
                live_marker: false,
                overlay: Some(OfflineOverlay {
                    title_key: "feed.camera-offline",
                    detail_key: "feed.connection-lost",
                    icon_tone: Tone::Yellow,
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn online_status_shows_live_marker_without_overlay() {
        let p = CameraStatus::Online.presentation();
        assert_eq!(p.badge_key, "feed.live");
        assert_eq!(p.badge, BadgeStyle::tinted(Tone::Green));
        assert!(p.live_marker);
        assert!(p.overlay.is_none());
    }

    #[test]
    fn offline_status_shows_overlay() {
        let p = CameraStatus::Offline.presentation();
        assert_eq!(p.badge_key, "feed.offline");
        assert_eq!(p.badge, BadgeStyle::tinted(Tone::Red));
        assert!(!p.live_marker);

        let overlay = p.overlay.expect("offline overlay");
        assert_eq!(overlay.title_key, "feed.camera-offline");
        assert_eq!(overlay.detail_key, "feed.connection-lost");
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&CameraStatus::Offline).expect("serialize");
        assert_eq!(json, "\"offline\"");
    }
}
