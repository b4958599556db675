//! Export - Weekly Report Export

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::info;

use crate::constants::EXPORT_DIR_NAME;
use crate::domain::series::TimeSeries;
use crate::error::Result;
use crate::utils::format::format_file_stamp;

#[derive(Serialize)]
struct WeeklyReport<'a> {
    title: &'a str,
    range: &'a str,
    exported_at: String,
    #[serde(flatten)]
    data: &'a TimeSeries,
}

/// Write the weekly incident series as pretty JSON under `<base>/exports/`
pub fn export_weekly_report(
    base_dir: &Path,
    title: &str,
    range: &str,
    data: &TimeSeries,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    let dir = base_dir.join(EXPORT_DIR_NAME);
    fs::create_dir_all(&dir)?;

    let path = dir.join(format!("weekly-incidents-{}.json", format_file_stamp(&now)));
    let report = WeeklyReport {
        title,
        range,
        exported_at: now.to_rfc3339(),
        data,
    };
    fs::write(&path, serde_json::to_string_pretty(&report)?)?;

    info!(path = ?path, points = data.len(), "Weekly report exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chrono::TimeZone;

    #[test]
    fn writes_series_as_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let now = Local
            .with_ymd_and_hms(2025, 3, 8, 9, 0, 0)
            .single()
            .expect("unambiguous local time");
        let data = fixtures::daily_incidents().expect("daily series");

        let path = export_weekly_report(
            dir.path(),
            "Weekly Incident Report",
            "March 1 - March 7, 2025",
            &data,
            now,
        )
        .expect("export");

        assert!(path.ends_with("exports/weekly-incidents-20250308-090000.json"));
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(json["labels"].as_array().map(Vec::len), Some(7));
        assert_eq!(json["series"][0]["label"], "Incidents Reported");
        assert_eq!(json["series"][0]["data"][4], 8);
        assert_eq!(json["range"], "March 1 - March 7, 2025");
    }
}
