// components/metadata_extractor/src/types.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};
use std::path::PathBuf;
use thiserror::Error;

use crate::utils::CAPTURE_STAMP;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Required tool not found: {0}")]
    ToolNotFound(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Metadata fetch failed: {0}")]
    FetchFailed(String),

    #[error("Unreadable metadata: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Fields of the yt-dlp info document the record is built from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoInfo {
    pub id: Option<String>,
    pub title: Option<String>,
    pub upload_date: Option<String>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub duration: Option<f64>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    pub description: Option<String>,
}

/// One output row. Field order is the column order of the written file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataRecord {
    pub video_id: Option<String>,
    pub title: Option<String>,
    pub upload_date: Option<String>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    #[serde(serialize_with = "seconds")]
    pub duration: Option<f64>,
    pub tags: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub scrape_timestamp: String,
}

pub const COLUMNS: [&str; 10] = [
    "video_id",
    "title",
    "upload_date",
    "view_count",
    "like_count",
    "duration",
    "tags",
    "category",
    "description",
    "scrape_timestamp",
];

impl MetadataRecord {
    pub fn from_info(info: VideoInfo, captured_at: NaiveDateTime) -> Self {
        let category = info
            .category
            .or_else(|| info.categories.and_then(|c| c.into_iter().next()));

        Self {
            video_id: info.id,
            title: info.title,
            upload_date: info.upload_date,
            view_count: info.view_count,
            like_count: info.like_count,
            duration: info.duration,
            tags: info.tags.unwrap_or_default().join("|"),
            category,
            description: info.description,
            scrape_timestamp: captured_at.format(CAPTURE_STAMP).to_string(),
        }
    }
}

// Whole seconds are written without a fractional part
fn seconds<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(secs) if secs.is_finite() && secs.fract() == 0.0 && *secs >= 0.0 => {
            serializer.serialize_u64(*secs as u64)
        }
        Some(secs) => serializer.serialize_f64(*secs),
        None => serializer.serialize_none(),
    }
}

/// Receives progress lines and bar updates while URLs are processed
pub trait Progress {
    fn message(&self, message: &str);

    fn advance(&self, _done: usize, _total: usize) {}
}

/// Discards all progress
impl Progress for () {
    fn message(&self, _message: &str) {}
}

/// Result of processing one URL
#[derive(Debug)]
pub enum ExtractOutcome {
    Saved { url: String, path: PathBuf },
    Failed { url: String, reason: String },
}

impl ExtractOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractOutcome::Saved { .. })
    }

    pub fn url(&self) -> &str {
        match self {
            ExtractOutcome::Saved { url, .. } | ExtractOutcome::Failed { url, .. } => url,
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ExtractOutcome>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &ExtractOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(ExtractOutcome::is_success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn captured() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    #[test]
    fn tags_are_pipe_joined() {
        let info = VideoInfo {
            tags: Some(vec!["rust".into(), "video".into(), "metadata".into()]),
            ..Default::default()
        };

        let record = MetadataRecord::from_info(info, captured());
        assert_eq!(record.tags, "rust|video|metadata");
    }

    #[test]
    fn missing_tags_become_empty() {
        let record = MetadataRecord::from_info(VideoInfo::default(), captured());
        assert_eq!(record.tags, "");
        assert_eq!(record.video_id, None);
    }

    #[test]
    fn category_falls_back_to_categories() {
        let info = VideoInfo {
            categories: Some(vec!["Music".into(), "Entertainment".into()]),
            ..Default::default()
        };

        let record = MetadataRecord::from_info(info, captured());
        assert_eq!(record.category.as_deref(), Some("Music"));
    }

    #[test]
    fn explicit_category_wins() {
        let info = VideoInfo {
            category: Some("Education".into()),
            categories: Some(vec!["Music".into()]),
            ..Default::default()
        };

        let record = MetadataRecord::from_info(info, captured());
        assert_eq!(record.category.as_deref(), Some("Education"));
    }

    #[test]
    fn scrape_timestamp_format() {
        let record = MetadataRecord::from_info(VideoInfo::default(), captured());
        assert_eq!(record.scrape_timestamp, "2024-03-10 14:05:09");
    }

    #[test]
    fn info_parses_ytdlp_json() {
        let json = r#"{
            "id": "dQw4w9WgXcQ",
            "title": "Some Title",
            "upload_date": "20091025",
            "view_count": 1500000000,
            "like_count": null,
            "duration": 212,
            "tags": ["a", "b"],
            "categories": ["Music"],
            "description": "desc",
            "formats": []
        }"#;

        let info: VideoInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(info.view_count, Some(1_500_000_000));
        assert_eq!(info.like_count, None);
        assert_eq!(info.duration, Some(212.0));
        assert_eq!(info.category, None);
    }

    #[test]
    fn batch_report_counts() {
        let report = BatchReport {
            outcomes: vec![
                ExtractOutcome::Saved {
                    url: "https://a".into(),
                    path: PathBuf::from("/tmp/a.csv"),
                },
                ExtractOutcome::Failed {
                    url: "https://b".into(),
                    reason: "boom".into(),
                },
            ],
        };

        assert_eq!(report.total(), 2);
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed().count(), 1);
        assert!(!report.all_succeeded());
    }
}
