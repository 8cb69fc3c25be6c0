// components/metadata_extractor/src/ytdlp.rs
use crate::types::{ExtractError, VideoInfo};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

#[async_trait]
pub trait MetadataFetcher {
    /// Check if the fetcher's external tool can be run
    async fn check_available(&self) -> Result<(), ExtractError>;

    /// Fetch the info document for a URL without downloading any media
    async fn fetch_metadata(&self, url: &str) -> Result<VideoInfo, ExtractError>;
}

/// Runs the yt-dlp executable and reads its single JSON document
#[derive(Debug, Clone)]
pub struct YtDlp {
    program: PathBuf,
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

impl YtDlp {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[async_trait]
impl MetadataFetcher for YtDlp {
    async fn check_available(&self) -> Result<(), ExtractError> {
        which::which(&self.program)
            .map(|path| tracing::debug!("using yt-dlp at {}", path.display()))
            .map_err(|_| ExtractError::ToolNotFound(self.program.display().to_string()))
    }

    async fn fetch_metadata(&self, url: &str) -> Result<VideoInfo, ExtractError> {
        tracing::debug!("fetching metadata for {}", url);

        let output = Command::new(&self.program)
            .arg("--dump-single-json")
            .arg("--no-download")
            .arg("--no-warnings")
            .arg("--flat-playlist")
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            return Err(ExtractError::FetchFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let info: VideoInfo = serde_json::from_slice(&output.stdout)?;
        tracing::trace!("{:#?}", info);

        Ok(info)
    }
}

#[cfg(test)]
pub mod stub {
    use super::*;

    /// Returns a fixed info document, or fails for URLs containing "fail"
    pub struct FetcherStub;

    pub fn sample_info() -> VideoInfo {
        VideoInfo {
            id: Some("abc123".to_string()),
            title: Some("Test Video".to_string()),
            upload_date: Some("20240310".to_string()),
            view_count: Some(1000),
            like_count: Some(50),
            duration: Some(180.0),
            tags: Some(vec!["first".to_string(), "second".to_string()]),
            category: None,
            categories: Some(vec!["Education".to_string()]),
            description: Some("A test description".to_string()),
        }
    }

    #[async_trait]
    impl MetadataFetcher for FetcherStub {
        async fn check_available(&self) -> Result<(), ExtractError> {
            Ok(())
        }

        async fn fetch_metadata(&self, url: &str) -> Result<VideoInfo, ExtractError> {
            if url.contains("fail") {
                return Err(ExtractError::FetchFailed("ERROR: video unavailable".to_string()));
            }
            Ok(sample_info())
        }
    }

    /// Remembers every input it was asked for
    #[derive(Default)]
    pub struct RecordingFetcher {
        pub seen: std::sync::Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MetadataFetcher for RecordingFetcher {
        async fn check_available(&self) -> Result<(), ExtractError> {
            Ok(())
        }

        async fn fetch_metadata(&self, url: &str) -> Result<VideoInfo, ExtractError> {
            self.seen.lock().unwrap().push(url.to_string());
            Ok(sample_info())
        }
    }

    /// Fetcher whose tool is never available
    pub struct MissingTool;

    #[async_trait]
    impl MetadataFetcher for MissingTool {
        async fn check_available(&self) -> Result<(), ExtractError> {
            Err(ExtractError::ToolNotFound("yt-dlp".to_string()))
        }

        async fn fetch_metadata(&self, _url: &str) -> Result<VideoInfo, ExtractError> {
            unreachable!("fetch on unavailable tool")
        }
    }
}
