// components/metadata_extractor/src/lib.rs
mod batch;
mod types;
mod utils;
mod writer;
mod ytdlp;

use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use batch::{parse_batch, percent, read_batch_file};
pub use types::{
    BatchReport, ExtractError, ExtractOutcome, MetadataRecord, Progress, VideoInfo, COLUMNS,
};
pub use utils::{generate_filename, prepare_output_dir, timestamp_subfolder};
pub use writer::write_record;
pub use ytdlp::{MetadataFetcher, YtDlp};

pub struct MetadataExtractor {
    output_dir: PathBuf,
    fetcher: Arc<dyn MetadataFetcher + Send + Sync>,
}

impl MetadataExtractor {
    /// Create an extractor that runs the given yt-dlp and writes into `output_dir`
    pub async fn new(output_dir: impl AsRef<Path>, ytdlp: YtDlp) -> Result<Self, ExtractError> {
        Self::with_fetcher(output_dir, Arc::new(ytdlp)).await
    }

    /// Create an extractor with a specific fetcher implementation
    pub async fn with_fetcher(
        output_dir: impl AsRef<Path>,
        fetcher: Arc<dyn MetadataFetcher + Send + Sync>,
    ) -> Result<Self, ExtractError> {
        fetcher.check_available().await?;

        let output_dir = output_dir.as_ref().to_owned();
        tokio::fs::create_dir_all(&output_dir).await?;

        Ok(Self {
            output_dir,
            fetcher,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Fetch metadata for one URL and write it to a new file
    ///
    /// Nothing is written when the fetch fails.
    pub async fn extract(&self, url: &str, progress: &dyn Progress) -> Result<PathBuf, ExtractError> {
        progress.message(&format!("Processing URL: {}", url));

        match self.fetch_and_write(url, progress).await {
            Ok(path) => {
                progress.message(&format!("Successfully processed: {}", url));
                Ok(path)
            }
            Err(e) => {
                progress.message(&format!("Error processing {}: {}", url, e));
                tracing::error!("Error processing {}: {}", url, e);
                Err(e)
            }
        }
    }

    async fn fetch_and_write(&self, url: &str, progress: &dyn Progress) -> Result<PathBuf, ExtractError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ExtractError::InvalidUrl("no URL given".to_string()));
        }

        let info = self.fetcher.fetch_metadata(url).await?;

        let now = Local::now().naive_local();
        let record = MetadataRecord::from_info(info, now);

        // The final name is only known once the staged file is in place
        let path = write_record(&self.output_dir, &record, now)?;
        progress.message(&format!("Saving metadata to: {}", path.display()));
        tracing::info!(path = %path.display(), "metadata saved");

        Ok(path)
    }

    /// Process one URL, reporting failure instead of returning it
    pub async fn process_url(&self, url: &str, progress: &dyn Progress) -> ExtractOutcome {
        match self.extract(url, progress).await {
            Ok(path) => ExtractOutcome::Saved {
                url: url.to_string(),
                path,
            },
            Err(e) => {
                progress.message(&format!("Failed to process: {}", url));
                ExtractOutcome::Failed {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Process every URL in order; failures are recorded and the batch continues
    pub async fn process_batch(&self, urls: &[String], progress: &dyn Progress) -> BatchReport {
        let total = urls.len();
        let mut report = BatchReport::default();

        for (i, url) in urls.iter().enumerate() {
            let done = i + 1;
            progress.message(&format!("Processing URL {}/{}", done, total));
            progress.advance(done, total);

            report.outcomes.push(self.process_url(url, progress).await);
        }

        tracing::info!(
            total = report.total(),
            succeeded = report.succeeded(),
            "batch finished"
        );
        report
    }
}
