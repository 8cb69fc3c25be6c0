// components/metadata_extractor/src/utils.rs
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Timestamp used in file and folder names
pub const FILE_STAMP: &str = "%Y%m%d_%H%M%S";

/// Timestamp written into the record itself
pub const CAPTURE_STAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Name of the metadata file for a capture time
///
/// `attempt` 0 is the plain name; later attempts get a numeric suffix so a
/// second file written within the same second does not collide.
pub fn generate_filename(now: NaiveDateTime, attempt: u32) -> PathBuf {
    let stamp = now.format(FILE_STAMP);
    if attempt == 0 {
        PathBuf::from(format!("metadata_{}.csv", stamp))
    } else {
        PathBuf::from(format!("metadata_{}_{}.csv", stamp, attempt))
    }
}

/// Per-run subfolder below the output directory
pub fn timestamp_subfolder(base: impl AsRef<Path>, now: NaiveDateTime) -> PathBuf {
    base.as_ref().join(now.format(FILE_STAMP).to_string())
}

/// Create the output directory, optionally with a timestamped subfolder
pub async fn prepare_output_dir(
    base: impl AsRef<Path>,
    timestamped: bool,
    now: NaiveDateTime,
) -> std::io::Result<PathBuf> {
    let base = base.as_ref();
    tokio::fs::create_dir_all(base).await?;

    if !timestamped {
        return Ok(base.to_owned());
    }

    let dir = timestamp_subfolder(base, now);
    tokio::fs::create_dir_all(&dir).await?;
    Ok(dir)
}
