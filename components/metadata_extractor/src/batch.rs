// components/metadata_extractor/src/batch.rs
use crate::types::ExtractError;
use std::path::Path;

/// Read a batch file: one URL per line, surrounding whitespace and blank lines ignored
pub async fn read_batch_file(path: impl AsRef<Path>) -> Result<Vec<String>, ExtractError> {
    let contents = tokio::fs::read_to_string(path.as_ref()).await?;
    Ok(parse_batch(&contents))
}

pub fn parse_batch(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Percentage shown on the progress bar after `done` of `total` items
pub fn percent(done: usize, total: usize) -> usize {
    if total == 0 {
        return 100;
    }
    done * 100 / total
}
