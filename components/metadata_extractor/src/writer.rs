// components/metadata_extractor/src/writer.rs
use crate::types::{ExtractError, MetadataRecord};
use crate::utils::generate_filename;
use chrono::NaiveDateTime;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Write a header and a single row for `record` into a fresh file in `dir`
///
/// The file is staged next to its final name and only moved into place once
/// complete. Existing files are never replaced.
pub fn write_record(
    dir: &Path,
    record: &MetadataRecord,
    now: NaiveDateTime,
) -> Result<PathBuf, ExtractError> {
    let mut staged = NamedTempFile::new_in(dir)?;

    {
        let mut writer = csv::Writer::from_writer(staged.as_file_mut());
        writer.serialize(record)?;
        writer.flush()?;
    }

    let mut attempt = 0;
    loop {
        let path = dir.join(generate_filename(now, attempt));
        match staged.persist_noclobber(&path) {
            Ok(_) => return Ok(path),
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
                staged = e.file;
                attempt += 1;
            }
            Err(e) => return Err(e.error.into()),
        }
    }
}
