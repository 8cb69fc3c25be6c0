// components/install_layout/src/settings.rs
use crate::LayoutError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings the installer leaves behind for the extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// yt-dlp executable to run
    pub ytdlp: PathBuf,

    /// Default directory for metadata files
    pub output_dir: PathBuf,

    /// Directory for the extractor log file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| LayoutError::Read {
            path: path.to_owned(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| LayoutError::Malformed {
            path: path.to_owned(),
            source,
        })
    }

    /// Load settings if the file exists
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Option<Self>, LayoutError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LayoutError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| LayoutError::Malformed {
            path: path.to_owned(),
            source,
        })?;

        std::fs::write(path, json).map_err(|source| LayoutError::Write {
            path: path.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    #[test]
    fn saved_settings_load_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            ytdlp: PathBuf::from("/opt/x/venv/bin/yt-dlp"),
            output_dir: PathBuf::from("/opt/x/data"),
            log_dir: None,
        };

        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = Settings::load_optional(dir.path().join("settings.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert_matches!(Settings::load(&path), Err(LayoutError::Malformed { .. }));
    }
}
