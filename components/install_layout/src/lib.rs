//! Installation directory layout shared by the extractor and its installer
//!
//! The installer lays out a root directory; the extractor later finds that
//! root again and reads the settings the installer left behind.
//!
//! # Examples
//!
//! ```
//! use install_layout::InstallLayout;
//!
//! let layout = InstallLayout::new("/opt/yt-data-extractor");
//! assert!(layout.data_dir().ends_with("data"));
//! assert!(layout.settings_file().ends_with("settings.json"));
//! ```

mod settings;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use settings::Settings;

/// Directories every installation must contain
pub const REQUIRED_DIRS: [&str; 4] = ["data", "master", "logs", "temp"];

const VENV_DIR: &str = "venv";
const BIN_DIR: &str = "bin";
const SETTINGS_FILE: &str = "settings.json";
const REQUIREMENTS_FILE: &str = "requirements.txt";

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings in {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Paths of an installation rooted at a single directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    root: PathBuf,
}

impl InstallLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locate the installation root starting from `cwd`
    ///
    /// The root is the first of `cwd` or its parent that contains a `data`
    /// directory. Falls back to `cwd` when neither does.
    pub fn discover(cwd: impl AsRef<Path>) -> Self {
        let cwd = cwd.as_ref();

        if cwd.join("data").is_dir() {
            return Self::new(cwd);
        }

        if let Some(parent) = cwd.parent() {
            if parent.join("data").is_dir() {
                return Self::new(parent);
            }
        }

        Self::new(cwd)
    }

    /// First `<root>_<n>` sibling that does not exist yet
    pub fn next_free(root: impl AsRef<Path>) -> PathBuf {
        let root = root.as_ref();
        let base = root.as_os_str().to_string_lossy().into_owned();

        let mut counter = 1;
        loop {
            let candidate = PathBuf::from(format!("{}_{}", base, counter));
            if !candidate.exists() {
                return candidate;
            }
            counter += 1;
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(BIN_DIR)
    }

    pub fn required_dirs(&self) -> Vec<PathBuf> {
        REQUIRED_DIRS.iter().map(|d| self.root.join(d)).collect()
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    pub fn requirements_file(&self) -> PathBuf {
        self.root.join(REQUIREMENTS_FILE)
    }

    pub fn venv_dir(&self) -> PathBuf {
        self.root.join(VENV_DIR)
    }

    /// Executables directory inside the virtual environment
    pub fn venv_bin_dir(&self) -> PathBuf {
        let bin = if cfg!(windows) { "Scripts" } else { "bin" };
        self.venv_dir().join(bin)
    }

    pub fn venv_python(&self) -> PathBuf {
        self.venv_bin_dir().join(executable("python"))
    }

    pub fn venv_pip(&self) -> PathBuf {
        self.venv_bin_dir().join(executable("pip"))
    }

    pub fn venv_ytdlp(&self) -> PathBuf {
        self.venv_bin_dir().join(executable("yt-dlp"))
    }

    /// Settings pointing the extractor at this installation
    pub fn default_settings(&self) -> Settings {
        Settings {
            ytdlp: self.venv_ytdlp(),
            output_dir: self.data_dir(),
            log_dir: Some(self.logs_dir()),
        }
    }
}

/// Append the platform executable suffix
pub fn executable(name: &str) -> String {
    format!("{}{}", name, std::env::consts::EXE_SUFFIX)
}
