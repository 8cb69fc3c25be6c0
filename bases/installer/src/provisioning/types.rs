//! Installation pipeline stage types
//!
//! Each type is the output of one stage and the input of the next, so
//! stages cannot be skipped or run out of order.

use install_layout::{InstallLayout, Settings};
use std::fmt;
use std::path::PathBuf;

// ============================================================================
// Stage 0: Platform
// ============================================================================

/// Host with a usable Python interpreter
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub python: PathBuf,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "✅ Python available at {}", self.python.display())
    }
}

// ============================================================================
// Stage 1: Directory
// ============================================================================

/// Installation root that exists (or would exist) and is writable
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedDirectory {
    pub platform: Platform,
    pub layout: InstallLayout,
}

impl fmt::Display for PreparedDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "✅ Installing into {}", self.layout.root().display())
    }
}

// ============================================================================
// Stage 2: Virtual environment
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct VirtualEnv {
    pub layout: InstallLayout,
}

impl fmt::Display for VirtualEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "✅ Virtual environment at {}", self.layout.venv_dir().display())
    }
}

// ============================================================================
// Stage 3: Dependencies
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct InstalledDependencies {
    pub layout: InstallLayout,
    pub ytdlp_version: String,
}

impl fmt::Display for InstalledDependencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "✅ yt-dlp {} installed", self.ytdlp_version)
    }
}

// ============================================================================
// Stage 4: Layout
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutInstallation {
    pub layout: InstallLayout,
    pub settings: Settings,
}

impl fmt::Display for LaidOutInstallation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✅ Directories and settings written to {}",
            self.layout.root().display()
        )
    }
}

// ============================================================================
// Stage 5: Verification
// ============================================================================

/// Installation that passed verification
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedInstallation {
    pub layout: InstallLayout,
    /// Version yt-dlp reported, absent in dry-run
    pub reported_version: Option<String>,
}

impl fmt::Display for VerifiedInstallation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reported_version {
            Some(version) => write!(f, "✅ Installation verified (yt-dlp {})", version),
            None => write!(f, "✅ Installation would be verified"),
        }
    }
}
