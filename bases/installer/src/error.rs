//! Installer error types with operation context

use install_layout::LayoutError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallerError {
    #[error("platform check failed: {0}")]
    Platform(String),

    #[error("an installation already exists at {0}")]
    ExistingInstallation(PathBuf),

    #[error("no {permission} permission on {path}")]
    Permission {
        path: PathBuf,
        permission: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install: {0}")]
    Installation(String),

    #[error("verification failed: {0}")]
    Verification(String),

    #[error("io error during {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("command execution failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command returned non-zero exit code: {command}\nStderr: {stderr}")]
    CommandExitCode { command: String, stderr: String },
}

impl InstallerError {
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        InstallerError::Io {
            operation: operation.into(),
            source,
        }
    }

    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        InstallerError::CommandFailed {
            command: command.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, InstallerError>;
