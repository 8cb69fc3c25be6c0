// bases/installer/src/provisioning/stage0_platform.rs
//! Stage 0: Verify a Python interpreter with venv and pip is available

use crate::actions::Action;
use crate::command;
use crate::error::{InstallerError, Result};
use crate::provisioning::types::Platform;
use std::path::PathBuf;

pub struct CheckPlatformAction {
    pub python: PathBuf,
}

impl CheckPlatformAction {
    fn install_hint() -> &'static str {
        if cfg!(windows) {
            "install Python from python.org and make sure pip is included"
        } else {
            "install them with: sudo apt-get install python3-venv python3-pip"
        }
    }

    async fn inspect(&self) -> Result<Platform> {
        let python = which::which(&self.python).map_err(|_| {
            InstallerError::Platform(format!(
                "{} not found on PATH; {}",
                self.python.display(),
                Self::install_hint()
            ))
        })?;

        let version = command::run(&python, ["--version"]).await?;
        tracing::info!("✓ {}", version);

        let mut missing = Vec::new();
        for (module, args) in [("venv", ["-m", "venv", "--help"]), ("pip", ["-m", "pip", "--version"])] {
            match command::run(&python, args).await {
                Ok(_) => tracing::info!("✓ {} is available", module),
                Err(e) => {
                    tracing::warn!("✗ {} is missing: {}", module, e);
                    missing.push(module);
                }
            }
        }

        if !missing.is_empty() {
            return Err(InstallerError::Platform(format!(
                "missing Python modules: {}; {}",
                missing.join(", "),
                Self::install_hint()
            )));
        }

        Ok(Platform { python })
    }
}

impl Action<(), Platform> for CheckPlatformAction {
    fn description(&self) -> String {
        format!("Check {} with venv and pip", self.python.display())
    }

    async fn check(&self, _input: &()) -> Result<bool> {
        Ok(true)
    }

    async fn apply(&self, _input: ()) -> Result<Platform> {
        self.inspect().await
    }

    async fn preview(&self, _input: ()) -> Result<Platform> {
        // Read-only, so the preview runs the real checks
        self.inspect().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn missing_interpreter_is_reported() {
        let action = CheckPlatformAction {
            python: PathBuf::from("/nonexistent/python3-for-tests"),
        };

        let result = action.preview(()).await;
        assert_matches!(result, Err(InstallerError::Platform(msg)) if msg.contains("not found"));
    }

    #[tokio::test]
    async fn check_always_returns_true() {
        let action = CheckPlatformAction {
            python: PathBuf::from("python3"),
        };
        assert!(action.check(&()).await.unwrap());
    }
}
