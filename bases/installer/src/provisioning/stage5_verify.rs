// bases/installer/src/provisioning/stage5_verify.rs
//! Stage 5: Verify the installation is usable

use crate::actions::Action;
use crate::command;
use crate::error::{InstallerError, Result};
use crate::provisioning::types::{LaidOutInstallation, VerifiedInstallation};
use install_layout::executable;
use std::path::PathBuf;

pub struct VerifyInstallationAction;

impl VerifyInstallationAction {
    fn missing_paths(input: &LaidOutInstallation) -> Vec<PathBuf> {
        let layout = &input.layout;
        layout
            .required_dirs()
            .into_iter()
            .chain([
                layout.settings_file(),
                layout.bin_dir().join(executable("yt-extract")),
                input.settings.ytdlp.clone(),
            ])
            .filter(|path| !path.exists())
            .collect()
    }
}

impl Action<LaidOutInstallation, VerifiedInstallation> for VerifyInstallationAction {
    fn description(&self) -> String {
        "Verify installation".to_string()
    }

    async fn check(&self, _input: &LaidOutInstallation) -> Result<bool> {
        Ok(true)
    }

    async fn apply(&self, input: LaidOutInstallation) -> Result<VerifiedInstallation> {
        let missing = Self::missing_paths(&input);
        if !missing.is_empty() {
            let listed: Vec<String> = missing.iter().map(|p| p.display().to_string()).collect();
            return Err(InstallerError::Verification(format!(
                "missing: {}",
                listed.join(", ")
            )));
        }
        tracing::info!("✓ Directories, extractor and settings present");

        let version = command::run(&input.settings.ytdlp, ["--version"])
            .await
            .map_err(|e| InstallerError::Verification(format!("yt-dlp does not run: {}", e)))?;
        tracing::info!("✓ yt-dlp {} runs", version);

        Ok(VerifiedInstallation {
            layout: input.layout,
            reported_version: Some(version),
        })
    }

    async fn preview(&self, input: LaidOutInstallation) -> Result<VerifiedInstallation> {
        tracing::info!("Would check required directories, extractor and settings");
        tracing::info!("Would run: {} --version", input.settings.ytdlp.display());

        Ok(VerifiedInstallation {
            layout: input.layout,
            reported_version: None,
        })
    }
}
