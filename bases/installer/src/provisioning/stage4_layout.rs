// bases/installer/src/provisioning/stage4_layout.rs
//! Stage 4: Create project directories, install the extractor binary, write settings

use crate::actions::Action;
use crate::error::{InstallerError, Result};
use crate::provisioning::types::{InstalledDependencies, LaidOutInstallation};
use install_layout::{executable, InstallLayout};
use std::path::PathBuf;

pub struct LayoutInstallationAction {
    pub extractor_bin: PathBuf,
}

impl LayoutInstallationAction {
    fn installed_bin(layout: &InstallLayout) -> PathBuf {
        layout.bin_dir().join(executable("yt-extract"))
    }

    fn laid_out(input: InstalledDependencies) -> LaidOutInstallation {
        let settings = input.layout.default_settings();
        LaidOutInstallation {
            layout: input.layout,
            settings,
        }
    }
}

impl Action<InstalledDependencies, LaidOutInstallation> for LayoutInstallationAction {
    fn description(&self) -> String {
        "Create directories and settings".to_string()
    }

    async fn check(&self, _input: &InstalledDependencies) -> Result<bool> {
        // Settings and binary are always refreshed
        Ok(true)
    }

    async fn apply(&self, input: InstalledDependencies) -> Result<LaidOutInstallation> {
        let layout = &input.layout;

        for dir in layout.required_dirs().into_iter().chain([layout.bin_dir()]) {
            tokio::fs::create_dir_all(&dir)
                .await
                .map_err(|e| InstallerError::io(format!("creating {}", dir.display()), e))?;
            tracing::info!("✓ Created {}", dir.display());
        }

        if !self.extractor_bin.is_file() {
            return Err(InstallerError::Installation(format!(
                "extractor binary not found at {}",
                self.extractor_bin.display()
            )));
        }
        let dest = Self::installed_bin(layout);
        tokio::fs::copy(&self.extractor_bin, &dest)
            .await
            .map_err(|e| InstallerError::io(format!("copying extractor to {}", dest.display()), e))?;
        tracing::info!("✓ Copied {}", dest.display());

        let laid_out = Self::laid_out(input);
        laid_out.settings.save(laid_out.layout.settings_file())?;
        tracing::info!("✓ Wrote {}", laid_out.layout.settings_file().display());

        Ok(laid_out)
    }

    async fn preview(&self, input: InstalledDependencies) -> Result<LaidOutInstallation> {
        for dir in input.layout.required_dirs() {
            tracing::info!("Would create {}", dir.display());
        }
        tracing::info!(
            "Would copy {} to {}",
            self.extractor_bin.display(),
            Self::installed_bin(&input.layout).display()
        );
        tracing::info!("Would write {}", input.layout.settings_file().display());

        Ok(Self::laid_out(input))
    }
}
