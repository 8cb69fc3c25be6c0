// bases/installer/src/provisioning/stage3_dependencies.rs
//! Stage 3: Install yt-dlp into the virtual environment

use crate::actions::Action;
use crate::command;
use crate::error::{InstallerError, Result};
use crate::provisioning::types::{InstalledDependencies, VirtualEnv};
use std::ffi::OsStr;

pub struct InstallDependenciesAction {
    pub ytdlp_version: String,
}

impl InstallDependenciesAction {
    pub fn requirements(&self) -> String {
        format!("yt-dlp=={}\n", self.ytdlp_version)
    }

    fn installed(&self, input: VirtualEnv) -> InstalledDependencies {
        InstalledDependencies {
            layout: input.layout,
            ytdlp_version: self.ytdlp_version.clone(),
        }
    }
}

impl Action<VirtualEnv, InstalledDependencies> for InstallDependenciesAction {
    fn description(&self) -> String {
        format!("Install yt-dlp {}", self.ytdlp_version)
    }

    async fn check(&self, input: &VirtualEnv) -> Result<bool> {
        let requirements = input.layout.requirements_file();
        let current = tokio::fs::read_to_string(&requirements).await.ok();

        Ok(!input.layout.venv_ytdlp().exists() || current.as_deref() != Some(self.requirements().as_str()))
    }

    async fn apply(&self, input: VirtualEnv) -> Result<InstalledDependencies> {
        let requirements = input.layout.requirements_file();
        tokio::fs::write(&requirements, self.requirements())
            .await
            .map_err(|e| InstallerError::io(format!("writing {}", requirements.display()), e))?;

        command::run(
            &input.layout.venv_pip(),
            [OsStr::new("install"), OsStr::new("-r"), requirements.as_os_str()],
        )
        .await?;
        tracing::info!("✓ Dependencies installed successfully");

        Ok(self.installed(input))
    }

    async fn preview(&self, input: VirtualEnv) -> Result<InstalledDependencies> {
        tracing::info!(
            "Would write {} with: {}",
            input.layout.requirements_file().display(),
            self.requirements().trim()
        );
        tracing::info!(
            "Would run: {} install -r {}",
            input.layout.venv_pip().display(),
            input.layout.requirements_file().display()
        );

        Ok(self.installed(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use install_layout::InstallLayout;
    use tempfile::TempDir;

    fn action() -> InstallDependenciesAction {
        InstallDependenciesAction {
            ytdlp_version: "2024.03.10".to_string(),
        }
    }

    #[test]
    fn requirements_pin_version() {
        assert_eq!(action().requirements(), "yt-dlp==2024.03.10\n");
    }

    #[tokio::test]
    async fn skipped_when_pinned_version_present() {
        let root = TempDir::new().unwrap();
        let venv = VirtualEnv {
            layout: InstallLayout::new(root.path()),
        };
        assert!(action().check(&venv).await.unwrap());

        let ytdlp = venv.layout.venv_ytdlp();
        std::fs::create_dir_all(ytdlp.parent().unwrap()).unwrap();
        std::fs::write(&ytdlp, "").unwrap();
        std::fs::write(venv.layout.requirements_file(), action().requirements()).unwrap();

        assert!(!action().check(&venv).await.unwrap());
    }

    #[tokio::test]
    async fn needed_when_version_changes() {
        let root = TempDir::new().unwrap();
        let venv = VirtualEnv {
            layout: InstallLayout::new(root.path()),
        };
        let ytdlp = venv.layout.venv_ytdlp();
        std::fs::create_dir_all(ytdlp.parent().unwrap()).unwrap();
        std::fs::write(&ytdlp, "").unwrap();
        std::fs::write(venv.layout.requirements_file(), "yt-dlp==2023.01.01\n").unwrap();

        assert!(action().check(&venv).await.unwrap());
    }
}
