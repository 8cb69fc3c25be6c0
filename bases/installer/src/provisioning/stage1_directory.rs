// bases/installer/src/provisioning/stage1_directory.rs
//! Stage 1: Resolve the installation directory and check its permissions

use crate::actions::Action;
use crate::config::ExistingPolicy;
use crate::error::{InstallerError, Result};
use crate::provisioning::types::{Platform, PreparedDirectory};
use install_layout::InstallLayout;
use std::path::{Path, PathBuf};

pub struct PrepareDirectoryAction {
    pub target: PathBuf,
    pub on_existing: ExistingPolicy,
}

/// Where the installation ends up once the existing-directory policy is applied
#[derive(Debug, Clone, PartialEq)]
enum Placement {
    Fresh(PathBuf),
    Replace(PathBuf),
    Beside(PathBuf),
}

impl PrepareDirectoryAction {
    fn placement(&self) -> Result<Placement> {
        if !self.target.exists() {
            return Ok(Placement::Fresh(self.target.clone()));
        }

        tracing::info!("Found existing installation at: {}", self.target.display());
        match self.on_existing {
            ExistingPolicy::Reinstall => Ok(Placement::Replace(self.target.clone())),
            ExistingPolicy::New => Ok(Placement::Beside(InstallLayout::next_free(&self.target))),
            ExistingPolicy::Abort => Err(InstallerError::ExistingInstallation(self.target.clone())),
        }
    }

    fn prepared(platform: Platform, root: PathBuf) -> PreparedDirectory {
        PreparedDirectory {
            platform,
            layout: InstallLayout::new(root),
        }
    }
}

/// Read, write and traverse permissions on `dir`
pub fn check_permissions(dir: &Path) -> Result<()> {
    tracing::info!("Checking permissions for: {}", dir.display());

    std::fs::read_dir(dir).map_err(|source| InstallerError::Permission {
        path: dir.to_owned(),
        permission: "read",
        source,
    })?;
    tracing::info!("✓ Read permission");

    // Creating an entry needs both write and execute on the directory
    tempfile::tempfile_in(dir).map_err(|source| InstallerError::Permission {
        path: dir.to_owned(),
        permission: "write",
        source,
    })?;
    tracing::info!("✓ Write permission");
    tracing::info!("✓ Execute permission");

    Ok(())
}

impl Action<Platform, PreparedDirectory> for PrepareDirectoryAction {
    fn description(&self) -> String {
        format!("Prepare installation directory {}", self.target.display())
    }

    async fn check(&self, _input: &Platform) -> Result<bool> {
        Ok(true)
    }

    async fn apply(&self, input: Platform) -> Result<PreparedDirectory> {
        let root = match self.placement()? {
            Placement::Fresh(root) => root,
            Placement::Replace(root) => {
                tracing::info!("Removing existing installation...");
                tokio::fs::remove_dir_all(&root).await.map_err(|e| {
                    InstallerError::io(format!("removing {}", root.display()), e)
                })?;
                tracing::info!("✓ Existing installation removed");
                root
            }
            Placement::Beside(root) => {
                tracing::info!("Will create new installation at: {}", root.display());
                root
            }
        };

        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| InstallerError::io(format!("creating {}", root.display()), e))?;
        check_permissions(&root)?;

        Ok(Self::prepared(input, root))
    }

    async fn preview(&self, input: Platform) -> Result<PreparedDirectory> {
        let root = match self.placement()? {
            Placement::Fresh(root) => {
                tracing::info!("Would create {}", root.display());
                root
            }
            Placement::Replace(root) => {
                tracing::info!("Would remove and recreate {}", root.display());
                root
            }
            Placement::Beside(root) => {
                tracing::info!("Would create new installation at {}", root.display());
                root
            }
        };

        Ok(Self::prepared(input, root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;
    use tempfile::TempDir;

    fn platform() -> Platform {
        Platform {
            python: PathBuf::from("/usr/bin/python3"),
        }
    }

    fn existing(parent: &TempDir) -> PathBuf {
        let target = parent.path().join("yt-data-extractor");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("old.txt"), "old").unwrap();
        target
    }

    #[tokio::test]
    async fn fresh_directory_is_created() {
        let parent = TempDir::new().unwrap();
        let target = parent.path().join("install");
        let action = PrepareDirectoryAction {
            target: target.clone(),
            on_existing: ExistingPolicy::Abort,
        };

        let prepared = action.apply(platform()).await.unwrap();
        assert_eq!(prepared.layout.root(), target.as_path());
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn reinstall_removes_old_contents() {
        let parent = TempDir::new().unwrap();
        let target = existing(&parent);
        let action = PrepareDirectoryAction {
            target: target.clone(),
            on_existing: ExistingPolicy::Reinstall,
        };

        let prepared = action.apply(platform()).await.unwrap();
        assert_eq!(prepared.layout.root(), target.as_path());
        assert!(!target.join("old.txt").exists());
    }

    #[tokio::test]
    async fn new_policy_installs_beside() {
        let parent = TempDir::new().unwrap();
        let target = existing(&parent);
        let action = PrepareDirectoryAction {
            target: target.clone(),
            on_existing: ExistingPolicy::New,
        };

        let prepared = action.apply(platform()).await.unwrap();
        assert_eq!(
            prepared.layout.root(),
            parent.path().join("yt-data-extractor_1").as_path()
        );
        assert!(target.join("old.txt").exists());
    }

    #[rstest]
    #[case(ExecutionModeUnderTest::Apply)]
    #[case(ExecutionModeUnderTest::Preview)]
    #[tokio::test]
    async fn abort_policy_refuses(#[case] mode: ExecutionModeUnderTest) {
        let parent = TempDir::new().unwrap();
        let target = existing(&parent);
        let action = PrepareDirectoryAction {
            target,
            on_existing: ExistingPolicy::Abort,
        };

        let result = match mode {
            ExecutionModeUnderTest::Apply => action.apply(platform()).await,
            ExecutionModeUnderTest::Preview => action.preview(platform()).await,
        };
        assert_matches!(result, Err(InstallerError::ExistingInstallation(_)));
    }

    #[derive(Debug, Clone, Copy)]
    enum ExecutionModeUnderTest {
        Apply,
        Preview,
    }

    #[tokio::test]
    async fn preview_changes_nothing() {
        let parent = TempDir::new().unwrap();
        let target = existing(&parent);
        let action = PrepareDirectoryAction {
            target: target.clone(),
            on_existing: ExistingPolicy::Reinstall,
        };

        action.preview(platform()).await.unwrap();
        assert!(target.join("old.txt").exists());
    }

    #[test]
    fn writable_directory_passes_permission_check() {
        let dir = TempDir::new().unwrap();
        assert!(check_permissions(dir.path()).is_ok());
    }

    #[test]
    fn missing_directory_fails_permission_check() {
        let dir = TempDir::new().unwrap();
        let result = check_permissions(&dir.path().join("missing"));
        assert_matches!(
            result,
            Err(InstallerError::Permission {
                permission: "read",
                ..
            })
        );
    }
}
