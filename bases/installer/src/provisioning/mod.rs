// bases/installer/src/provisioning/mod.rs
//! Installation pipeline
//!
//! Each stage is an Action that transforms the previous stage's output, and
//! the types enforce the order.

use crate::actions::{execute_action, ExecutionMode};
use crate::config::Config;
use crate::error::Result;

pub mod types;

mod stage0_platform;
mod stage1_directory;
mod stage2_venv;
mod stage3_dependencies;
mod stage4_layout;
mod stage5_verify;

pub use stage0_platform::CheckPlatformAction;
pub use stage1_directory::PrepareDirectoryAction;
pub use stage2_venv::CreateVenvAction;
pub use stage3_dependencies::InstallDependenciesAction;
pub use stage4_layout::LayoutInstallationAction;
pub use stage5_verify::VerifyInstallationAction;

pub use types::VerifiedInstallation;

/// Run every installation stage in order
pub async fn install(config: &Config) -> Result<VerifiedInstallation> {
    let mode = config.execution_mode;
    let mode_str = match mode {
        ExecutionMode::DryRun => "DRY RUN",
        ExecutionMode::Apply => "APPLY",
    };

    tracing::info!("🚀 Installing into {} [{}]", config.target.display(), mode_str);

    tracing::info!("📍 Stage 0: Platform Check");
    let platform = execute_action(
        &CheckPlatformAction {
            python: config.python.clone(),
        },
        (),
        mode,
    )
    .await?;

    tracing::info!("📍 Stage 1: Installation Directory");
    let prepared = execute_action(
        &PrepareDirectoryAction {
            target: config.target.clone(),
            on_existing: config.on_existing,
        },
        platform,
        mode,
    )
    .await?;

    tracing::info!("📍 Stage 2: Virtual Environment");
    let venv = execute_action(&CreateVenvAction, prepared, mode).await?;

    tracing::info!("📍 Stage 3: Dependencies");
    let deps = execute_action(
        &InstallDependenciesAction {
            ytdlp_version: config.ytdlp_version.clone(),
        },
        venv,
        mode,
    )
    .await?;

    tracing::info!("📍 Stage 4: Directories and Settings");
    let laid_out = execute_action(
        &LayoutInstallationAction {
            extractor_bin: config.extractor_bin.clone(),
        },
        deps,
        mode,
    )
    .await?;

    tracing::info!("📍 Stage 5: Verification");
    let verified = execute_action(&VerifyInstallationAction, laid_out, mode).await?;

    tracing::info!("✅ Installation pipeline complete!");
    Ok(verified)
}
