// bases/installer/src/provisioning/stage2_venv.rs
//! Stage 2: Create the Python virtual environment

use crate::actions::Action;
use crate::command;
use crate::error::Result;
use crate::provisioning::types::{PreparedDirectory, VirtualEnv};
use std::ffi::OsStr;

pub struct CreateVenvAction;

impl Action<PreparedDirectory, VirtualEnv> for CreateVenvAction {
    fn description(&self) -> String {
        "Create virtual environment".to_string()
    }

    async fn check(&self, input: &PreparedDirectory) -> Result<bool> {
        Ok(!input.layout.venv_python().exists())
    }

    async fn apply(&self, input: PreparedDirectory) -> Result<VirtualEnv> {
        let venv = input.layout.venv_dir();
        command::run(
            &input.platform.python,
            [OsStr::new("-m"), OsStr::new("venv"), venv.as_os_str()],
        )
        .await?;
        tracing::info!("✓ Virtual environment created successfully");

        Ok(VirtualEnv {
            layout: input.layout,
        })
    }

    async fn preview(&self, input: PreparedDirectory) -> Result<VirtualEnv> {
        tracing::info!(
            "Would run: {} -m venv {}",
            input.platform.python.display(),
            input.layout.venv_dir().display()
        );

        Ok(VirtualEnv {
            layout: input.layout,
        })
    }
}
