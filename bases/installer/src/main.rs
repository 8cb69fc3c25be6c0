// bases/installer/src/main.rs
use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod actions;
mod command;
mod config;
mod error;
mod provisioning;

const LOG_FILE: &str = "setup.log";

/// Open the setup log for appending, keeping earlier runs
fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("opening {}", path.display()))
}

fn init_logging() -> Result<()> {
    let console = fmt::layer().with_target(false).with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "yt_extract_setup=info".into()),
    );

    let file = open_log(Path::new(LOG_FILE))?;
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_filter(EnvFilter::new("yt_extract_setup=debug"));

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = config::CliArgs::parse();
    init_logging()?;

    let host = config::HostPaths::detect()?;
    let config = config::Config::from_args(args, &host);

    if config.is_check_mode() {
        tracing::warn!("🔍 CHECK MODE: DRY RUN only (no changes will be made)");
        tracing::warn!("   Use --apply to actually install");
    } else {
        tracing::warn!("⚠️  APPLY MODE: installing into {}", config.target.display());
    }

    let installed = provisioning::install(&config).await?;

    if config.is_check_mode() {
        tracing::info!("🚧 DRY RUN complete - see logs above for what would have been done");
    } else {
        let root = installed.layout.root();
        tracing::info!("✅ Installation completed successfully!");
        tracing::info!("Your extractor is installed in: {}", root.display());
        tracing::info!(
            "Run it with: {} --url <URL>",
            installed
                .layout
                .bin_dir()
                .join(install_layout::executable("yt-extract"))
                .display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn setup_log_keeps_earlier_runs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(LOG_FILE);
        std::fs::write(&path, "first run\n").unwrap();

        let mut file = open_log(&path).unwrap();
        writeln!(file, "second run").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first run\nsecond run\n");
    }

    #[test]
    fn setup_log_is_created_when_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(LOG_FILE);

        open_log(&path).unwrap();
        assert!(path.is_file());
    }
}
