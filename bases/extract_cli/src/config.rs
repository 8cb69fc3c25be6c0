// bases/extract_cli/src/config.rs
use crate::args::Args;
use color_eyre::eyre::{eyre, Result};
use install_layout::{InstallLayout, Settings};
use std::path::{Path, PathBuf};

/// What to process in this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Single(String),
    Batch(PathBuf),
}

/// Extractor configuration
///
/// Flags win over the environment (handled by clap), which wins over the
/// installation's settings.json, which wins over defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: Input,
    pub output_dir: PathBuf,
    pub timestamped: bool,
    pub ytdlp: PathBuf,
    pub log_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl Config {
    pub fn resolve(args: Args, cwd: &Path) -> Result<Self> {
        let input = match (args.url, args.batch) {
            (Some(url), None) => {
                let url = url.trim().to_string();
                if url.is_empty() {
                    return Err(eyre!("Please enter a URL"));
                }
                Input::Single(url)
            }
            (None, Some(batch)) => Input::Batch(batch),
            _ => return Err(eyre!("Provide exactly one of --url or --batch")),
        };

        let layout = match args.install_dir {
            Some(dir) => InstallLayout::new(dir),
            None => InstallLayout::discover(cwd),
        };
        let settings = Settings::load_optional(layout.settings_file())?;

        let ytdlp = args
            .ytdlp
            .or_else(|| settings.as_ref().map(|s| s.ytdlp.clone()))
            .unwrap_or_else(|| PathBuf::from("yt-dlp"));

        let output_dir = args
            .output_dir
            .or_else(|| settings.as_ref().map(|s| s.output_dir.clone()))
            .unwrap_or_else(|| layout.data_dir());

        let log_dir = args
            .log_dir
            .or_else(|| settings.and_then(|s| s.log_dir));

        Ok(Self {
            input,
            output_dir,
            timestamped: !args.no_timestamp_folder,
            ytdlp,
            log_dir,
            verbose: args.verbose,
        })
    }
}
