// bases/extract_cli/src/args.rs
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Extract video metadata into CSV files
#[derive(Parser, Debug)]
#[command(name = "yt-extract", author, version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["url", "batch"])))]
pub struct Args {
    /// Single video URL to process
    #[arg(short, long)]
    pub url: Option<String>,

    /// Text file listing one URL per line
    #[arg(short, long)]
    pub batch: Option<PathBuf>,

    /// Directory to store metadata files (defaults to the installation's data directory)
    #[arg(short, long, env = "YT_EXTRACT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Write straight into the output directory instead of a timestamped subfolder
    #[arg(long)]
    pub no_timestamp_folder: bool,

    /// yt-dlp executable to run
    #[arg(long = "yt-dlp", env = "YT_EXTRACT_YTDLP")]
    pub ytdlp: Option<PathBuf>,

    /// Installation directory containing settings.json
    #[arg(long)]
    pub install_dir: Option<PathBuf>,

    /// Directory for the log file
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
