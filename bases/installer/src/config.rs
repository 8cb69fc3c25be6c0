// bases/installer/src/config.rs
use crate::actions::ExecutionMode;
use clap::{Parser, ValueEnum};
use install_layout::executable;
use std::path::{Path, PathBuf};

/// yt-dlp release installed into the virtual environment
pub const DEFAULT_YTDLP_VERSION: &str = "2024.03.10";

/// Directory created when installing into the current directory
pub const DEFAULT_DIR_NAME: &str = "yt-data-extractor";

/// What to do when the target directory already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExistingPolicy {
    /// Remove the existing installation and reinstall
    Reinstall,
    /// Install next to it as <dir>_<n>
    New,
    /// Stop without changing anything
    Abort,
}

/// Installer configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute installation directory
    pub target: PathBuf,

    pub on_existing: ExistingPolicy,

    /// Execution mode (DryRun or Apply)
    pub execution_mode: ExecutionMode,

    pub ytdlp_version: String,

    /// Interpreter used to create the virtual environment
    pub python: PathBuf,

    /// Extractor binary copied into the installation
    pub extractor_bin: PathBuf,
}

/// Metadata extractor setup
#[derive(Parser, Debug, Clone)]
#[command(name = "yt-extract-setup", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Where to install ('.' creates yt-data-extractor in the current directory)
    #[arg(short, long, default_value = ".")]
    pub dir: String,

    /// What to do if the directory already exists
    #[arg(long, value_enum, default_value_t = ExistingPolicy::Abort)]
    pub on_existing: ExistingPolicy,

    /// Actually install
    ///
    /// By default the installer runs in --check mode which only shows what would be done.
    #[arg(long)]
    pub apply: bool,

    /// Check mode (dry run) - show what would be done without making changes
    #[arg(long, conflicts_with = "apply")]
    pub check: bool,

    /// yt-dlp version to install
    #[arg(long, default_value = DEFAULT_YTDLP_VERSION)]
    pub ytdlp_version: String,

    /// Python interpreter (defaults to python3, or python on Windows)
    #[arg(long)]
    pub python: Option<PathBuf>,

    /// Extractor binary to install (defaults to yt-extract next to this installer)
    #[arg(long)]
    pub extractor_bin: Option<PathBuf>,
}

/// Host paths the configuration is resolved against
#[derive(Debug, Clone)]
pub struct HostPaths {
    pub cwd: PathBuf,
    pub home: Option<PathBuf>,
    pub exe_dir: Option<PathBuf>,
}

impl HostPaths {
    pub fn detect() -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        let home = std::env::var_os(if cfg!(windows) { "USERPROFILE" } else { "HOME" })
            .map(PathBuf::from);
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        Ok(Self { cwd, home, exe_dir })
    }
}

impl Config {
    pub fn from_args(args: CliArgs, host: &HostPaths) -> Self {
        let execution_mode = if args.apply {
            ExecutionMode::Apply
        } else {
            ExecutionMode::DryRun
        };

        let python = args.python.unwrap_or_else(|| {
            PathBuf::from(if cfg!(windows) { "python" } else { "python3" })
        });

        let extractor_bin = args.extractor_bin.unwrap_or_else(|| {
            let name = executable("yt-extract");
            match &host.exe_dir {
                Some(dir) => dir.join(name),
                None => PathBuf::from(name),
            }
        });

        Self {
            target: resolve_target(&args.dir, host),
            on_existing: args.on_existing,
            execution_mode,
            ytdlp_version: args.ytdlp_version,
            python,
            extractor_bin,
        }
    }

    pub fn is_check_mode(&self) -> bool {
        self.execution_mode == ExecutionMode::DryRun
    }
}

fn resolve_target(dir: &str, host: &HostPaths) -> PathBuf {
    let dir = dir.trim();

    if dir == "." {
        return host.cwd.join(DEFAULT_DIR_NAME);
    }

    let expanded = match (dir.strip_prefix("~"), &host.home) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with(['/', '\\']) => {
            home.join(rest.trim_start_matches(['/', '\\']))
        }
        _ => PathBuf::from(dir),
    };

    if expanded.is_absolute() {
        expanded
    } else {
        host.cwd.join(expanded)
    }
}
