// bases/extract_cli/src/logging.rs
use color_eyre::eyre::{Result, WrapErr};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer};

pub const LOG_FILE: &str = "extractor.log";

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            "yt_extract=debug,metadata_extractor=debug".into()
        } else {
            "yt_extract=info,metadata_extractor=info".into()
        }
    })
}

/// Layer appending plain-text events to `<log_dir>/extractor.log`
fn file_layer<S>(dir: &Path, verbose: bool) -> Result<impl Layer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("creating log directory {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))?;

    Ok(fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_filter(filter(verbose)))
}

/// Log to stderr, and append to `<log_dir>/extractor.log` when a log directory is set
pub fn init(log_dir: Option<&Path>, verbose: bool) -> Result<()> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter(verbose));

    let registry = tracing_subscriber::registry().with(console);
    let file = log_dir.map(|dir| file_layer(dir, verbose)).transpose()?;

    registry.with(file).init();
    Ok(())
}
