// bases/extract_cli/src/main.rs
mod app;
mod args;
mod config;
mod logging;
mod output;

use app::App;
use args::Args;
use clap::Parser;
use color_eyre::Result;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(args, &cwd)?;

    logging::init(config.log_dir.as_deref(), config.verbose)?;
    tracing::debug!(?config, "resolved configuration");

    let app = App::new(config);

    match app.run().await {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(error) => {
            app.print_error(&error);
            std::process::exit(1);
        }
    }
}
