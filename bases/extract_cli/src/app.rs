// bases/extract_cli/src/app.rs
use crate::config::{Config, Input};
use crate::output::OutputHandler;
use chrono::Local;
use color_eyre::eyre::{Result, WrapErr};
use metadata_extractor::{prepare_output_dir, read_batch_file, MetadataExtractor, YtDlp};

pub struct App {
    config: Config,
    output: OutputHandler,
}

impl App {
    pub fn new(config: Config) -> Self {
        let output = OutputHandler::new(config.verbose);
        Self { config, output }
    }

    /// Run the configured input; `Ok(false)` means at least one URL failed
    pub async fn run(&self) -> Result<bool> {
        let urls = match &self.config.input {
            Input::Single(url) => vec![url.clone()],
            Input::Batch(path) => read_batch_file(path)
                .await
                .wrap_err_with(|| format!("Please select a valid batch file ({})", path.display()))?,
        };

        let output_dir = prepare_output_dir(
            &self.config.output_dir,
            self.config.timestamped,
            Local::now().naive_local(),
        )
        .await
        .wrap_err_with(|| {
            format!(
                "Error creating output directory {}",
                self.config.output_dir.display()
            )
        })?;
        tracing::info!(output_dir = %output_dir.display(), "writing metadata");

        let extractor = MetadataExtractor::new(&output_dir, YtDlp::new(&self.config.ytdlp)).await?;

        match &self.config.input {
            Input::Single(url) => {
                let outcome = extractor.process_url(url, &self.output).await;
                self.output.print_outcome(&outcome);
                Ok(outcome.is_success())
            }
            Input::Batch(_) if urls.is_empty() => {
                self.output.print_empty_batch();
                Ok(true)
            }
            Input::Batch(_) => {
                let report = extractor.process_batch(&urls, &self.output).await;
                report
                    .outcomes
                    .iter()
                    .for_each(|outcome| self.output.print_outcome(outcome));
                self.output.print_summary(&report);
                Ok(report.all_succeeded())
            }
        }
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}
