// bases/extract_cli/src/output.rs
use metadata_extractor::{percent, BatchReport, ExtractOutcome, Progress};

const BAR_WIDTH: usize = 40;

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_outcome(&self, outcome: &ExtractOutcome) {
        match outcome {
            ExtractOutcome::Saved { url, path } => {
                if self.verbose {
                    println!("Wrote {} for {}", path.display(), url);
                }
            }
            ExtractOutcome::Failed { url, reason } => {
                if self.verbose {
                    println!("Reason for {}: {}", url, reason);
                }
            }
        }
    }

    pub fn print_summary(&self, report: &BatchReport) {
        println!();
        println!(
            "Processed {} URL(s): {} succeeded, {} failed",
            report.total(),
            report.succeeded(),
            report.total() - report.succeeded()
        );

        for outcome in report.failed() {
            if let ExtractOutcome::Failed { url, reason } = outcome {
                println!("  {}: {}", url, reason);
            }
        }
    }

    pub fn print_empty_batch(&self) {
        println!("Batch file contains no URLs, nothing to do");
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {}", error);

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {}", cause);
            });
        }
    }
}

impl Progress for OutputHandler {
    fn message(&self, message: &str) {
        println!("{}", message);
    }

    fn advance(&self, done: usize, total: usize) {
        println!("{}", render_bar(percent(done, total)));
    }
}

fn render_bar(percent: usize) -> String {
    let percent = percent.min(100);
    let filled = percent * BAR_WIDTH / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        percent
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_empty_at_zero() {
        assert_eq!(render_bar(0), format!("[{}]   0%", "-".repeat(BAR_WIDTH)));
    }

    #[test]
    fn bar_is_half_full() {
        let bar = render_bar(50);
        assert_eq!(bar.matches('#').count(), BAR_WIDTH / 2);
        assert!(bar.ends_with(" 50%"));
    }

    #[test]
    fn bar_is_capped() {
        assert_eq!(render_bar(250), format!("[{}] 100%", "#".repeat(BAR_WIDTH)));
    }
}
