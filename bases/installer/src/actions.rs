// bases/installer/src/actions.rs
//! Check/apply/preview actions for installation stages
//!
//! Each stage turns the previous stage's output into its own. In dry-run mode
//! only `preview` runs, so nothing on disk changes.

use crate::error::Result;

/// Execution mode for actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Preview what would happen without making changes
    DryRun,
    /// Actually execute the action
    Apply,
}

#[allow(async_fn_in_trait)]
pub trait Action<Input, Output> {
    fn description(&self) -> String;

    /// Whether `apply` still has work to do for this input
    async fn check(&self, input: &Input) -> Result<bool>;

    async fn apply(&self, input: Input) -> Result<Output>;

    /// Build the output `apply` would produce without touching the system
    async fn preview(&self, input: Input) -> Result<Output>;
}

pub async fn execute_action<I, O, A>(action: &A, input: I, mode: ExecutionMode) -> Result<O>
where
    A: Action<I, O>,
    O: std::fmt::Display,
{
    tracing::info!("🔍 {}", action.description());

    match mode {
        ExecutionMode::DryRun => {
            tracing::info!("   [DRY RUN] Previewing...");
            let output = action.preview(input).await?;
            tracing::info!("   ✅ Preview complete: {}", output);
            Ok(output)
        }
        ExecutionMode::Apply => {
            let needed = action.check(&input).await?;

            if needed {
                tracing::info!("   ⚙️  Executing...");
                let output = action.apply(input).await?;
                tracing::info!("   {}", output);
                Ok(output)
            } else {
                tracing::info!("   ⏭️  Already done, skipping");
                action.preview(input).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingAction {
        needed: bool,
        applied: AtomicUsize,
        previewed: AtomicUsize,
    }

    impl Action<i32, i32> for CountingAction {
        fn description(&self) -> String {
            "Double the input".to_string()
        }

        async fn check(&self, _input: &i32) -> Result<bool> {
            Ok(self.needed)
        }

        async fn apply(&self, input: i32) -> Result<i32> {
            self.applied.fetch_add(1, Ordering::SeqCst);
            Ok(input * 2)
        }

        async fn preview(&self, input: i32) -> Result<i32> {
            self.previewed.fetch_add(1, Ordering::SeqCst);
            Ok(input * 2)
        }
    }

    #[tokio::test]
    async fn dry_run_only_previews() {
        let action = CountingAction {
            needed: true,
            ..Default::default()
        };

        let output = execute_action(&action, 5, ExecutionMode::DryRun).await.unwrap();

        assert_eq!(output, 10);
        assert_eq!(action.applied.load(Ordering::SeqCst), 0);
        assert_eq!(action.previewed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn apply_runs_when_needed() {
        let action = CountingAction {
            needed: true,
            ..Default::default()
        };

        execute_action(&action, 5, ExecutionMode::Apply).await.unwrap();
        assert_eq!(action.applied.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn apply_skips_finished_work() {
        let action = CountingAction::default();

        let output = execute_action(&action, 5, ExecutionMode::Apply).await.unwrap();

        assert_eq!(output, 10);
        assert_eq!(action.applied.load(Ordering::SeqCst), 0);
        assert_eq!(action.previewed.load(Ordering::SeqCst), 1);
    }
}
