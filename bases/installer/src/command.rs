// bases/installer/src/command.rs
use crate::error::{InstallerError, Result};
use std::ffi::OsStr;
use std::path::Path;
use tokio::process::Command;

/// Run a program to completion and return its trimmed stdout
pub async fn run<I, S>(program: &Path, args: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<S> = args.into_iter().collect();
    let command_line = describe(program, &args);
    tracing::debug!("running {}", command_line);

    let output = Command::new(program)
        .args(&args)
        .output()
        .await
        .map_err(|e| InstallerError::command_failed(&command_line, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::error!("{} failed: {}", command_line, stderr);
        return Err(InstallerError::CommandExitCode {
            command: command_line,
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn describe<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.as_ref().to_string_lossy());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn command_line_is_described() {
        let line = describe(Path::new("python3"), &["-m", "venv", "/opt/x/venv"][..]);
        assert_eq!(line, "python3 -m venv /opt/x/venv");
    }

    #[tokio::test]
    async fn missing_program_is_command_failure() {
        let result = run(Path::new("/nonexistent/definitely-not-here"), ["--version"]).await;
        assert_matches!(result, Err(InstallerError::CommandFailed { .. }));
    }
}
