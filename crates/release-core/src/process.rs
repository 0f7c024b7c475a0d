//! Blocking subprocess invocation for the external tools the release
//! depends on (`node` and `npm`).
//!
//! Both stdout and stderr are captured so a failing step can surface them
//! verbatim. Nothing is streamed: every step is short and runs in a CI log.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{ReleaseError, Result};

/// Captured result of a finished subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub command: String,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Render a program and its arguments as a single space-joined line.
pub fn format_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run `program args...` in `cwd` and capture its output regardless of
/// exit status.
pub fn execute(program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
    let command = format_command(program, args);
    tracing::info!("Executing [{command}]");

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| spawn_error(program, &e))?;

    Ok(CommandOutput {
        command,
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Like [`execute`], but a non-zero exit becomes [`ReleaseError::CommandFailed`].
pub fn execute_checked(program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
    let output = execute(program, args, cwd)?;
    if !output.success() {
        return Err(ReleaseError::CommandFailed {
            command: output.command,
            code: output.code,
            stdout: output.stdout,
            stderr: output.stderr,
        });
    }
    Ok(output)
}

fn spawn_error(program: &str, err: &std::io::Error) -> ReleaseError {
    // Bare names are looked up on PATH; give a clearer hint when that fails.
    let reason = if !program.contains(std::path::MAIN_SEPARATOR) && which::which(program).is_err()
    {
        "not found on PATH".to_string()
    } else {
        err.to_string()
    };
    ReleaseError::SpawnFailed {
        program: program.to_string(),
        reason,
    }
}
