use std::{
    fmt::{Display, Formatter},
    io::Write,
    process::{Command, Stdio},
};

use tracing::{debug, warn};

use crate::config::FormattingSettings;

/// Pipes `source` through the configured formatter.
///
/// A formatter that is not installed is not an error: the source is returned
/// unchanged and a warning is logged.
pub fn format_source(
    source: &str,
    settings: &FormattingSettings,
) -> Result<String, FormattingError> {
    match run_formatter(&settings.command, &settings.args, source) {
        Ok(formatted) => {
            debug!(command = %settings.command, changed = formatted != source, "formatted output");
            Ok(formatted)
        },
        Err(FormattingError::CommandNotFound(command)) => {
            warn!("{command} is not available, output left unformatted");
            Ok(source.to_string())
        },
        Err(error) => Err(error),
    }
}

fn run_formatter(
    executable: &str,
    args: &[String],
    input: &str,
) -> Result<String, FormattingError> {
    let mut child = Command::new(executable)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|error| match error.kind() {
            std::io::ErrorKind::NotFound => FormattingError::CommandNotFound(executable.to_string()),
            _ => FormattingError::LaunchFailed {
                command: executable.to_string(),
                reason: error.to_string(),
            },
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes()).map_err(|error| FormattingError::LaunchFailed {
            command: executable.to_string(),
            reason: format!("failed to stream source to formatter: {error}"),
        })?;
    }

    let output = child.wait_with_output().map_err(|error| FormattingError::LaunchFailed {
        command: executable.to_string(),
        reason: error.to_string(),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(FormattingError::FormattingFailed {
            command: executable.to_string(),
            reason: if stderr.is_empty() {
                format!("process exited with status {}", output.status)
            } else {
                stderr
            },
        });
    }

    String::from_utf8(output.stdout).map_err(|error| FormattingError::FormattingFailed {
        command: executable.to_string(),
        reason: format!("formatter produced invalid UTF-8 output: {error}"),
    })
}

#[derive(Debug)]
pub enum FormattingError {
    CommandNotFound(String),
    LaunchFailed {
        command: String,
        reason: String,
    },
    FormattingFailed {
        command: String,
        reason: String,
    },
}

impl Display for FormattingError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::CommandNotFound(command) => write!(f, "{command} is not available"),
            Self::LaunchFailed {
                command,
                reason,
            } => {
                write!(f, "failed to launch {command}: {reason}")
            },
            Self::FormattingFailed {
                command,
                reason,
            } => {
                write!(f, "{command} failed: {reason}")
            },
        }
    }
}

impl std::error::Error for FormattingError {}

#[cfg(test)]
#[path = "../tests/src/format_tests.rs"]
mod tests;
