use std::{
    fmt::{Display, Formatter},
    num::ParseIntError,
    path::PathBuf,
};

use crate::format::FormattingError;
use crate::syntax::SyntaxError;

#[derive(Debug)]
pub enum RetypeError {
    /// Invalid combination of options, rejected before the file is read.
    Config(String),
    ConfigFile {
        path: PathBuf,
        reason: String,
    },
    InvalidLineNumber {
        token: String,
        source: ParseIntError,
    },
    InvalidRange {
        start: u32,
        end: u32,
    },
    Syntax {
        path: PathBuf,
        errors: Vec<SyntaxError>,
    },
    StructNotFound {
        name: String,
    },
    FieldNotFound {
        struct_name: String,
        field_name: String,
    },
    /// The rewritten source no longer parses, usually because of a malformed `--to`.
    InvalidOutput {
        errors: Vec<SyntaxError>,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Formatting(FormattingError),
    Report(serde_json::Error),
}

impl Display for RetypeError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Config(message) => f.write_str(message),
            Self::ConfigFile {
                path,
                reason,
            } => {
                write!(f, "invalid config file {}: {reason}", path.display())
            },
            Self::InvalidLineNumber {
                token,
                source,
            } => {
                write!(f, "invalid line number {token:?}: {source}")
            },
            Self::InvalidRange {
                ..
            } => f.write_str("wrong range. start line cannot be larger than end line"),
            Self::Syntax {
                path,
                errors,
            } => {
                write!(f, "{}: ", path.display())?;
                write_syntax_errors(f, errors)
            },
            Self::StructNotFound {
                ..
            } => f.write_str("struct name does not exist"),
            Self::FieldNotFound {
                struct_name,
                field_name,
            } => {
                write!(f, "struct {struct_name:?} doesn't have field name {field_name:?}")
            },
            Self::InvalidOutput {
                errors,
            } => {
                f.write_str("rewritten source does not parse: ")?;
                write_syntax_errors(f, errors)
            },
            Self::Io {
                path,
                source,
            } => {
                write!(f, "{}: {source}", path.display())
            },
            Self::Formatting(error) => write!(f, "{error}"),
            Self::Report(error) => write!(f, "failed to encode report: {error}"),
        }
    }
}

fn write_syntax_errors(
    f: &mut Formatter<'_>,
    errors: &[SyntaxError],
) -> std::fmt::Result {
    match errors {
        [] => f.write_str("syntax error"),
        [first, rest @ ..] => {
            write!(f, "{first}")?;
            if !rest.is_empty() {
                write!(f, " (and {} more)", rest.len())?;
            }
            Ok(())
        },
    }
}

impl std::error::Error for RetypeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidLineNumber {
                source,
                ..
            } => Some(source),
            Self::Io {
                source,
                ..
            } => Some(source),
            Self::Formatting(error) => Some(error),
            Self::Report(error) => Some(error),
            _ => None,
        }
    }
}

impl From<FormattingError> for RetypeError {
    fn from(error: FormattingError) -> Self {
        Self::Formatting(error)
    }
}

pub type Result<T> = std::result::Result<T, RetypeError>;
