//! One rewrite run: read, parse, select, rewrite, print, optionally format, write.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{FormattingSettings, Settings};
use crate::error::{Result, RetypeError};
use crate::format::format_source;
use crate::rewrite::{RewriteReport, RewriteSpec, rewrite};
use crate::select::{Locator, find_selection};
use crate::syntax::SyntaxTree;
use crate::syntax::ast::{AstNode, SourceFile};

/// Options as given on the command line, before validation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub file: Option<PathBuf>,
    pub write: bool,
    pub line: Option<String>,
    pub struct_name: Option<String>,
    pub field: Option<String>,
    pub all: bool,
    pub from: String,
    pub to: String,
    pub skip_unexported: bool,
    pub format: bool,
}

impl Options {
    /// Checks the option combination and merges in file settings. Command line
    /// flags can only switch features on.
    pub fn validate(
        self,
        settings: &Settings,
    ) -> Result<RunConfig> {
        let file = self.file.filter(|file| !file.as_os_str().is_empty());
        let line = self.line.filter(|line| !line.is_empty());
        let struct_name = self.struct_name.filter(|name| !name.is_empty());
        let field = self.field.filter(|field| !field.is_empty());

        let Some(file) = file else {
            return Err(RetypeError::Config("no file is passed".to_string()));
        };
        if line.is_none() && struct_name.is_none() && !self.all {
            return Err(RetypeError::Config("--line, --struct or --all is not passed".to_string()));
        }
        if line.is_some() && struct_name.is_some() {
            return Err(RetypeError::Config("--line or --struct cannot be used together. pick one".to_string()));
        }
        if field.is_some() && struct_name.is_none() {
            return Err(RetypeError::Config("--field is requiring --struct".to_string()));
        }

        let locator = match (line, struct_name) {
            (Some(line), _) => Locator::Lines(line),
            (None, Some(name)) => Locator::Struct {
                name,
                field,
            },
            (None, None) => Locator::All,
        };

        Ok(RunConfig {
            file,
            write: self.write,
            locator,
            spec: RewriteSpec {
                from: self.from,
                to: self.to,
            },
            skip_unexported: self.skip_unexported || settings.skip_unexported,
            formatting: (self.format || settings.formatting.enable).then(|| settings.formatting.clone()),
        })
    }
}

/// A validated run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub file: PathBuf,
    pub write: bool,
    pub locator: Locator,
    pub spec: RewriteSpec,
    pub skip_unexported: bool,
    /// Formatter to pipe the result through, if any.
    pub formatting: Option<FormattingSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutput {
    pub file: PathBuf,
    #[serde(flatten)]
    pub report: RewriteReport,
    /// The rewritten source.
    pub source: String,
}

pub fn run(config: &RunConfig) -> Result<RunOutput> {
    let source = std::fs::read_to_string(&config.file).map_err(|source| RetypeError::Io {
        path: config.file.clone(),
        source,
    })?;

    let (mut text, report) = retype_file(&config.file, &source, &config.locator, &config.spec, config.skip_unexported)?;

    if let Some(formatting) = &config.formatting {
        text = format_source(&text, formatting)?;
    }

    info!(
        file = %config.file.display(),
        start = report.span.start,
        end = report.span.end,
        rewritten = report.rewrites.len(),
        "rewrite finished"
    );

    if config.write {
        std::fs::write(&config.file, &text).map_err(|source| RetypeError::Io {
            path: config.file.clone(),
            source,
        })?;
        debug!(file = %config.file.display(), "wrote result");
    }

    Ok(RunOutput {
        file: config.file.clone(),
        report,
        source: text,
    })
}

/// Rewrites Go source held in memory. No formatter runs.
pub fn retype_source(
    source: &str,
    locator: &Locator,
    spec: &RewriteSpec,
    skip_unexported: bool,
) -> Result<(String, RewriteReport)> {
    retype_file(Path::new("<source>"), source, locator, spec, skip_unexported)
}

fn retype_file(
    path: &Path,
    source: &str,
    locator: &Locator,
    spec: &RewriteSpec,
    skip_unexported: bool,
) -> Result<(String, RewriteReport)> {
    let mut tree = SyntaxTree::parse(source);
    if !tree.errors().is_empty() {
        return Err(RetypeError::Syntax {
            path: path.to_path_buf(),
            errors: tree.errors().to_vec(),
        });
    }
    if let Some(package) = SourceFile::cast(tree.root()).and_then(|file| file.package_name()) {
        debug!(path = %path.display(), package = package.text(), "parsed source");
    }

    let span = find_selection(&tree, locator)?;
    let report = rewrite(&mut tree, span, spec, skip_unexported);
    let text = tree.text();

    if !report.rewrites.is_empty() {
        let reparsed = SyntaxTree::parse(&text);
        if !reparsed.errors().is_empty() {
            return Err(RetypeError::InvalidOutput {
                errors: reparsed.errors().to_vec(),
            });
        }
    }

    Ok((text, report))
}

#[cfg(test)]
#[path = "../tests/src/driver_tests.rs"]
mod tests;
