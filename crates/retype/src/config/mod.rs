//! Settings read from `retype.toml`.
//!
//! The file is optional and every key in it is optional. It is looked up in
//! the directory of the Go file being rewritten and then in each parent
//! directory; the first one found wins. Values from the file are patched over
//! the defaults, and command line flags are applied on top by the caller.
//!
//! ```toml
//! skip_unexported = true
//!
//! [formatting]
//! enable = true
//! command = "gofmt"
//! args = ["-s"]
//!
//! [logging]
//! level = "debug"
//! ```

pub(crate) mod formatting;
pub(crate) mod logging;

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

pub use formatting::{DEFAULT_FORMATTER, FormattingSettings};
use formatting::FormattingSettingsPatch;
use logging::LoggingSettingsPatch;
pub use logging::{LogLevel, LoggingSettings};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, RetypeError};

pub const CONFIG_FILENAME: &str = "retype.toml";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub skip_unexported: bool,
    pub formatting: FormattingSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let patch: SettingsPatch = toml::from_str(content)?;
        let mut settings = Self::default();
        settings.apply_patch(patch);
        settings.normalize();
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RetypeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|error| RetypeError::ConfigFile {
            path: path.to_path_buf(),
            reason: error.message().to_string(),
        })
    }

    /// Settings for a source file: the nearest `retype.toml`, or the defaults.
    pub fn discover(source_path: &Path) -> Result<Self> {
        let start = source_path.canonicalize().unwrap_or_else(|_| source_path.to_path_buf());
        match find_config_file(&start) {
            Some(path) => {
                debug!(path = %path.display(), "using config file");
                Self::load(&path)
            },
            None => Ok(Self::default()),
        }
    }

    fn apply_patch(
        &mut self,
        patch: SettingsPatch,
    ) {
        if let Some(v) = patch.skip_unexported {
            self.skip_unexported = v;
        }
        if let Some(p) = patch.formatting {
            self.formatting.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
    }

    fn normalize(&mut self) {
        self.formatting.normalize();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct SettingsPatch {
    skip_unexported: Option<bool>,
    formatting: Option<FormattingSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, toml::Value>,
}

/// Walks parent directories from `start` looking for `retype.toml`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_file() {
        start.parent()?
    } else {
        start
    };
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
#[path = "../../tests/src/config/settings_tests.rs"]
mod tests;
