// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration.
//!
//! The only knob is where the datasets come from. By default the copies
//! compiled into the crate are used; `BCP47_DATA_DIR` (or the CLI's
//! `--data-dir`) points at a directory laid out like `data/`:
//!
//! ```text
//! <dir>/registry/registry.json
//! <dir>/registry/index.json
//! <dir>/transform/{attrs,keys,types,subtags}.json
//! <dir>/unicode/{attrs,keys,types,subtags}.json
//! ```
//!
//! The registry directory may instead hold the IANA text file as
//! `<dir>/registry/language-subtag-registry`, which is preferred when present.

use std::env;
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "BCP47_DATA_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the environment. Blank values are ignored.
    pub fn from_env() -> Self {
        let data_dir = env::var(DATA_DIR_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        Self { data_dir }
    }

    /// Replace the data directory when one is given.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        self
    }

    pub fn registry_dir(&self) -> Option<PathBuf> {
        self.data_dir.as_deref().map(|dir| dir.join("registry"))
    }

    pub fn extension_dir(&self, data_path: &str) -> Option<PathBuf> {
        self.data_dir.as_deref().map(|dir| dir.join(data_path))
    }

    pub fn describe_source(&self) -> String {
        match &self.data_dir {
            Some(dir) => dir.display().to_string(),
            None => "bundled".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_dir_overrides() {
        let config = Config::default().with_data_dir(Some(PathBuf::from("/tmp/data")));
        assert_eq!(config.registry_dir(), Some(PathBuf::from("/tmp/data/registry")));
        assert_eq!(
            config.extension_dir("unicode"),
            Some(PathBuf::from("/tmp/data/unicode"))
        );
    }

    #[test]
    fn missing_data_dir_keeps_previous_value() {
        let config = Config {
            data_dir: Some(PathBuf::from("/srv/bcp47")),
        }
        .with_data_dir(None);
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/bcp47")));
    }

    #[test]
    fn default_uses_bundled_data() {
        let config = Config::default();
        assert_eq!(config.describe_source(), "bundled");
        assert_eq!(config.registry_dir(), None);
        assert_eq!(config.extension_dir("unicode"), None);
    }
}
