//! Settings file for the page renderer.
//!
//! Every key is optional; a missing file means defaults, and the defaults
//! reproduce the stock page.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use leafdom::Document;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::components::{NavLink, default_nav_links};

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentSettings {
    pub title: String,
    pub lang: String,
    pub stylesheet: Option<String>,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            title: "BarakoBama".into(),
            lang: "en".into(),
            stylesheet: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Terminal log level before `-v` flags are applied.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub document: DocumentSettings,
    pub log: LogSettings,
    /// Replaces the stock navigation links when non-empty.
    pub nav: Vec<NavLink>,
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let settings = Self::parse(&raw).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.log_level()?;
        Ok(settings)
    }

    /// Parse settings from TOML text.
    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// The configured terminal log level.
    pub fn log_level(&self) -> Result<LevelFilter, SettingsError> {
        LevelFilter::from_str(self.log.level.trim())
            .map_err(|_| SettingsError::LogLevel(self.log.level.clone()))
    }

    /// Navigation links to render.
    pub fn nav_links(&self) -> Vec<NavLink> {
        if self.nav.is_empty() {
            default_nav_links()
        } else {
            self.nav.clone()
        }
    }

    /// Document shell built from the `[document]` table.
    pub fn document(&self) -> Document {
        let doc = Document::new(&self.document.title).lang(&self.document.lang);
        match &self.document.stylesheet {
            Some(href) => doc.stylesheet(href),
            None => doc,
        }
    }
}
