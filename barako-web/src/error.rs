use std::io;
use std::path::PathBuf;

use barako::RuntimeError;
use thiserror::Error;

use crate::settings::SettingsError;

/// Top-level error for the renderer binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
