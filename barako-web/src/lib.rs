pub mod app;
pub mod cli;
pub mod components;
pub mod error;
pub mod logging;
pub mod paths;
pub mod settings;

pub use error::{Error, Result};
pub use settings::{Settings, SettingsError};
