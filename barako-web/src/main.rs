use std::path::PathBuf;
use std::process::ExitCode;

use barako_web::cli::Cli;
use barako_web::{Settings, app, logging, paths};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings_path = cli
        .config
        .clone()
        .or_else(paths::settings_file)
        .unwrap_or_else(|| PathBuf::from("settings.toml"));
    let settings = match Settings::load(&settings_path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // load() has already validated the level
    let base = settings.log_level().unwrap_or(log::LevelFilter::Warn);
    logging::init(cli.log_level(base));
    log::debug!("settings from {}", settings_path.display());

    let mut alerts = Vec::new();
    let result = app::run(&settings, &cli.command, &mut alerts);
    for alert in alerts {
        eprintln!("alert: {}", alert);
    }
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
