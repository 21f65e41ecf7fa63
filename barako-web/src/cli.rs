//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "barako-web",
    version,
    about = "Render the BarakoBama upload instructions page"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (default: settings.toml in the config directory).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Terminal log verbosity (-v info, -vv debug, -vvv trace, -q errors
    /// only). Overrides `[log] level` from the settings file.
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

impl Cli {
    /// Terminal log level: the flags when given, `configured` otherwise.
    pub fn log_level(&self, configured: LevelFilter) -> LevelFilter {
        if self.verbosity.is_present() {
            self.verbosity.log_level_filter()
        } else {
            configured
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the page as a complete HTML document.
    Render(RenderArgs),

    /// List the clickable element ids of the current page.
    Targets(ClickArgs),
}

#[derive(Debug, Args)]
pub struct ClickArgs {
    /// Click the element with this id before rendering. Repeatable.
    #[arg(long = "click", value_name = "ID")]
    pub clicks: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub clicks: ClickArgs,

    /// Write the document here instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

impl Command {
    pub fn clicks(&self) -> &[String] {
        match self {
            Command::Render(args) => &args.clicks.clicks,
            Command::Targets(args) => &args.clicks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_level_applies_without_flags() {
        let cli = Cli::try_parse_from(["barako-web", "targets"]).unwrap();
        assert_eq!(cli.log_level(LevelFilter::Info), LevelFilter::Info);
    }

    #[test]
    fn test_flags_override_settings_level() {
        let cli = Cli::try_parse_from(["barako-web", "targets", "-vv"]).unwrap();
        assert_eq!(cli.log_level(LevelFilter::Error), LevelFilter::Debug);

        let cli = Cli::try_parse_from(["barako-web", "-q", "targets"]).unwrap();
        assert_eq!(cli.log_level(LevelFilter::Info), LevelFilter::Error);
    }

    #[test]
    fn test_parse_render_with_clicks() {
        let cli = Cli::try_parse_from([
            "barako-web",
            "-vv",
            "render",
            "--click",
            "navbar-toggle",
            "--click",
            "navbar-close",
            "-o",
            "page.html",
        ])
        .unwrap();

        assert_eq!(cli.log_level(LevelFilter::Warn), LevelFilter::Debug);
        assert_eq!(cli.command.clicks(), ["navbar-toggle", "navbar-close"]);
        match cli.command {
            Command::Render(args) => assert_eq!(args.out, Some(PathBuf::from("page.html"))),
            Command::Targets(_) => panic!("expected render"),
        }
    }

    #[test]
    fn test_parse_targets_with_global_config() {
        let cli = Cli::try_parse_from(["barako-web", "targets", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.command.clicks().is_empty());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["barako-web"]).is_err());
    }
}
