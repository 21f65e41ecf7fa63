//! Drives the page: build it from settings, replay clicks, emit output.

use std::fs;
use std::io::{self, Write};

use barako::{Alert, Runtime};

use crate::cli::{Command, RenderArgs};
use crate::components::PageShell;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Page runtime configured from `settings`.
pub fn runtime(settings: &Settings) -> Runtime<PageShell> {
    Runtime::new(PageShell::with_nav_links(settings.nav_links()))
}

/// Click each id in order, appending raised alerts to `alerts`.
///
/// Stops at the first id that is not clickable. Alerts from the clicks
/// before it are already in `alerts` when the error comes back.
pub fn replay(
    runtime: &mut Runtime<PageShell>,
    clicks: &[String],
    alerts: &mut Vec<Alert>,
) -> Result<()> {
    for id in clicks {
        let clicked = runtime.click(id);
        alerts.extend(runtime.take_alerts());
        clicked?;
    }
    Ok(())
}

/// Full HTML document for the current render.
pub fn document(settings: &Settings, runtime: &Runtime<PageShell>) -> String {
    settings.document().render(runtime.root())
}

/// Run one command, collecting the alerts raised along the way.
pub fn run(settings: &Settings, command: &Command, alerts: &mut Vec<Alert>) -> Result<()> {
    let mut rt = runtime(settings);
    replay(&mut rt, command.clicks(), alerts)?;

    match command {
        Command::Render(args) => write_document(args, &document(settings, &rt))?,
        Command::Targets(_) => {
            let mut out = io::stdout().lock();
            for id in rt.targets() {
                writeln!(out, "{id}").map_err(Error::Stdout)?;
            }
        }
    }
    Ok(())
}

fn write_document(args: &RenderArgs, html: &str) -> Result<()> {
    match &args.out {
        Some(path) => {
            fs::write(path, html).map_err(|source| Error::Output {
                path: path.clone(),
                source,
            })?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(html.as_bytes())
                .and_then(|_| out.write_all(b"\n"))
                .map_err(Error::Stdout)?;
        }
    }
    Ok(())
}
