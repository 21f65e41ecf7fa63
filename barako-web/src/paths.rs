//! Where barako-web keeps its files.
//!
//! Settings live in the platform config directory and run logs in the cache
//! directory, both resolved through `directories`.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "barako", "barako-web")
}

/// Default settings file, e.g. `~/.config/barako-web/settings.toml` on Linux.
pub fn settings_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("settings.toml"))
}

/// Log directory under the platform cache dir, e.g. `~/.cache/barako-web`.
pub fn log_dir() -> Option<LogDir> {
    project_dirs().map(|dirs| LogDir::new(dirs.cache_dir()))
}

/// A directory holding `latest.log` plus archived logs of earlier runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDir {
    root: PathBuf,
}

impl LogDir {
    pub const LATEST: &'static str = "latest.log";
    /// Archived logs kept after pruning.
    pub const KEEP: usize = 25;

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn latest(&self) -> PathBuf {
        self.root.join(Self::LATEST)
    }

    /// Archive the previous run's log, prune old archives and create a fresh
    /// `latest.log`.
    pub fn open_latest(&self) -> io::Result<File> {
        fs::create_dir_all(&self.root)?;
        self.archive_latest()?;
        self.prune(Self::KEEP)?;
        File::create(self.latest())
    }

    /// Move `latest.log` to a timestamped name. Returns the new path, or
    /// `None` when there was nothing to archive.
    pub fn archive_latest(&self) -> io::Result<Option<PathBuf>> {
        let latest = self.latest();
        if !latest.exists() {
            return Ok(None);
        }
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S%.3f").to_string();
        let target = self.unused_name(&stamp);
        fs::rename(&latest, &target)?;
        Ok(Some(target))
    }

    // Runs inside the same millisecond get a numeric suffix; rename would
    // otherwise replace the earlier archive.
    fn unused_name(&self, stamp: &str) -> PathBuf {
        let mut candidate = self.root.join(format!("{stamp}.log"));
        let mut n = 1;
        while candidate.exists() {
            candidate = self.root.join(format!("{stamp}_{n}.log"));
            n += 1;
        }
        candidate
    }

    /// Archived logs, oldest first.
    pub fn archived(&self) -> io::Result<Vec<PathBuf>> {
        let mut logs = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.ends_with(".log") && name != Self::LATEST {
                let modified = entry.metadata().and_then(|m| m.modified()).ok();
                logs.push((modified, entry.path()));
            }
        }
        logs.sort();
        Ok(logs.into_iter().map(|(_, path)| path).collect())
    }

    /// Delete all but the `keep` newest archives. Returns how many went.
    pub fn prune(&self, keep: usize) -> io::Result<usize> {
        let logs = self.archived()?;
        let excess = logs.len().saturating_sub(keep);
        for path in &logs[..excess] {
            fs::remove_file(path)?;
        }
        Ok(excess)
    }
}
