use std::sync::{Arc, RwLock};

use crate::alert::Alert;

/// Page-wide context shared with every handler.
///
/// Cheap to clone; clones share the same alert queue.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    alerts: Arc<RwLock<Vec<Alert>>>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an alert for the host to present.
    pub fn alert(&self, alert: impl Into<Alert>) {
        let alert = alert.into();
        log::debug!("alert raised: {}", alert.message);
        if let Ok(mut alerts) = self.alerts.write() {
            alerts.push(alert);
        }
    }

    /// Drain queued alerts, oldest first.
    pub fn take_alerts(&self) -> Vec<Alert> {
        self.alerts
            .write()
            .map(|mut alerts| std::mem::take(&mut *alerts))
            .unwrap_or_default()
    }

    /// Number of alerts waiting to be drained.
    pub fn pending_alerts(&self) -> usize {
        self.alerts.read().map(|a| a.len()).unwrap_or(0)
    }
}
