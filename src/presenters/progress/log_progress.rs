use tracing::info;

use crate::controllers::ports::progress_reporter::ProgressReporter;

/// Reports progress as `tracing` events.
#[derive(Debug, Clone, Default)]
pub struct LogProgress {
    label: String,
}

impl LogProgress {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl ProgressReporter for LogProgress {
    fn report(&mut self, current: usize, total: usize) {
        info!(label = %self.label, current, total, "progress");
    }
}
