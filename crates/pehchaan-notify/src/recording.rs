//! In-memory sink that keeps every toast it receives

use crate::base::{Notifier, Toast};
use std::sync::{Arc, Mutex};

/// Records toasts; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every toast received so far, oldest first
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn titles(&self) -> Vec<String> {
        self.toasts().into_iter().map(|t| t.title).collect()
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.toasts.lock() {
            guard.clear();
        }
    }
}

impl Notifier for RecordingNotifier {
    fn name(&self) -> &str {
        "recording"
    }

    fn notify(&mut self, toast: &Toast) {
        if let Ok(mut guard) = self.toasts.lock() {
            guard.push(toast.clone());
        }
    }
}
