//! Registry that fans toasts out to several sinks

use crate::base::{Notifier, Toast};

/// Registry for managing multiple notifiers
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            notifiers: Vec::new(),
        }
    }

    /// Register a notifier; disabled sinks are skipped
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        if notifier.is_enabled() {
            self.notifiers.push(notifier);
        } else {
            tracing::debug!(notifier = notifier.name(), "skipping disabled notifier");
        }
    }

    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotifierRegistry {
    fn name(&self) -> &str {
        "registry"
    }

    fn notify(&mut self, toast: &Toast) {
        for notifier in &mut self.notifiers {
            notifier.notify(toast);
        }
    }
}
