//! Terminal sink: prints toasts to stderr

use crate::base::{Notifier, Toast};

pub struct ConsoleNotifier {
    name: String,
    quiet: bool,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self {
            name: "console".to_string(),
            quiet: false,
        }
    }

    /// A console sink that drops everything (used with `--quiet`)
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::new()
        }
    }

    pub fn format(toast: &Toast) -> String {
        let marker = if toast.is_destructive() { "!" } else { "*" };
        if toast.description.is_empty() {
            format!("[{marker}] {}", toast.title)
        } else {
            format!("[{marker}] {}: {}", toast.title, toast.description)
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        !self.quiet
    }

    fn notify(&mut self, toast: &Toast) {
        if toast.is_destructive() {
            tracing::warn!(title = %toast.title, "toast");
        } else {
            tracing::debug!(title = %toast.title, "toast");
        }
        eprintln!("{}", Self::format(toast));
    }
}
