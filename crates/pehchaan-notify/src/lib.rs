//! User-facing notifications (toasts) and the sinks that display them

pub mod base;
pub mod console;
pub mod recording;
pub mod registry;

pub use base::{Notifier, Toast, ToastVariant};
pub use console::ConsoleNotifier;
pub use recording::RecordingNotifier;
pub use registry::NotifierRegistry;
