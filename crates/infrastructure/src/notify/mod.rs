mod ntfy;

pub use ntfy::{NoopNotifier, NtfyNotifier};
