//! User-facing failure notifications
//!
//! Every failed API call surfaces exactly one notification through this
//! seam; the success path surfaces none. The terminal implementation is
//! installed at context construction, tests swap in a recording one.

use colored::Colorize;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Level {
    Warning,
    Error,
}

/// Sink for user-facing notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, level: Level, message: &str);
}

/// Writes notifications to stderr, colored by severity
#[derive(Debug, Default)]
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, level: Level, message: &str) {
        match level {
            Level::Warning => eprintln!("{} {}", "⚠".yellow(), message),
            Level::Error => eprintln!("{} {}", "✗".red(), message),
        }
    }
}

/// Records notifications for test assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    entries: std::sync::Mutex<Vec<(Level, String)>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|e| e.iter().map(|(_, m)| m.clone()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, level: Level, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_string()));
        }
    }
}
