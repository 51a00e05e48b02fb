//! Bounded, most-recent-first agent log.

use std::collections::VecDeque;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Decision,
    Error,
}

impl Severity {
    /// CSS class suffix used by the web log list.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Decision => "decision",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub message: String,
    pub severity: Severity,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp, self.message)
    }
}

/// Source of wall-clock labels for log entries.
pub trait Clock {
    fn timestamp(&self) -> String;
}

impl<F> Clock for F
where
    F: Fn() -> String,
{
    fn timestamp(&self) -> String {
        self()
    }
}

/// UTC `HH:MM:SS` from the system clock. Native only: the web front-end
/// supplies its own clock.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format_hms(secs)
    }
}

pub fn format_hms(epoch_secs: u64) -> String {
    let day = epoch_secs % 86_400;
    format!("{:02}:{:02}:{:02}", day / 3600, (day / 60) % 60, day % 60)
}

/// Entries are stored newest first; pushing past `capacity` drops the oldest.
#[derive(Clone, Debug)]
pub struct LogBook {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogBook {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Prepend `entry`. Returns the evicted entry, if any.
    pub fn push(&mut self, entry: LogEntry) -> Option<LogEntry> {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
