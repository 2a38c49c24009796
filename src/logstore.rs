//! In-memory, append-only history of finalized reports.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One logged report. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub info: String,
    pub date: String,
}

/// Append-only list, alive for the process only. No dedup, no cap.
#[derive(Debug, Default)]
pub struct LogStore {
    entries: Vec<LogEntry>,
}

impl LogStore {
    /// Append a report with the current local timestamp. Empty text is a
    /// no-op; returns whether an entry was added.
    pub fn append(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.entries.push(LogEntry {
            info: text.to_string(),
            date: local_timestamp(),
        });
        true
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Current time in the local offset, formatted for display. Falls back to
/// UTC when the local offset cannot be determined (e.g. multi-threaded
/// environments on Unix).
pub fn local_timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    let local = match time::UtcOffset::current_local_offset() {
        Ok(offset) => now.to_offset(offset),
        Err(_) => now,
    };
    let format = time::macros::format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    local
        .format(&format)
        .unwrap_or_else(|_| local.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_a_noop() {
        let mut log = LogStore::default();
        assert!(!log.append(""));
        assert!(log.is_empty());
    }

    #[test]
    fn append_records_text_and_timestamp() {
        let mut log = LogStore::default();
        assert!(log.append("report body"));
        assert_eq!(log.len(), 1);
        let entry = &log.entries()[0];
        assert_eq!(entry.info, "report body");
        assert!(!entry.date.is_empty());
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut log = LogStore::default();
        log.append("first");
        log.append("second");
        let infos: Vec<_> = log.entries().iter().map(|e| e.info.as_str()).collect();
        assert_eq!(infos, ["first", "second"]);
    }
}
