//! Rolling gesture history.
//!
//! Keeps a bounded buffer of recent non-idle control events with per-type
//! counts. Useful for debugging detection timing, spotting accidental
//! triggers, and summarizing a replayed session.

use std::collections::{BTreeMap, VecDeque};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::event::PointerEvent;
use crate::ModelError;

/// A single recorded event with its frame timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Milliseconds since session start.
    pub t_ms: u64,

    /// The event that fired.
    pub event: PointerEvent,
}

/// Rolling buffer of recent gesture events with per-type counts.
#[derive(Debug)]
pub struct GestureHistory {
    max_entries: usize,
    buffer: VecDeque<HistoryRecord>,
    counts: BTreeMap<String, u64>,
}

/// On-disk representation for save/load.
#[derive(Debug, Serialize, Deserialize)]
struct HistoryFile {
    records: Vec<HistoryRecord>,
    counts: BTreeMap<String, u64>,
}

impl GestureHistory {
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries: max_entries.max(1),
            buffer: VecDeque::with_capacity(max_entries.max(1)),
            counts: BTreeMap::new(),
        }
    }

    /// Record an event. Idle events are skipped as noise.
    pub fn record(&mut self, t_ms: u64, event: PointerEvent) {
        if event.is_idle() {
            return;
        }
        if self.buffer.len() == self.max_entries {
            self.buffer.pop_front();
        }
        self.buffer.push_back(HistoryRecord { t_ms, event });
        *self.counts.entry(event.kind_name().to_string()).or_insert(0) += 1;
    }

    /// Total non-idle events recorded (including ones evicted from the buffer).
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Per-type counts, sorted by descending frequency.
    pub fn counts(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(name, count)| (name.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Last `n` recorded events, oldest first.
    pub fn last_n(&self, n: usize) -> Vec<HistoryRecord> {
        let skip = self.buffer.len().saturating_sub(n);
        self.buffer.iter().skip(skip).copied().collect()
    }

    /// Multi-line text summary of event frequencies.
    pub fn summary(&self) -> String {
        let total = self.total();
        let mut out = format!("--- Gesture Session Summary ({total} events) ---\n");
        for (name, count) in self.counts() {
            let pct = if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            out.push_str(&format!("  {name:<12} {count:>5}  ({pct:.1}%)\n"));
        }
        out
    }

    /// Save history to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let path = path.as_ref();
        let file = HistoryFile {
            records: self.buffer.iter().copied().collect(),
            counts: self.counts.clone(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(|e| ModelError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json).map_err(|e| ModelError::IoError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load history from a JSON file, replacing current contents.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file: HistoryFile =
            serde_json::from_str(&content).map_err(|e| ModelError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        self.buffer.clear();
        for record in file.records.into_iter().rev().take(self.max_entries) {
            self.buffer.push_front(record);
        }
        self.counts = file.counts;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.counts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_events_are_skipped() {
        let mut history = GestureHistory::new(10);
        history.record(0, PointerEvent::Idle);
        history.record(10, PointerEvent::move_to(1, 2));
        assert_eq!(history.total(), 1);
        assert_eq!(history.last_n(10).len(), 1);
    }

    #[test]
    fn test_buffer_evicts_but_counts_persist() {
        let mut history = GestureHistory::new(2);
        history.record(0, PointerEvent::click(0, 0));
        history.record(10, PointerEvent::click(1, 1));
        history.record(20, PointerEvent::click(2, 2));

        assert_eq!(history.last_n(10).len(), 2);
        assert_eq!(history.total(), 3);
        assert_eq!(history.last_n(1)[0].event, PointerEvent::click(2, 2));
    }

    #[test]
    fn test_counts_sorted_by_frequency() {
        let mut history = GestureHistory::new(10);
        history.record(0, PointerEvent::move_to(0, 0));
        history.record(10, PointerEvent::move_to(1, 1));
        history.record(20, PointerEvent::click(1, 1));

        let counts = history.counts();
        assert_eq!(counts[0], ("move".to_string(), 2));
        assert_eq!(counts[1], ("click".to_string(), 1));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = std::env::temp_dir().join("handpilot_test_history");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("history.json");

        let mut history = GestureHistory::new(10);
        history.record(0, PointerEvent::drag_start(5, 5));
        history.record(100, PointerEvent::drag_end(9, 9));
        history.save(&path).unwrap();

        let mut loaded = GestureHistory::new(10);
        loaded.load(&path).unwrap();
        assert_eq!(loaded.total(), 2);
        assert_eq!(loaded.last_n(1)[0].event, PointerEvent::drag_end(9, 9));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_summary_contains_percentages() {
        let mut history = GestureHistory::new(10);
        history.record(0, PointerEvent::click(0, 0));
        let summary = history.summary();
        assert!(summary.contains("1 events"));
        assert!(summary.contains("click"));
        assert!(summary.contains("100.0%"));
    }
}
