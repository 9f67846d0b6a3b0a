//! Last-in-first-out history of completed actions.
//!
//! The log only records; nothing rewinds warehouse state from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::action::Action;

/// One recorded action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEntry {
    pub action: Action,
    pub description: String,
    pub recorded_at: DateTime<Utc>,
}

impl ActionEntry {
    pub fn new(action: Action, recorded_at: DateTime<Utc>) -> Self {
        Self {
            description: action.to_string(),
            action,
            recorded_at,
        }
    }

    pub fn action_type(&self) -> &'static str {
        self.action.action_type()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    // Oldest first; the head is the last element.
    entries: Vec<ActionEntry>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new head entry stamped with the current time. O(1) amortised.
    pub fn record(&mut self, action: Action) -> &ActionEntry {
        self.record_at(action, Utc::now())
    }

    pub fn record_at(&mut self, action: Action, recorded_at: DateTime<Utc>) -> &ActionEntry {
        self.entries.push(ActionEntry::new(action, recorded_at));
        let last = self.entries.len() - 1;
        &self.entries[last]
    }

    /// Remove and return the most recent entry.
    pub fn pop(&mut self) -> Option<ActionEntry> {
        self.entries.pop()
    }

    /// Most recent entry.
    pub fn head(&self) -> Option<&ActionEntry> {
        self.entries.last()
    }

    /// Entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &ActionEntry> + '_ {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn added(category: &str) -> Action {
        Action::CategoryAdded {
            category: category.to_string(),
        }
    }

    #[test]
    fn record_sets_head() {
        let mut log = ActionLog::new();
        let entry = log.record(added("Tools"));
        assert_eq!(entry.description, "Added category: Tools");
        assert_eq!(entry.action_type(), "category.added");

        log.record(added("Paint"));
        assert_eq!(log.head().unwrap().description, "Added category: Paint");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn iterates_most_recent_first() {
        let mut log = ActionLog::new();
        for name in ["A", "B", "C"] {
            log.record(added(name));
        }

        let texts: Vec<&str> = log.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Added category: C", "Added category: B", "Added category: A"]
        );
    }

    #[test]
    fn pop_discards_head_only() {
        let mut log = ActionLog::new();
        log.record(added("A"));
        log.record(added("B"));

        let popped = log.pop().unwrap();
        assert_eq!(popped.action, added("B"));
        assert_eq!(log.head().unwrap().action, added("A"));

        log.pop();
        assert!(log.pop().is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn record_at_keeps_given_timestamp() {
        let at = DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let mut log = ActionLog::new();
        log.record_at(added("A"), at);
        assert_eq!(log.head().unwrap().recorded_at, at);
    }
}
