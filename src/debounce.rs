//! Filter Debouncer
//!
//! Free-text filter fields are committed on the trailing edge of a quiet
//! period; every other field commits immediately. Each keystroke issues a new
//! token and invalidates the previous one, so only a timer that was never
//! superseded may commit its value.

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

/// Name of the search box shared by both list pages
pub const SEARCH_FIELD: &str = "q";

/// Identifies one scheduled commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceToken {
    field: String,
    generation: u64,
}

impl DebounceToken {
    pub fn field(&self) -> &str {
        &self.field
    }
}

/// Outcome of a raw change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    /// Apply to the query state now
    Commit { field: String, value: Option<String> },
    /// Wait `delay`, then call `fire` with the token
    Schedule { token: DebounceToken, delay: Duration },
}

#[derive(Debug, Clone)]
struct Pending {
    generation: u64,
    value: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FilterDebouncer {
    delay: Duration,
    text_fields: BTreeSet<String>,
    pending: HashMap<String, Pending>,
    next_generation: u64,
}

impl FilterDebouncer {
    /// Debouncer with the search field registered as free text
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            text_fields: BTreeSet::from([SEARCH_FIELD.to_string()]),
            pending: HashMap::new(),
            next_generation: 0,
        }
    }

    pub fn on_change(&mut self, field: &str, value: Option<String>) -> FilterChange {
        if !self.text_fields.contains(field) {
            return FilterChange::Commit {
                field: field.to_string(),
                value,
            };
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        // Replacing the entry discards whatever was pending for this field
        self.pending.insert(field.to_string(), Pending { generation, value });
        FilterChange::Schedule {
            token: DebounceToken {
                field: field.to_string(),
                generation,
            },
            delay: self.delay,
        }
    }

    /// Called when a token's timer elapses. Yields the value to commit only if
    /// no newer change arrived for that field in the meantime.
    pub fn fire(&mut self, token: &DebounceToken) -> Option<(String, Option<String>)> {
        match self.pending.get(&token.field) {
            Some(pending) if pending.generation == token.generation => {
                let pending = self.pending.remove(&token.field)?;
                Some((token.field.clone(), pending.value))
            }
            _ => None,
        }
    }

    /// Forget all pending commits; runs when the owning page unmounts
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(change: FilterChange) -> DebounceToken {
        match change {
            FilterChange::Schedule { token, .. } => token,
            other => panic!("expected schedule, got {:?}", other),
        }
    }

    #[test]
    fn test_structured_field_commits_immediately() {
        let mut debouncer = FilterDebouncer::new(Duration::from_millis(500));
        let change = debouncer.on_change("role", Some("admin".to_string()));
        assert_eq!(
            change,
            FilterChange::Commit {
                field: "role".to_string(),
                value: Some("admin".to_string())
            }
        );
    }

    #[test]
    fn test_rapid_typing_commits_last_value_once() {
        let mut debouncer = FilterDebouncer::new(Duration::from_millis(500));
        let tokens: Vec<DebounceToken> = ["p", "pi", "piz", "pizza"]
            .iter()
            .map(|v| scheduled(debouncer.on_change(SEARCH_FIELD, Some(v.to_string()))))
            .collect();

        // Timers elapse in order; only the last survives
        let commits: Vec<_> = tokens.iter().filter_map(|t| debouncer.fire(t)).collect();
        assert_eq!(commits, vec![(SEARCH_FIELD.to_string(), Some("pizza".to_string()))]);
    }

    #[test]
    fn test_token_fires_once() {
        let mut debouncer = FilterDebouncer::new(Duration::from_millis(500));
        let token = scheduled(debouncer.on_change(SEARCH_FIELD, Some("abc".to_string())));
        assert!(debouncer.fire(&token).is_some());
        assert!(debouncer.fire(&token).is_none());
    }

    #[test]
    fn test_separate_quiet_periods_commit_separately() {
        let mut debouncer = FilterDebouncer::new(Duration::from_millis(500));
        let first = scheduled(debouncer.on_change(SEARCH_FIELD, Some("abc".to_string())));
        assert_eq!(debouncer.fire(&first).unwrap().1.as_deref(), Some("abc"));
        let second = scheduled(debouncer.on_change(SEARCH_FIELD, None));
        assert_eq!(debouncer.fire(&second), Some((SEARCH_FIELD.to_string(), None)));
    }

    #[test]
    fn test_cancel_all_drops_pending() {
        let mut debouncer = FilterDebouncer::new(Duration::from_millis(500));
        let token = scheduled(debouncer.on_change(SEARCH_FIELD, Some("MG".to_string())));
        assert_eq!(token.field(), SEARCH_FIELD);
        debouncer.cancel_all();
        assert!(debouncer.fire(&token).is_none());
    }
}
