//! Flat key-value store of the user's answers.

use indexmap::IndexMap;

/// Mapping from answer key to answer text.
///
/// Absence of a key means "not yet answered"; reads default to `""`.
/// Keys keep the order in which they were first answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    values: IndexMap<String, String>,
}

impl AnswerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the previous value if any.
    pub fn record(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// The answer for `key`, or `""` when unanswered.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    /// Whether `key` has ever been recorded, even as an empty string.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in first-answered order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of keys among `keys` holding a non-empty answer.
    #[must_use]
    pub fn answered_count<S: AsRef<str>>(&self, keys: &[S]) -> usize {
        keys.iter()
            .filter(|k| !self.get(k.as_ref()).is_empty())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_empty() {
        let store = AnswerStore::new();
        assert_eq!(store.get("period"), "");
        assert!(!store.contains("period"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_record_overwrites() {
        let mut store = AnswerStore::new();
        assert_eq!(store.record("period", "小学生"), None);
        assert_eq!(
            store.record("period", "中学生"),
            Some("小学生".to_string())
        );
        assert_eq!(store.get("period"), "中学生");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_value_is_recorded() {
        let mut store = AnswerStore::new();
        store.record("growth", "");
        assert!(store.contains("growth"));
        assert_eq!(store.get("growth"), "");
    }

    #[test]
    fn test_overwrite_keeps_first_answered_order() {
        let mut store = AnswerStore::new();
        store.record("a", "1");
        store.record("b", "2");
        store.record("a", "3");
        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_answered_count_ignores_empty() {
        let mut store = AnswerStore::new();
        store.record("a", "x");
        store.record("b", "");
        assert_eq!(store.answered_count(&["a", "b", "c"]), 1);
    }
}
