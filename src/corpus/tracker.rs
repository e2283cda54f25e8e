use std::collections::HashSet;

/// The no-repeat window: sentences already emitted by a generator, excluded
/// from selection until the eligible pool runs dry. Each generator owns its
/// tracker, so independent sessions never share repeat state.
#[derive(Debug, Clone, Default)]
pub struct SentenceUsageTracker {
    used: HashSet<String>,
}

impl SentenceUsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, sentence: &str) -> bool {
        self.used.contains(sentence)
    }

    pub fn record(&mut self, sentence: &str) {
        self.used.insert(sentence.to_string());
    }

    pub fn clear(&mut self) {
        self.used.clear();
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_contains() {
        let mut tracker = SentenceUsageTracker::new();
        assert!(!tracker.contains("a sentence"));

        tracker.record("a sentence");
        assert!(tracker.contains("a sentence"));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_record_is_deduplicated() {
        let mut tracker = SentenceUsageTracker::new();
        tracker.record("same");
        tracker.record("same");
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_clear_empties_the_window() {
        let mut tracker = SentenceUsageTracker::new();
        tracker.record("one");
        tracker.record("two");

        tracker.clear();

        assert!(tracker.is_empty());
        assert!(!tracker.contains("one"));
    }
}
