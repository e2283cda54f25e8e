use super::bank::{Category, Difficulty, SentenceCorpus};
use super::tracker::SentenceUsageTracker;
use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Supported test durations. The word targets are calibrated so a ~200 WPM
/// typist does not exhaust the text before the timer, while the random
/// offset keeps repeated tests from having identical length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum TestDuration {
    #[value(name = "30")]
    #[strum(serialize = "30")]
    Secs30,
    #[value(name = "60")]
    #[strum(serialize = "60")]
    Secs60,
    #[value(name = "180")]
    #[strum(serialize = "180")]
    Secs180,
}

impl TestDuration {
    pub fn secs(&self) -> u64 {
        match self {
            TestDuration::Secs30 => 30,
            TestDuration::Secs60 => 60,
            TestDuration::Secs180 => 180,
        }
    }

    pub fn word_target_base(&self) -> usize {
        match self {
            TestDuration::Secs30 => 90,
            TestDuration::Secs60 => 220,
            TestDuration::Secs180 => 540,
        }
    }

    pub fn word_target_spread(&self) -> usize {
        match self {
            TestDuration::Secs30 => 10,
            TestDuration::Secs60 => 30,
            TestDuration::Secs180 => 60,
        }
    }

    /// Target word count for one generated text: base plus a random offset
    /// within the spread.
    pub fn target_word_count(&self) -> usize {
        self.word_target_base() + rand::thread_rng().gen_range(0..self.word_target_spread())
    }
}

/// Assembles practice texts from the static corpus while avoiding sentence
/// repeats. The tracker spans calls on purpose: two consecutively generated
/// texts should share as few sentences as possible.
pub struct TextGenerator {
    corpus: SentenceCorpus,
    tracker: SentenceUsageTracker,
}

impl Default for TextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TextGenerator {
    pub fn new() -> Self {
        Self::with_corpus(SentenceCorpus::load())
    }

    pub fn with_corpus(corpus: SentenceCorpus) -> Self {
        Self {
            corpus,
            tracker: SentenceUsageTracker::new(),
        }
    }

    pub fn corpus(&self) -> &SentenceCorpus {
        &self.corpus
    }

    pub fn tracker(&self) -> &SentenceUsageTracker {
        &self.tracker
    }

    /// Pick one sentence under the given filters, preferring sentences not
    /// yet emitted. An empty filter match falls back to the whole corpus;
    /// an exhausted no-repeat window clears itself and repeats become
    /// acceptable again.
    pub fn select_sentence(
        &mut self,
        category: Option<Category>,
        difficulty: Option<Difficulty>,
    ) -> String {
        let mut pool = self.corpus.sentences(category, difficulty);
        if pool.is_empty() {
            pool = self.corpus.sentences(None, None);
        }

        let fresh: Vec<&str> = pool
            .iter()
            .copied()
            .filter(|s| !self.tracker.contains(s))
            .collect();
        let pool = if fresh.is_empty() {
            self.tracker.clear();
            pool
        } else {
            fresh
        };

        let pick = *pool
            .choose(&mut rand::thread_rng())
            .expect("sentence corpus is never empty");
        self.tracker.record(pick);
        pick.to_string()
    }

    /// Build one practice text: accumulate distinct sentences until their
    /// word total reaches the duration's target, join with single spaces,
    /// then truncate to exactly the target word count.
    pub fn generate_test_text(
        &mut self,
        duration: TestDuration,
        category: Option<Category>,
        difficulty: Option<Difficulty>,
    ) -> String {
        let target = duration.target_word_count();
        let pool_size = self.corpus.pool_size(category, difficulty).max(1);

        let mut chosen: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut word_count = 0;
        let mut stalls = 0;

        while word_count < target {
            let sentence = self.select_sentence(category, difficulty);
            if seen.contains(&sentence) {
                stalls += 1;
                // Under narrow filters the pool may hold fewer words than
                // the target; after a full pool's worth of duplicate draws,
                // accept the repeat rather than spin.
                if stalls <= pool_size {
                    continue;
                }
            }
            stalls = 0;
            word_count += sentence.split(' ').count();
            seen.insert(sentence.clone());
            chosen.push(sentence);
        }

        let joined = chosen.join(" ");
        joined
            .split(' ')
            .take(target)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Reset the no-repeat window, e.g. at a session boundary.
    pub fn clear_sentence_cache(&mut self) {
        self.tracker.clear();
    }
}
