pub mod bank;
pub mod generator;
pub mod tracker;

// Re-export the main types for convenience
pub use bank::{Category, CategoryBank, Difficulty, DifficultyEntry, SentenceCorpus};
pub use generator::{TestDuration, TextGenerator};
pub use tracker::SentenceUsageTracker;
