use crate::corpus::{Category, Difficulty, TestDuration};
use crate::session::TypingSession;
use chrono::Local;
use serde::Serialize;
use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;

/// One finished test, as written to the results log. The session itself
/// never persists anything; logging is the caller's concern.
#[derive(Debug, Clone, Serialize)]
pub struct TestRecord {
    pub date: String,
    pub duration_secs: u64,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub wpm: f64,
    pub accuracy: f64,
    pub errors: usize,
}

impl TestRecord {
    pub fn from_session(
        session: &TypingSession,
        duration: TestDuration,
        category: Option<Category>,
        difficulty: Option<Difficulty>,
    ) -> Self {
        Self {
            date: Local::now().format("%c").to_string(),
            duration_secs: duration.secs(),
            category: category.map(|c| c.to_string()),
            difficulty: difficulty.map(|d| d.to_string()),
            wpm: session.wpm,
            accuracy: session.accuracy,
            errors: session.errors,
        }
    }
}

/// Append a record to the csv log at `path`, emitting a header if the file
/// is new.
pub fn append_record(path: &Path, record: &TestRecord) -> Result<(), Box<dyn Error>> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // If the log doesn't exist yet, we need to emit a header
    let needs_header = !path.exists();

    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);
    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}
