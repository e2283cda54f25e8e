use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;

static CORPUS_DIR: Dir = include_dir!("src/sentences");

/// Topic of a corpus entry. Closed set; adding a category means adding a
/// json file under `src/sentences` and a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, ValueEnum, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Tech,
    Literature,
    General,
    Business,
    Science,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Tech,
        Category::Literature,
        Category::General,
        Category::Business,
        Category::Science,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, ValueEnum, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryBank {
    pub category: Category,
    pub entries: Vec<DifficultyEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DifficultyEntry {
    pub difficulty: Difficulty,
    pub sentences: Vec<String>,
}

/// The static sentence bank, embedded at compile time. Read-only; selection
/// state lives in the generator, not here.
#[derive(Debug, Clone)]
pub struct SentenceCorpus {
    banks: Vec<CategoryBank>,
}

impl SentenceCorpus {
    pub fn load() -> Self {
        let banks = CORPUS_DIR
            .files()
            .map(|file| {
                let text = file
                    .contents_utf8()
                    .expect("corpus file is not valid utf-8");
                from_str(text).expect("unable to deserialize corpus json")
            })
            .collect();
        Self { banks }
    }

    /// All sentences matching the given filters; `None` means unfiltered.
    pub fn sentences(
        &self,
        category: Option<Category>,
        difficulty: Option<Difficulty>,
    ) -> Vec<&str> {
        self.banks
            .iter()
            .filter(|bank| category.map_or(true, |c| bank.category == c))
            .flat_map(|bank| bank.entries.iter())
            .filter(|entry| difficulty.map_or(true, |d| entry.difficulty == d))
            .flat_map(|entry| entry.sentences.iter().map(String::as_str))
            .collect()
    }

    pub fn pool_size(&self, category: Option<Category>, difficulty: Option<Difficulty>) -> usize {
        self.sentences(category, difficulty).len()
    }
}
