use prodle_database::*;
use std::collections::HashSet;
use std::sync::Arc;

/// Fields that may hold the word in a dictionary document.
/// `iambic` is how the legacy `words` collection stores it.
const FIELDS: [&str; 2] = ["word", "iambic"];

/// Legal guesses. Built once at startup and never mutated; clones share storage.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Arc<[String]>,
    index: Arc<HashSet<String>>,
}

impl Dictionary {
    /// Keeps first occurrences in order, dropping blanks and repeats.
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut index = HashSet::new();
        let words = words
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .filter(|w| index.insert(w.clone()))
            .collect::<Vec<_>>();
        Self {
            words: words.into(),
            index: Arc::new(index),
        }
    }
    /// One word per line.
    pub fn parse(text: &str) -> Self {
        Self::new(text.lines().map(String::from))
    }
    pub async fn load(path: &std::path::Path) -> std::io::Result<Self> {
        tokio::fs::read_to_string(path).await.map(|text| Self::parse(&text))
    }
    /// Reads the `words` collection, one `{ "word": .. }` or
    /// `{ "iambic": .. }` document per entry.
    pub async fn fetch(repo: &dyn Repository) -> Result<Self, DataError> {
        Ok(Self::new(
            repo.find_all(WORDS)
                .await?
                .iter()
                .filter_map(|doc| {
                    FIELDS
                        .iter()
                        .find_map(|f| doc.get(*f).and_then(|w| w.as_str()))
                })
                .map(String::from),
        ))
    }
    pub fn words(&self) -> &[String] {
        &self.words
    }
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }
    pub fn len(&self) -> usize {
        self.words.len()
    }
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
