use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;

/// Lifecycle of a daily-pool word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Available,
    Retired,
}

/// Persisted pool state. Stored as one document so that retiring a word
/// and publishing it are a single write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rotation {
    pub available: Vec<String>,
    pub retired: Vec<String>,
    pub current: Option<String>,
}

impl Rotation {
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut rotation = Self::default();
        rotation.restock(words);
        rotation
    }
    pub fn state(&self, word: &str) -> Option<State> {
        if self.retired.iter().any(|w| w == word) {
            Some(State::Retired)
        } else if self.available.iter().any(|w| w == word) {
            Some(State::Available)
        } else {
            None
        }
    }
    /// Retires a uniformly random available word and makes it current.
    /// `None` when nothing is available; the state is then unchanged.
    pub fn advance<R>(&mut self, rng: &mut R) -> Option<String>
    where
        R: rand::Rng,
    {
        if self.available.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.available.len());
        let word = self.available.swap_remove(i);
        self.retired.push(word.clone());
        self.current = Some(word.clone());
        Some(word)
    }
    /// Adds words never seen before. Retired words stay retired.
    pub fn restock<I>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.available.len();
        let mut seen = self
            .available
            .iter()
            .chain(self.retired.iter())
            .cloned()
            .collect::<HashSet<String>>();
        for word in words.into_iter().map(|w| w.trim().to_string()) {
            if !word.is_empty() && seen.insert(word.clone()) {
                self.available.push(word);
            }
        }
        self.available.len() - before
    }
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
