use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Persisted player record, keyed by exact-match username.
///
/// Counters only move through [`User::win`] and [`User::lose`]:
/// wins and losses never decrease, streak counts consecutive wins
/// since the last loss (or since creation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(rename = "password")]
    pub hashword: String,
    pub wins: Count,
    pub losses: Count,
    pub streak: Count,
}

impl User {
    pub fn new(username: String, hashword: String) -> Self {
        Self {
            username,
            hashword,
            wins: 0,
            losses: 0,
            streak: 0,
        }
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn hashword(&self) -> &str {
        &self.hashword
    }
    pub fn win(&mut self) {
        self.wins = self.wins.saturating_add(1);
        self.streak = self.streak.saturating_add(1);
    }
    pub fn lose(&mut self) {
        self.losses = self.losses.saturating_add(1);
        self.streak = 0;
    }
    pub fn profile(&self) -> Profile {
        Profile::from(self)
    }
}

/// Public view of a [`User`]. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub wins: Count,
    pub losses: Count,
    pub streak: Count,
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            wins: user.wins,
            losses: user.losses,
            streak: user.streak,
        }
    }
}
