use super::*;
use prodle_core::User;

/// Result of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    pub fn apply(&self, user: &mut User) {
        match self {
            Self::Win => user.win(),
            Self::Loss => user.lose(),
        }
    }
}

impl std::str::FromStr for Outcome {
    type Err = StatsError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(Self::Win),
            "loss" => Ok(Self::Loss),
            _ => Err(StatsError::InvalidOutcome(s.to_string())),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Loss => write!(f, "loss"),
        }
    }
}

/// Body of an outcome report.
#[derive(Debug, serde::Deserialize)]
pub struct OutcomeRequest {
    pub value: String,
}
