use super::*;
use prodle_core::User;
use prodle_database::*;
use std::sync::Arc;

/// Stats updater. The only writer of win/loss/streak counters.
pub struct Scorekeeper {
    repo: Arc<dyn Repository>,
}

impl Scorekeeper {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }
    /// Applies one outcome to the authenticated user's record as a single
    /// atomic update keyed by that username.
    pub async fn apply(&self, username: &str, outcome: Outcome) -> Result<User, StatsError> {
        let doc = self
            .repo
            .update(
                USERS,
                username,
                Box::new(move |doc| {
                    let mut user = decode::<User>(doc.clone())?;
                    outcome.apply(&mut user);
                    *doc = encode(&user)?;
                    Ok(())
                }),
            )
            .await?;
        let user = decode::<User>(doc)?;
        log::debug!("{} recorded a {} (streak {})", user.username(), outcome, user.streak);
        Ok(user)
    }
    /// Parses a raw outcome value before applying it. Unrecognized values
    /// fail without touching the record.
    pub async fn report(&self, username: &str, value: &str) -> Result<User, StatsError> {
        let outcome = value.parse::<Outcome>()?;
        self.apply(username, outcome).await
    }
}
