use super::*;
use prodle_core::User;
use prodle_database::*;
use std::sync::Arc;

/// Credential store: owns user accounts and exchanges passwords for tokens.
/// Usernames match exactly; "Alice" and "alice" are different accounts.
pub struct Credentials {
    repo: Arc<dyn Repository>,
    crypto: Crypto,
}

impl Credentials {
    pub fn new(repo: Arc<dyn Repository>, crypto: Crypto) -> Self {
        Self { repo, crypto }
    }
}

impl Credentials {
    /// Creates an account with zeroed stats. Only the hash is stored.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, CredentialError> {
        if username.is_empty() || password.is_empty() {
            return Err(CredentialError::Malformed);
        }
        if self.lookup(username).await?.is_some() {
            return Err(CredentialError::UserExists);
        }
        let hashword = hashed(password).await?;
        let user = User::new(username.to_string(), hashword);
        match self.repo.insert(USERS, username, encode(&user)?).await {
            Ok(_) => Ok(user),
            Err(DataError::Duplicate) => Err(CredentialError::UserExists),
            Err(e) => Err(e.into()),
        }
    }
    /// Verifies the password and issues a session token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, CredentialError> {
        let user = self
            .lookup(username)
            .await?
            .ok_or(CredentialError::UserNotFound)?;
        if !verified(password, user.hashword()).await? {
            return Err(CredentialError::BadPassword);
        }
        Ok(self.crypto.issue(user.username())?)
    }
    pub async fn get_user(&self, username: &str) -> Result<User, CredentialError> {
        self.lookup(username)
            .await?
            .ok_or(CredentialError::Data(DataError::NotFound))
    }
    async fn lookup(&self, username: &str) -> Result<Option<User>, DataError> {
        self.repo
            .find_one(USERS, &Filter::key(username))
            .await?
            .map(decode::<User>)
            .transpose()
    }
}

/// Argon2 is CPU-bound, so it runs off the async workers.
async fn hashed(password: &str) -> Result<String, DataError> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || password::hash(&password))
        .await
        .map_err(|e| DataError::Unavailable(e.to_string()))?
        .map_err(|e| DataError::Unavailable(format!("password hashing failed: {}", e)))
}

async fn verified(password: &str, hashword: &str) -> Result<bool, DataError> {
    let password = password.to_string();
    let hashword = hashword.to_string();
    tokio::task::spawn_blocking(move || password::verify(&password, &hashword))
        .await
        .map_err(|e| DataError::Unavailable(e.to_string()))
}
