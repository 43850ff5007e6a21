use prodle_core::TOKEN_DURATION;
use prodle_core::Timestamp;

/// Identity claim carried inside a session token.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: Timestamp,
    pub exp: Timestamp,
}

impl Claims {
    pub fn new(username: &str, issued: Timestamp) -> Self {
        Self {
            sub: username.to_string(),
            iat: issued,
            exp: issued + TOKEN_DURATION.as_secs() as Timestamp,
        }
    }
    pub fn expired(&self, now: Timestamp) -> bool {
        now > self.exp
    }
    pub fn username(&self) -> &str {
        &self.sub
    }
}
