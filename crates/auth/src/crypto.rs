use super::*;
use prodle_core::Timestamp;
use prodle_database::DataError;

/// Signs and verifies session tokens with a process-wide HMAC secret.
/// Pure over its inputs: no I/O, no suspension.
#[derive(Clone)]
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
    validation: jsonwebtoken::Validation,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
        // expiry is checked against our own clock in verify_at
        validation.validate_exp = false;
        validation.leeway = 0;
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
            validation,
        }
    }
    pub fn issue(&self, username: &str) -> Result<String, DataError> {
        self.issue_at(username, prodle_core::now())
    }
    pub fn issue_at(&self, username: &str, now: Timestamp) -> Result<String, DataError> {
        self.encode(&Claims::new(username, now))
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, DataError> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
            .map_err(|e| DataError::Unavailable(format!("token signing failed: {}", e)))
    }
    pub fn verify(&self, token: Option<&str>) -> Result<Claims, AuthError> {
        self.verify_at(token, prodle_core::now())
    }
    pub fn verify_at(&self, token: Option<&str>, now: Timestamp) -> Result<Claims, AuthError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;
        let claims = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)?;
        match claims.expired(now) {
            true => Err(AuthError::ExpiredToken),
            false => Ok(claims),
        }
    }
}
