use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::web;
use prodle_core::SESSION_COOKIE;
use std::future::Ready;

/// Extractor for authenticated requests.
/// Reads the session cookie and verifies it statelessly. A handler taking
/// `Auth` never runs unless verification passed, and identity-sensitive
/// work must key off [`Auth::username`], never request-body fields.
#[derive(Debug)]
pub struct Auth(pub Claims);

impl Auth {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
    pub fn username(&self) -> &str {
        self.0.username()
    }
}

impl FromRequest for Auth {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(Self::gate(req))
    }
}

impl Auth {
    fn gate(req: &HttpRequest) -> Result<Self, AuthError> {
        let crypto = req
            .app_data::<web::Data<Crypto>>()
            .ok_or(AuthError::Misconfigured)?;
        let cookie = req.cookie(SESSION_COOKIE);
        crypto
            .verify(cookie.as_ref().map(|c| c.value()))
            .map(Auth)
            .inspect_err(|e| log::debug!("rejected {} {}: {}", req.method(), req.path(), e))
    }
}
