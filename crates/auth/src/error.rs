use prodle_core::Classify;
use prodle_core::Failure;
use prodle_database::DataError;

/// Reasons a request fails the session gate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("no session token presented")]
    MissingToken,
    #[error("session token is malformed or forged")]
    InvalidToken,
    #[error("session token has expired")]
    ExpiredToken,
    #[error("token service not configured")]
    Misconfigured,
}

impl Classify for AuthError {
    fn failure(&self) -> Failure {
        match self {
            Self::MissingToken => Failure::Unauthorized,
            Self::InvalidToken => Failure::Forbidden,
            Self::ExpiredToken => Failure::Forbidden,
            Self::Misconfigured => Failure::Server,
        }
    }
}

/// Reasons registration, login, or lookup fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("username and password are required")]
    Malformed,
    #[error("user already exists")]
    UserExists,
    #[error("cannot find user")]
    UserNotFound,
    #[error("invalid password")]
    BadPassword,
    #[error(transparent)]
    Data(#[from] DataError),
}

impl Classify for CredentialError {
    fn failure(&self) -> Failure {
        match self {
            Self::Malformed => Failure::Invalid,
            Self::UserExists => Failure::Invalid,
            Self::UserNotFound => Failure::Invalid,
            Self::BadPassword => Failure::Invalid,
            Self::Data(e) => e.failure(),
        }
    }
}

#[cfg(feature = "server")]
mod response {
    use super::*;
    use actix_web::HttpResponse;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    impl ResponseError for AuthError {
        fn status_code(&self) -> StatusCode {
            prodle_core::status(self)
        }
        fn error_response(&self) -> HttpResponse {
            prodle_core::reply(self)
        }
    }

    impl ResponseError for CredentialError {
        fn status_code(&self) -> StatusCode {
            prodle_core::status(self)
        }
        fn error_response(&self) -> HttpResponse {
            prodle_core::reply(self)
        }
    }
}
