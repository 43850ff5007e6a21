use prodle_core::Classify;
use prodle_core::Failure;

/// Failures raised by the repository collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    #[error("record not found")]
    NotFound,
    #[error("record already exists")]
    Duplicate,
    #[error("update rejected by mutator")]
    Rejected,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<tokio_postgres::Error> for DataError {
    fn from(e: tokio_postgres::Error) -> Self {
        Self::Unavailable(e.to_string())
    }
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        Self::Unavailable(format!("malformed document: {}", e))
    }
}

impl Classify for DataError {
    fn failure(&self) -> Failure {
        match self {
            Self::NotFound => Failure::NotFound,
            Self::Duplicate => Failure::Invalid,
            Self::Rejected => Failure::Invalid,
            Self::Unavailable(_) => Failure::Server,
        }
    }
}

#[cfg(feature = "server")]
impl actix_web::ResponseError for DataError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        prodle_core::status(self)
    }
    fn error_response(&self) -> actix_web::HttpResponse {
        prodle_core::reply(self)
    }
}
