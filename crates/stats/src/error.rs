use prodle_core::Classify;
use prodle_core::Failure;
use prodle_database::DataError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("unrecognized outcome {0:?}, expected \"win\" or \"loss\"")]
    InvalidOutcome(String),
    #[error(transparent)]
    Data(#[from] DataError),
}

impl Classify for StatsError {
    fn failure(&self) -> Failure {
        match self {
            Self::InvalidOutcome(_) => Failure::Invalid,
            Self::Data(e) => e.failure(),
        }
    }
}

#[cfg(feature = "server")]
impl actix_web::ResponseError for StatsError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        prodle_core::status(self)
    }
    fn error_response(&self) -> actix_web::HttpResponse {
        prodle_core::reply(self)
    }
}
