use prodle_core::Classify;
use prodle_core::Failure;
use prodle_database::DataError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("daily word pool is exhausted")]
    PoolExhausted,
    #[error("no word of the day has been set")]
    NoWordSet,
    #[error(transparent)]
    Data(#[from] DataError),
}

impl Classify for PoolError {
    fn failure(&self) -> Failure {
        match self {
            Self::PoolExhausted => Failure::Server,
            Self::NoWordSet => Failure::Server,
            Self::Data(e) => e.failure(),
        }
    }
}

#[cfg(feature = "server")]
impl actix_web::ResponseError for PoolError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        prodle_core::status(self)
    }
    fn error_response(&self) -> actix_web::HttpResponse {
        prodle_core::reply(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("invalid rotation time {0:?}, expected HH:MM")]
    Time(String),
    #[error("invalid utc offset {0:?}, expected +HH:MM or -HH:MM")]
    Offset(String),
}
