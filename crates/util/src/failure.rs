use serde::Deserialize;
use serde::Serialize;

/// The four client-visible classes every error collapses into,
/// with authorization split by whether a credential was presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Failure {
    Invalid,
    Unauthorized,
    Forbidden,
    NotFound,
    Server,
}

impl Failure {
    pub const fn status(&self) -> u16 {
        match self {
            Self::Invalid => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Server => 500,
        }
    }
}

/// Implemented by every error that can reach a client.
pub trait Classify {
    fn failure(&self) -> Failure;
}

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: Failure,
    pub error: String,
}

impl ErrorBody {
    pub fn new<E>(err: &E) -> Self
    where
        E: Classify + std::fmt::Display,
    {
        Self {
            kind: err.failure(),
            error: err.to_string(),
        }
    }
}

/// Status code for an error's class.
#[cfg(feature = "server")]
pub fn status<E>(err: &E) -> actix_web::http::StatusCode
where
    E: Classify,
{
    actix_web::http::StatusCode::from_u16(err.failure().status())
        .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR)
}

/// Renders an error as its JSON response. Server-class causes are logged
/// here so no 500 leaves without a trace.
#[cfg(feature = "server")]
pub fn reply<E>(err: &E) -> actix_web::HttpResponse
where
    E: Classify + std::fmt::Display,
{
    if err.failure() == Failure::Server {
        log::error!("{}", err);
    }
    actix_web::HttpResponse::build(status(err)).json(ErrorBody::new(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn statuses_are_distinct() {
        let all = [
            Failure::Invalid,
            Failure::Unauthorized,
            Failure::Forbidden,
            Failure::NotFound,
            Failure::Server,
        ];
        let mut codes = all.iter().map(|f| f.status()).collect::<Vec<_>>();
        codes.dedup();
        assert_eq!(codes, vec![400, 401, 403, 404, 500]);
    }
    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&Failure::NotFound).unwrap();
        assert_eq!(json, "\"not_found\"");
    }
}
