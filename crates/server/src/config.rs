use clap::ArgAction;
use clap::Parser;
use prodle_auth::CookiePolicy;
use prodle_words::Schedule;
use prodle_words::ScheduleError;
use std::path::PathBuf;

/// Process configuration. Every flag can also be set from the environment.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "prodle backend", long_about = None)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind_addr: String,
    /// Shared secret for signing session tokens.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true, value_parser = secret)]
    pub jwt_secret: String,
    /// PostgreSQL connection string. Without one, state lives in memory.
    #[arg(long, env = "DB_URL", hide_env_values = true)]
    pub db_url: Option<String>,
    /// Newline-delimited dictionary. Without one, the `words` collection is read.
    #[arg(long, env = "WORDS_PATH")]
    pub words_path: Option<PathBuf>,
    /// Newline-delimited daily pool. Without one, the dictionary seeds the pool.
    #[arg(long, env = "POOL_PATH")]
    pub pool_path: Option<PathBuf>,
    /// Local time of the daily rotation, `HH:MM`.
    #[arg(long, env = "ROTATE_AT", default_value = "00:00")]
    pub rotate_at: String,
    /// UTC offset the rotation time is read in, `±HH:MM`.
    #[arg(long, env = "ROTATE_OFFSET", default_value = "-05:00", allow_hyphen_values = true)]
    pub rotate_offset: String,
    /// Rotate once at startup when no word of the day is set.
    #[arg(long, env = "ROTATE_ON_START", default_value_t = true, action = ArgAction::Set)]
    pub rotate_on_start: bool,
    /// Origin permitted to make credentialed cross-origin requests.
    #[arg(long, env = "ALLOWED_ORIGIN", default_value = "https://prodle.net", value_parser = origin)]
    pub allowed_origin: String,
    #[arg(long, env = "COOKIE_SECURE", default_value_t = true, action = ArgAction::Set)]
    pub cookie_secure: bool,
    #[arg(long, env = "COOKIE_HTTP_ONLY", default_value_t = false, action = ArgAction::Set)]
    pub cookie_http_only: bool,
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
}

impl Config {
    pub fn schedule(&self) -> Result<Schedule, ScheduleError> {
        Schedule::parse(&self.rotate_at, &self.rotate_offset)
    }
    pub fn cookie_policy(&self) -> CookiePolicy {
        CookiePolicy {
            secure: self.cookie_secure,
            http_only: self.cookie_http_only,
        }
    }
}

fn secret(s: &str) -> Result<String, String> {
    match s.trim() {
        "" => Err("secret must not be empty".to_string()),
        _ => Ok(s.to_string()),
    }
}

fn origin(s: &str) -> Result<String, String> {
    match s {
        "*" => Err("credentialed CORS needs an explicit origin".to_string()),
        s if s.starts_with("http://") || s.starts_with("https://") => Ok(s.to_string()),
        _ => Err(format!("{} is not an http(s) origin", s)),
    }
}
