//! Core records, error classes, and constants for prodle.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the prodle workspace.
mod failure;
mod user;

pub use failure::*;
pub use user::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win, loss, and streak counters.
pub type Count = u32;
/// Seconds since the unix epoch.
pub type Timestamp = i64;

// ============================================================================
// SESSION PARAMETERS
// ============================================================================
/// Lifetime of an issued session token.
pub const TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(60 * 60);
/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "jwt";

// ============================================================================
// STORE PARAMETERS
// ============================================================================
/// Upper bound on any single repository call before it surfaces as unavailable.
pub const STORE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Current wall-clock time in unix seconds.
/// A clock before 1970 reads as the epoch itself.
pub fn now() -> Timestamp {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as Timestamp)
        .unwrap_or_default()
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> std::io::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", now()))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::AlreadyExists, e))
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
