//! prodle Backend Binary
//!
//! Accounts, stats, and the daily word behind one HTTP server.
//! Configured by flags or environment (`BIND_ADDR`, `JWT_SECRET`, `DB_URL`, ...).
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = prodle_server::Config::parse();
    prodle_core::log()?;
    prodle_core::kys();
    prodle_server::run(config).await
}
