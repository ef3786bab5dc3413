//! Articles Server - HTTP API over the read-only article catalog
//!
//! Reads `.env`, `server.{toml,yaml,json}` and `ARTICLES__*` variables, then
//! serves until Ctrl+C or SIGTERM.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
