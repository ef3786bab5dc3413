//! Articles Server - HTTP API over the read-only article catalog
//!
//! Exposes the `articles` catalog as JSON endpoints. Every request re-reads
//! its data file; there is no cache and no authentication.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /api/themes` - Theme list
//! - `GET /api/recent_articles?count=9&except_articles=1` - Random recent articles
//! - `GET /api/random_articles?count=9&theme=history` - Random article cards
//! - `GET /api/look_for_articles?q=rome&count=9` - Keyword search
//! - `GET /api/similar_articles?slug=roman-roads&limit=3` - Similar article cards
//! - `GET /`, `GET /health`, `GET /ready` - Info, liveness and readiness
//!
//! `except_articles` may be repeated to exclude several ids.

pub mod config;
pub mod error;
pub mod middleware;
pub mod params;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
