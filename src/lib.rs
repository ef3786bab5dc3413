//! Read-only article catalog served from flat JSON files.
//!
//! The catalog answers five questions over a small data directory:
//!
//! - **Themes**: the theme list, verbatim
//! - **Recent**: a random sample of the recent-articles file
//! - **Random**: a random sample of all articles, optionally by theme
//! - **Search**: case-insensitive substring search over title, intro and keywords
//! - **Similar**: keyword-overlap recommendations, topped up at random
//!
//! Every call re-reads its file; there is no cache and no shared mutable
//! state. Clients pass the ids they have already shown as an exclusion list.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use articles::{Catalog, CatalogConfig};
//!
//! let catalog = Catalog::new(CatalogConfig::with_data_dir("data"))?;
//! let mut rng = fastrand::Rng::new();
//!
//! let cards = catalog.random_articles(9, Some("history"), &[1, 2], &mut rng)?;
//! let related = catalog.similar_articles("roman-roads", 3, &[], &mut rng)?;
//! # Ok::<(), articles::CatalogError>(())
//! ```
//!
//! The HTTP layer lives in the `articles-server` crate.

pub mod catalog;
pub mod config;
pub mod error;
pub mod image;
pub mod model;
pub mod query;
pub mod store;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use model::{Article, ArticleCard, SimilarCard, Theme};
pub use store::DataStore;
