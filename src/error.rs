//! Error types produced by the catalog.
//!
//! All catalog operations return [`CatalogError`]. The variants are split by
//! who is at fault so the HTTP layer can pick a status code without string
//! matching:
//!
//! | Error | Status | Description |
//! |-------|--------|-------------|
//! | [`ArticleNotFound`](CatalogError::ArticleNotFound) | 404 | Slug does not exist in the articles file |
//! | [`MissingFile`](CatalogError::MissingFile) | 500 | A file the operation requires is absent |
//! | [`Unavailable`](CatalogError::Unavailable) | 500 | Article list is empty or could not be read |
//! | [`Io`](CatalogError::Io) | 500 | File exists but could not be read |
//! | [`Parse`](CatalogError::Parse) | 500 | File is not valid JSON for the expected shape |
//! | [`InvalidConfig`](CatalogError::InvalidConfig) | 500 | Catalog configuration rejected by `validate()` |
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the catalog.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while loading or querying the article files.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogError {
    /// No article carries the requested slug.
    #[error("article not found: {0}")]
    ArticleNotFound(String),

    /// A data file the operation cannot do without is absent.
    #[error("data file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// The article list is empty or unreadable.
    #[error("article list is empty or unavailable")]
    Unavailable,

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog configuration: {0}")]
    InvalidConfig(String),
}

impl CatalogError {
    /// Suggested HTTP status code for this error.
    ///
    /// ```rust
    /// use articles::CatalogError;
    ///
    /// assert_eq!(CatalogError::ArticleNotFound("x".into()).http_status_code(), 404);
    /// assert_eq!(CatalogError::Unavailable.http_status_code(), 500);
    /// ```
    pub fn http_status_code(&self) -> u16 {
        match self {
            CatalogError::ArticleNotFound(_) => 404,
            _ => 500,
        }
    }
}
