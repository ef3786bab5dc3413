//! Catalog configuration.
//!
//! [`CatalogConfig`] says where the JSON files live and how cards are shaped.
//! Every field has a serde default, so an empty table (or no table at all)
//! yields a working configuration rooted at `./data`.
//!
//! ```toml
//! [catalog]
//! data_dir = "data"
//! articles_file = "articles.json"
//! themes_file = "themes.json"
//! recent_file = "recent.json"
//! asset_root = "."
//! default_image = "images/default.jpg"
//! max_count = 100
//! ```
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding the JSON files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_articles_file")]
    pub articles_file: String,

    #[serde(default = "default_themes_file")]
    pub themes_file: String,

    #[serde(default = "default_recent_file")]
    pub recent_file: String,

    /// Base directory image paths are checked against for similar cards
    #[serde(default = "default_asset_root")]
    pub asset_root: PathBuf,

    /// Image served when an article has none
    #[serde(default = "default_image")]
    pub default_image: String,

    /// Intro placeholder on random-article cards
    #[serde(default = "default_missing_intro")]
    pub missing_intro: String,

    /// Intro placeholder on similar-article cards
    #[serde(default = "default_missing_similar_intro")]
    pub missing_similar_intro: String,

    /// Upper bound applied to every `count` / `limit` parameter
    #[serde(default = "default_max_count")]
    pub max_count: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            articles_file: default_articles_file(),
            themes_file: default_themes_file(),
            recent_file: default_recent_file(),
            asset_root: default_asset_root(),
            default_image: default_image(),
            missing_intro: default_missing_intro(),
            missing_similar_intro: default_missing_similar_intro(),
            max_count: default_max_count(),
        }
    }
}

impl CatalogConfig {
    /// Config rooted at `data_dir`, everything else default.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Reject configurations that cannot serve a request.
    pub fn validate(&self) -> CatalogResult<()> {
        for (field, value) in [
            ("articles_file", &self.articles_file),
            ("themes_file", &self.themes_file),
            ("recent_file", &self.recent_file),
            ("default_image", &self.default_image),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::InvalidConfig(format!("{field} must not be empty")));
            }
        }
        if self.max_count == 0 {
            return Err(CatalogError::InvalidConfig(
                "max_count must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Clamp a requested count to `max_count`.
    pub fn clamp_count(&self, requested: usize) -> usize {
        requested.min(self.max_count)
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_articles_file() -> String {
    "articles.json".to_string()
}

fn default_themes_file() -> String {
    "themes.json".to_string()
}

fn default_recent_file() -> String {
    "recent.json".to_string()
}

fn default_asset_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_image() -> String {
    "images/default.jpg".to_string()
}

fn default_missing_intro() -> String {
    "Описание недоступно".to_string()
}

fn default_missing_similar_intro() -> String {
    "Краткое описание недоступно".to_string()
}

fn default_max_count() -> usize {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = CatalogConfig::default();
        assert_eq!(cfg.data_dir, PathBuf::from("data"));
        assert_eq!(cfg.articles_file, "articles.json");
        assert_eq!(cfg.default_image, "images/default.jpg");
        assert_eq!(cfg.max_count, 100);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: CatalogConfig =
            serde_json::from_str(r#"{"data_dir": "/srv/content", "max_count": 20}"#).unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("/srv/content"));
        assert_eq!(cfg.recent_file, "recent.json");
        assert_eq!(cfg.clamp_count(50), 20);
        assert_eq!(cfg.clamp_count(3), 3);
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let cfg = CatalogConfig {
            articles_file: " ".to_string(),
            ..CatalogConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(CatalogError::InvalidConfig(_))));

        let cfg = CatalogConfig {
            max_count: 0,
            ..CatalogConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
