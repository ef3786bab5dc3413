//! Records read from the catalog files and the projections served back.
//!
//! [`Article`] and [`Theme`] are kept exactly as read, so serving one back
//! yields the same JSON. Typed accessors on [`Article`] are a read-only view
//! used for filtering. [`ArticleCard`] and [`SimilarCard`] are the reshaped
//! views returned by the random and similar endpoints.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of `articles.json` / `recent.json`, held as its raw JSON object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Article(Map<String, Value>);

impl Article {
    /// Raw value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Integer id. Anything else (a string, a float, null) counts as no id.
    pub fn id(&self) -> Option<i64> {
        self.get("id").and_then(Value::as_i64)
    }

    pub fn slug(&self) -> &str {
        self.str_field("slug").unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.str_field("title").unwrap_or_default()
    }

    /// Title with surrounding double quotes removed.
    pub fn display_title(&self) -> &str {
        self.title().trim_matches('"')
    }

    pub fn theme(&self) -> Option<&str> {
        self.str_field("theme")
    }

    pub fn intro(&self) -> Option<&str> {
        self.str_field("intro")
    }

    /// Relative image path as written by the content pipeline.
    pub fn image(&self) -> Option<&str> {
        self.str_field("image")
    }

    /// String entries of the `keywords` list. A non-list value yields none.
    pub fn keywords(&self) -> impl Iterator<Item = &str> + '_ {
        self.get("keywords")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    /// Lowercased keywords, for case-insensitive matching.
    pub fn keywords_lower(&self) -> impl Iterator<Item = String> + '_ {
        self.keywords().map(str::to_lowercase)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Article {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// One entry of `themes.json`: either a bare label or an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Theme {
    Label(String),
    Entry(Map<String, Value>),
}

/// Projection returned by the random-articles endpoint.
///
/// `theme`, `intro` and `id` carry the record's raw values; a missing `intro`
/// is replaced by the configured placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleCard {
    pub slug: String,
    pub title: String,
    pub theme: Value,
    pub intro: Value,
    pub id: Value,
    pub image: String,
}

/// Projection returned by the similar-articles endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarCard {
    pub slug: String,
    pub title: String,
    pub intro: Value,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn article(raw: Value) -> Article {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn article_serves_back_what_was_read() {
        let raw = json!({
            "id": 1,
            "image": null,
            "intro": null,
            "keywords": [],
            "slug": "a",
            "theme": "x",
            "title": "A",
            "published": "2024-01-01"
        });
        let back = serde_json::to_value(article(raw.clone())).unwrap();
        assert_eq!(back, raw);

        let raw = json!({"id": "3", "slug": "b", "keywords": "rust, go"});
        let back = serde_json::to_value(article(raw.clone())).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn typed_view_reads_leniently() {
        let a = article(json!({
            "id": 7,
            "slug": "rust-intro",
            "title": "\"Rust\"",
            "intro": null,
            "keywords": ["Rust", 3, null, "Systems"]
        }));
        assert_eq!(a.id(), Some(7));
        assert_eq!(a.display_title(), "Rust");
        assert_eq!(a.intro(), None);
        assert_eq!(a.keywords_lower().collect::<Vec<_>>(), vec!["rust", "systems"]);

        let a = article(json!({"id": "3", "keywords": "rust, go"}));
        assert_eq!(a.id(), None);
        assert_eq!(a.slug(), "");
        assert_eq!(a.keywords().count(), 0);
    }

    #[test]
    fn themes_keep_their_shape() {
        let raw = json!(["Science", {"name": "History", "icon": "scroll"}]);
        let themes: Vec<Theme> = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(themes[0], Theme::Label("Science".into()));
        assert_eq!(serde_json::to_value(&themes).unwrap(), raw);
    }
}
