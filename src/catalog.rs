//! Catalog operations: one per endpoint, each re-reading its file.
use std::sync::Arc;

use fastrand::Rng;
use serde_json::Value;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::image::{card_image, local_image};
use crate::model::{Article, ArticleCard, SimilarCard, Theme};
use crate::query;
use crate::store::DataStore;

/// Read-only view over the catalog files.
///
/// Cheap to clone; the config is shared.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: Arc<CatalogConfig>,
    store: DataStore,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;
        let store = DataStore::new(config.data_dir.clone());
        Ok(Self {
            config: Arc::new(config),
            store,
        })
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Theme list, served verbatim. A missing file is an empty list.
    pub fn themes(&self) -> CatalogResult<Vec<Theme>> {
        let themes: Vec<Theme> = self
            .store
            .read_optional(&self.config.themes_file)?
            .unwrap_or_default();
        tracing::debug!(count = themes.len(), "loaded themes");
        Ok(themes)
    }

    /// Random sample of the recent-articles file, minus excluded ids.
    ///
    /// Records are returned exactly as stored.
    pub fn recent_articles(
        &self,
        count: usize,
        except: &[i64],
        rng: &mut Rng,
    ) -> CatalogResult<Vec<Article>> {
        let Some(recent) = self
            .store
            .read_optional::<Vec<Article>>(&self.config.recent_file)?
        else {
            return Ok(Vec::new());
        };

        let candidates = query::exclude_ids(recent, except);
        Ok(query::sample(rng, candidates, self.config.clamp_count(count)))
    }

    /// Random sample of articles, optionally restricted to a theme.
    ///
    /// Fails with [`CatalogError::Unavailable`] when the articles file is
    /// missing, unreadable or empty.
    pub fn random_articles(
        &self,
        count: usize,
        theme: Option<&str>,
        except: &[i64],
        rng: &mut Rng,
    ) -> CatalogResult<Vec<ArticleCard>> {
        let articles = self.all_articles();
        if articles.is_empty() {
            return Err(CatalogError::Unavailable);
        }

        let filtered = query::exclude_ids(query::filter_by_theme(articles, theme), except);
        let chosen = query::sample(rng, filtered, self.config.clamp_count(count));

        Ok(chosen.into_iter().map(|a| self.article_card(a)).collect())
    }

    /// Keyword search; a missing or unreadable articles file finds nothing.
    ///
    /// Matching records are returned exactly as stored.
    pub fn search(&self, q: &str, count: usize, except: &[i64]) -> CatalogResult<Vec<Article>> {
        if q.is_empty() {
            return Ok(Vec::new());
        }
        Ok(query::search(
            self.all_articles(),
            q,
            self.config.clamp_count(count),
            except,
        ))
    }

    /// Articles related to `slug`, shaped as cards.
    ///
    /// Unlike the other operations, a missing or malformed articles file is an
    /// error here.
    pub fn similar_articles(
        &self,
        slug: &str,
        limit: usize,
        except: &[i64],
        rng: &mut Rng,
    ) -> CatalogResult<Vec<SimilarCard>> {
        let articles: Vec<Article> = self.store.read_required(&self.config.articles_file)?;
        let related = query::similar(
            &articles,
            slug,
            self.config.clamp_count(limit),
            except,
            rng,
        )?;

        Ok(related.into_iter().map(|a| self.similar_card(a)).collect())
    }

    /// Every article, or none when the file cannot be used.
    fn all_articles(&self) -> Vec<Article> {
        match self.store.read_optional(&self.config.articles_file) {
            Ok(Some(articles)) => articles,
            Ok(None) => {
                tracing::warn!(
                    file = %self.config.articles_file,
                    "articles file not found"
                );
                Vec::new()
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to read articles file");
                Vec::new()
            }
        }
    }

    fn article_card(&self, article: Article) -> ArticleCard {
        ArticleCard {
            slug: article.slug().to_string(),
            title: article.display_title().to_string(),
            theme: raw_field(&article, "theme"),
            intro: intro_or(&article, &self.config.missing_intro),
            id: raw_field(&article, "id"),
            image: card_image(article.image(), &self.config.default_image),
        }
    }

    fn similar_card(&self, article: Article) -> SimilarCard {
        SimilarCard {
            slug: article.slug().to_string(),
            title: article.display_title().to_string(),
            intro: intro_or(&article, &self.config.missing_similar_intro),
            image: local_image(
                article.image(),
                &self.config.asset_root,
                &self.config.default_image,
            ),
        }
    }
}

fn raw_field(article: &Article, key: &str) -> Value {
    article.get(key).cloned().unwrap_or(Value::Null)
}

/// The stored intro, including an explicit `null`. Only an absent key gets
/// the placeholder.
fn intro_or(article: &Article, placeholder: &str) -> Value {
    article
        .get("intro")
        .cloned()
        .unwrap_or_else(|| Value::String(placeholder.to_string()))
}
