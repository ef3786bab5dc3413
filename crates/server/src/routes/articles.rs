use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::params::QueryParams;
use crate::state::ServerState;
use articles::{Article, ArticleCard, SimilarCard, Theme};
use axum::extract::{RawQuery, State};
use axum::Json;
use fastrand::Rng;
use std::sync::Arc;

/// Repeated query key carrying ids the client already shows
pub const EXCEPT_ARTICLES: &str = "except_articles";

/// Query for recent articles
#[derive(Debug, Clone, PartialEq)]
pub struct RecentQuery {
    pub count: usize,
    pub except_articles: Vec<i64>,
}

/// Query for random articles
#[derive(Debug, Clone, PartialEq)]
pub struct RandomQuery {
    pub count: usize,
    pub theme: Option<String>,
    pub except_articles: Vec<i64>,
}

/// Query for keyword search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub q: String,
    pub count: usize,
    pub except_articles: Vec<i64>,
}

/// Query for similar articles
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarQuery {
    pub slug: String,
    pub limit: usize,
    pub except_articles: Vec<i64>,
}

impl RecentQuery {
    pub fn from_params(params: &QueryParams, config: &ServerConfig) -> ServerResult<Self> {
        Ok(Self {
            count: params.parse_or("count", config.default_count)?,
            except_articles: params.all(EXCEPT_ARTICLES)?,
        })
    }
}

impl RandomQuery {
    pub fn from_params(params: &QueryParams, config: &ServerConfig) -> ServerResult<Self> {
        Ok(Self {
            count: params.parse_or("count", config.default_count)?,
            theme: params.get("theme").map(str::to_string),
            except_articles: params.all(EXCEPT_ARTICLES)?,
        })
    }
}

impl SearchQuery {
    pub fn from_params(params: &QueryParams, config: &ServerConfig) -> ServerResult<Self> {
        Ok(Self {
            q: params.required("q")?.to_string(),
            count: params.parse_or("count", config.default_count)?,
            except_articles: params.all(EXCEPT_ARTICLES)?,
        })
    }
}

impl SimilarQuery {
    pub fn from_params(params: &QueryParams, config: &ServerConfig) -> ServerResult<Self> {
        Ok(Self {
            slug: params.required("slug")?.to_string(),
            limit: params.parse_or("limit", config.default_similar_limit)?,
            except_articles: params.all(EXCEPT_ARTICLES)?,
        })
    }
}

/// `GET /api/themes`
pub async fn themes(State(state): State<Arc<ServerState>>) -> ServerResult<Json<Vec<Theme>>> {
    let themes = state.with_catalog(|catalog| catalog.themes()).await?;
    Ok(Json(themes))
}

/// `GET /api/recent_articles`
pub async fn recent_articles(
    State(state): State<Arc<ServerState>>,
    RawQuery(raw): RawQuery,
) -> ServerResult<Json<Vec<Article>>> {
    let params = QueryParams::parse(raw.as_deref());
    let query = RecentQuery::from_params(&params, &state.config)?;

    let recent = state
        .with_catalog(move |catalog| {
            catalog.recent_articles(query.count, &query.except_articles, &mut Rng::new())
        })
        .await?;

    Ok(Json(recent))
}

/// `GET /api/random_articles`
pub async fn random_articles(
    State(state): State<Arc<ServerState>>,
    RawQuery(raw): RawQuery,
) -> ServerResult<Json<Vec<ArticleCard>>> {
    let params = QueryParams::parse(raw.as_deref());
    let query = RandomQuery::from_params(&params, &state.config)?;

    let cards = state
        .with_catalog(move |catalog| {
            catalog.random_articles(
                query.count,
                query.theme.as_deref(),
                &query.except_articles,
                &mut Rng::new(),
            )
        })
        .await?;

    Ok(Json(cards))
}

/// `GET /api/look_for_articles`
pub async fn look_for_articles(
    State(state): State<Arc<ServerState>>,
    RawQuery(raw): RawQuery,
) -> ServerResult<Json<Vec<Article>>> {
    let params = QueryParams::parse(raw.as_deref());
    let query = SearchQuery::from_params(&params, &state.config)?;

    let found = state
        .with_catalog(move |catalog| {
            catalog.search(&query.q, query.count, &query.except_articles)
        })
        .await?;

    Ok(Json(found))
}

/// `GET /api/similar_articles`
pub async fn similar_articles(
    State(state): State<Arc<ServerState>>,
    RawQuery(raw): RawQuery,
) -> ServerResult<Json<Vec<SimilarCard>>> {
    let params = QueryParams::parse(raw.as_deref());
    let query = SimilarQuery::from_params(&params, &state.config)?;

    let cards = state
        .with_catalog(move |catalog| {
            catalog.similar_articles(
                &query.slug,
                query.limit,
                &query.except_articles,
                &mut Rng::new(),
            )
        })
        .await?;

    Ok(Json(cards))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_use_configured_defaults() {
        let config = ServerConfig::default();
        let params = QueryParams::parse(Some("slug=rome&q=rome"));

        let recent = RecentQuery::from_params(&params, &config).unwrap();
        assert_eq!(recent.count, 9);
        assert!(recent.except_articles.is_empty());

        let similar = SimilarQuery::from_params(&params, &config).unwrap();
        assert_eq!(similar.limit, 3);
        assert_eq!(similar.slug, "rome");

        let search = SearchQuery::from_params(&params, &config).unwrap();
        assert_eq!(search.q, "rome");
    }

    #[test]
    fn random_query_reads_theme_and_exclusions() {
        let config = ServerConfig::default();
        let params = QueryParams::parse(Some("theme=History&count=4&except_articles=1&except_articles=2"));
        let query = RandomQuery::from_params(&params, &config).unwrap();
        assert_eq!(
            query,
            RandomQuery {
                count: 4,
                theme: Some("History".to_string()),
                except_articles: vec![1, 2],
            }
        );
    }

    #[test]
    fn required_parameters_are_enforced() {
        let config = ServerConfig::default();
        let params = QueryParams::parse(Some("count=3"));
        assert!(SearchQuery::from_params(&params, &config).is_err());
        assert!(SimilarQuery::from_params(&params, &config).is_err());
    }
}
