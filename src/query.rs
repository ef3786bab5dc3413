//! Filter, sample and rank functions over loaded article lists.
//!
//! Nothing here touches the filesystem; [`crate::Catalog`] loads the files and
//! hands the lists to these functions.
use std::collections::HashSet;

use fastrand::Rng;

use crate::error::{CatalogError, CatalogResult};
use crate::model::Article;

/// Trim and lowercase a theme. Blank themes normalize to `None`.
pub fn normalize_theme(theme: Option<&str>) -> Option<String> {
    theme
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
}

/// Keep articles whose normalized theme equals `theme`.
///
/// A blank or absent `theme` keeps every article.
pub fn filter_by_theme(articles: Vec<Article>, theme: Option<&str>) -> Vec<Article> {
    let Some(wanted) = normalize_theme(theme) else {
        return articles;
    };
    tracing::debug!(theme = %wanted, "filtering articles by theme");

    articles
        .into_iter()
        .filter(|a| normalize_theme(a.theme()).as_deref() == Some(wanted.as_str()))
        .collect()
}

/// Whether `article` carries one of the excluded ids.
pub fn is_excluded(article: &Article, except: &[i64]) -> bool {
    article.id().is_some_and(|id| except.contains(&id))
}

/// Drop articles whose id appears in `except`. Articles without an id stay.
pub fn exclude_ids(articles: Vec<Article>, except: &[i64]) -> Vec<Article> {
    if except.is_empty() {
        return articles;
    }
    articles
        .into_iter()
        .filter(|a| !is_excluded(a, except))
        .collect()
}

/// Uniform sample of `min(count, items.len())` items without replacement.
///
/// The result is in random order.
pub fn sample<T>(rng: &mut Rng, mut items: Vec<T>, count: usize) -> Vec<T> {
    rng.shuffle(&mut items);
    items.truncate(count);
    items
}

/// Case-insensitive substring search over title, intro and keywords.
///
/// Matches keep file order and are truncated to `count`. An empty query
/// matches nothing.
pub fn search(articles: Vec<Article>, q: &str, count: usize, except: &[i64]) -> Vec<Article> {
    if q.is_empty() {
        return Vec::new();
    }
    let needle = q.to_lowercase();

    articles
        .into_iter()
        .filter(|a| !is_excluded(a, except) && matches_query(a, &needle))
        .take(count)
        .collect()
}

fn matches_query(article: &Article, needle: &str) -> bool {
    if article.title().to_lowercase().contains(needle) {
        return true;
    }
    if article
        .intro()
        .is_some_and(|intro| intro.to_lowercase().contains(needle))
    {
        return true;
    }
    article
        .keywords()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .contains(needle)
}

/// Articles related to the one identified by `slug`.
///
/// Articles sharing at least one keyword (case-insensitive) with the base
/// article come first, in file order. When fewer than `limit` share a keyword
/// the rest is filled with a random sample of the remaining articles. The
/// base article and excluded ids never appear.
pub fn similar(
    articles: &[Article],
    slug: &str,
    limit: usize,
    except: &[i64],
    rng: &mut Rng,
) -> CatalogResult<Vec<Article>> {
    let base = articles
        .iter()
        .find(|a| a.slug() == slug)
        .ok_or_else(|| CatalogError::ArticleNotFound(slug.to_string()))?;

    let base_keywords: HashSet<String> = base.keywords_lower().collect();
    let eligible = |a: &&Article| a.slug() != slug && !is_excluded(a, except);

    let mut picked: Vec<Article> = articles
        .iter()
        .filter(eligible)
        .filter(|a| a.keywords_lower().any(|k| base_keywords.contains(&k)))
        .take(limit)
        .cloned()
        .collect();

    if picked.len() < limit {
        let taken: HashSet<&str> = picked.iter().map(Article::slug).collect();
        let candidates: Vec<Article> = articles
            .iter()
            .filter(eligible)
            .filter(|a| !taken.contains(a.slug()))
            .cloned()
            .collect();
        let needed = limit - picked.len();
        picked.extend(sample(rng, candidates, needed));
    }

    picked.truncate(limit);
    Ok(picked)
}
