//! Query string access
//!
//! Exclusion lists arrive as repeated keys
//! (`?except_articles=3&except_articles=8`), which a plain serde struct
//! cannot collect, so the raw query is decoded into pairs here.

use crate::error::{ServerError, ServerResult};
use std::str::FromStr;

/// Decoded `key=value` pairs of a request's query string
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = raw
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();
        Self { pairs }
    }

    /// Last value given for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Like [`get`](Self::get), but a missing key is a bad request
    pub fn required(&self, name: &str) -> ServerResult<&str> {
        self.get(name)
            .ok_or_else(|| ServerError::BadRequest(format!("missing query parameter '{name}'")))
    }

    /// Parse `name`, falling back to `default` when absent
    pub fn parse_or<T: FromStr>(&self, name: &str, default: T) -> ServerResult<T> {
        match self.get(name) {
            Some(raw) => parse_value(name, raw),
            None => Ok(default),
        }
    }

    /// Every value given for `name`, parsed
    pub fn all<T: FromStr>(&self, name: &str) -> ServerResult<Vec<T>> {
        self.pairs
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, raw)| parse_value(name, raw))
            .collect()
    }
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> ServerResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid value '{raw}' for '{name}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_are_collected() {
        let params = QueryParams::parse(Some("except_articles=3&count=2&except_articles=8"));
        assert_eq!(params.all::<i64>("except_articles").unwrap(), vec![3, 8]);
        assert_eq!(params.parse_or("count", 9usize).unwrap(), 2);
        assert_eq!(params.parse_or("limit", 3usize).unwrap(), 3);
    }

    #[test]
    fn values_are_percent_decoded() {
        let params = QueryParams::parse(Some("q=%D0%A0%D0%B8%D0%BC&theme=Art+History"));
        assert_eq!(params.get("q"), Some("Рим"));
        assert_eq!(params.get("theme"), Some("Art History"));
    }

    #[test]
    fn bad_or_missing_values_are_rejected() {
        let params = QueryParams::parse(Some("count=-1&except_articles=x"));
        assert!(matches!(
            params.parse_or("count", 9usize),
            Err(ServerError::BadRequest(_))
        ));
        assert!(params.all::<i64>("except_articles").is_err());
        assert!(params.required("slug").is_err());
        assert!(QueryParams::parse(None).get("q").is_none());
    }

    #[test]
    fn last_value_wins() {
        let params = QueryParams::parse(Some("count=1&count=4"));
        assert_eq!(params.parse_or("count", 9usize).unwrap(), 4);
    }
}
