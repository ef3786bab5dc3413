use articles::CatalogConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Enable permissive CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log filter, e.g. `info` or `server=debug,articles=debug`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[serde(default = "default_true")]
    pub log_json: bool,

    /// Default `count` for list endpoints
    #[serde(default = "default_count")]
    pub default_count: usize,

    /// Default `limit` for the similar-articles endpoint
    #[serde(default = "default_similar_limit")]
    pub default_similar_limit: usize,

    /// Data files and card shaping
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            log_json: default_true(),
            default_count: default_count(),
            default_similar_limit: default_similar_limit(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config files
    ///
    /// `server.{toml,yaml,json}` in the working directory is read first, then
    /// `ARTICLES__*` variables override it (`ARTICLES__PORT=9000`,
    /// `ARTICLES__CATALOG__DATA_DIR=/srv/data`).
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(config::File::with_name("server").required(false))
    }

    /// Like [`load`](Self::load), reading the given file instead of `server.*`.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::load_with(config::File::from(path.as_ref().to_path_buf()).required(false))
    }

    fn load_with<S>(file: S) -> anyhow::Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix("ARTICLES").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        self.catalog.validate()?;
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_count() -> usize {
    9
}

fn default_similar_limit() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 8000);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.default_count, 9);
        assert_eq!(cfg.default_similar_limit, 3);
        assert!(cfg.enable_cors);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8000);

        let cfg = ServerConfig {
            bind_addr: "not an address".to_string(),
            ..ServerConfig::default()
        };
        assert!(cfg.socket_addr().is_err());
    }

    #[test]
    fn test_nested_catalog_section() {
        let cfg: ServerConfig = serde_json::from_str(
            r#"{"port": 9100, "catalog": {"data_dir": "/srv/articles"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.port, 9100);
        assert_eq!(cfg.catalog.data_dir, std::path::PathBuf::from("/srv/articles"));
        assert_eq!(cfg.catalog.articles_file, "articles.json");
    }

    #[test]
    fn test_load_reads_file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(
            &path,
            "port = 9100\ntimeout_secs = 10\n\n[catalog]\ndata_dir = \"/srv/articles\"\n",
        )
        .unwrap();

        std::env::set_var("ARTICLES__TIMEOUT_SECS", "5");
        std::env::set_var("ARTICLES__CATALOG__MAX_COUNT", "25");
        let loaded = ServerConfig::load_from(&path);
        let missing = ServerConfig::load_from(dir.path().join("absent.toml"));
        std::env::remove_var("ARTICLES__TIMEOUT_SECS");
        std::env::remove_var("ARTICLES__CATALOG__MAX_COUNT");

        let cfg = loaded.unwrap();
        assert_eq!(cfg.port, 9100);
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.catalog.data_dir, std::path::PathBuf::from("/srv/articles"));
        assert_eq!(cfg.catalog.max_count, 25);
        assert_eq!(cfg.catalog.articles_file, "articles.json");

        let cfg = missing.unwrap();
        assert_eq!(cfg.port, 8000);
        assert_eq!(cfg.timeout_secs, 5);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let cfg = ServerConfig {
            timeout_secs: 0,
            ..ServerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
