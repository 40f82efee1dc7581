//! Configuration management for the social graph console.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (SOCIAL__ prefix, `__` separated, e.g. `SOCIAL__NEO4J__URI`)
//! 2. Config file (`social.toml` by default)
//! 3. Defaults

use ::config::{Config, Environment, File, Map};
use serde::Deserialize;

use crate::error::{Result, SocialError};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialConfig {
    /// Connection settings, `[neo4j]` section.
    #[serde(default)]
    pub neo4j: Neo4jSettings,
}

/// Where and how to reach the graph database.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Neo4jSettings {
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_password")]
    pub password: String,

    /// Target database name; the server default when unset.
    #[serde(default)]
    pub database: Option<String>,

    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

fn default_uri() -> String {
    "neo4j://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_password() -> String {
    "social-dev".to_string()
}

fn default_max_connections() -> usize {
    16
}

fn default_fetch_size() -> usize {
    256
}

impl Default for Neo4jSettings {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            database: None,
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}

impl SocialConfig {
    /// Load configuration from `<file_prefix>.toml` (optional) and the
    /// process environment.
    pub fn load(file_prefix: &str) -> Result<Self> {
        Self::load_with_env(file_prefix, None)
    }

    /// Like [`SocialConfig::load`], reading environment variables from
    /// `env` instead of the process environment when given.
    pub fn load_with_env(file_prefix: &str, env: Option<Map<String, String>>) -> Result<Self> {
        let environment = Environment::with_prefix("SOCIAL")
            .separator("__")
            .try_parsing(true)
            .source(env);

        let cfg = Config::builder()
            .add_source(File::with_name(file_prefix).required(false))
            .add_source(environment)
            .build()?;

        let loaded: SocialConfig = cfg.try_deserialize()?;
        loaded.validate()?;

        tracing::debug!(
            uri = %loaded.neo4j.uri,
            user = %loaded.neo4j.user,
            database = ?loaded.neo4j.database,
            "Configuration loaded"
        );
        Ok(loaded)
    }

    fn validate(&self) -> Result<()> {
        if self.neo4j.uri.trim().is_empty() {
            return Err(SocialError::Invalid("neo4j.uri must not be empty".to_string()));
        }
        if self.neo4j.max_connections == 0 {
            return Err(SocialError::Invalid(
                "neo4j.max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
