//! Neo4j connection management and shared graph client.

use neo4rs::{query, ConfigBuilder, Graph, Query};

use social_core::Neo4jSettings;

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j service unavailable: {0}")]
    Unavailable(String),

    #[error("Neo4j authentication failed: {0}")]
    Authentication(String),

    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: Option<String>,
    pub max_connections: usize,
    pub fetch_size: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::from(&Neo4jSettings::default())
    }
}

impl From<&Neo4jSettings> for GraphConfig {
    fn from(settings: &Neo4jSettings) -> Self {
        Self {
            uri: settings.uri.clone(),
            user: settings.user.clone(),
            password: settings.password.clone(),
            database: settings.database.clone(),
            max_connections: settings.max_connections,
            fetch_size: settings.fetch_size,
        }
    }
}

/// Neo4j graph client with connection pooling.
///
/// Every query borrows one pooled connection for its duration and hands it
/// back when the query completes. Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect to Neo4j and verify the server accepts our credentials.
    ///
    /// The pool opens connections lazily, so a `RETURN 1` check is issued to
    /// surface [`GraphError::Unavailable`] and [`GraphError::Authentication`]
    /// here rather than on the first real operation. The check runs in an
    /// explicit transaction, which the driver never retries.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let mut builder = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections)
            .fetch_size(config.fetch_size);
        if let Some(db) = &config.database {
            builder = builder.db(db.as_str());
        }
        let neo_config = builder
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config).await.map_err(classify_connect_error)?;
        let mut txn = graph.start_txn().await.map_err(classify_connect_error)?;
        txn.run(query("RETURN 1"))
            .await
            .map_err(classify_connect_error)?;
        txn.rollback().await.map_err(classify_connect_error)?;

        tracing::info!(uri = %config.uri, user = %config.user, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Release the connection pool. Called once at shutdown.
    pub fn close(self) {
        drop(self.graph);
        tracing::info!("Neo4j connection closed");
    }

    // Each query runs once, in its own explicit transaction. One pooled
    // connection is held for the call and released when the `Txn` is
    // consumed or dropped.

    /// Execute a write-only query (CREATE, DELETE) and commit it.
    pub async fn run(&self, query: Query) -> Result<(), GraphError> {
        let mut txn = self.graph.start_txn().await?;
        txn.run(query).await?;
        txn.commit().await?;
        Ok(())
    }

    /// Execute a query, collect all rows, and commit.
    pub async fn query_rows(&self, query: Query) -> Result<Vec<neo4rs::Row>, GraphError> {
        let mut txn = self.graph.start_txn().await?;
        let mut stream = txn.execute(query).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next(txn.handle()).await? {
            rows.push(row);
        }
        txn.commit().await?;
        Ok(rows)
    }

    /// Execute a query and return the first row, if any.
    pub async fn query_one(&self, query: Query) -> Result<Option<neo4rs::Row>, GraphError> {
        Ok(self.query_rows(query).await?.into_iter().next())
    }
}

/// Sort a startup failure into the two kinds the console reports.
fn classify_connect_error(err: neo4rs::Error) -> GraphError {
    match err {
        neo4rs::Error::AuthenticationError(msg) => GraphError::Authentication(msg),
        other => {
            let msg = other.to_string();
            if msg.contains("Security.Unauthorized") {
                GraphError::Authentication(msg)
            } else {
                GraphError::Unavailable(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_config_from_settings() {
        let settings = Neo4jSettings {
            uri: "bolt://db:7687".to_string(),
            user: "admin".to_string(),
            password: "pw".to_string(),
            database: Some("people".to_string()),
            max_connections: 2,
            fetch_size: 10,
        };
        let config = GraphConfig::from(&settings);
        assert_eq!(config.uri, "bolt://db:7687");
        assert_eq!(config.user, "admin");
        assert_eq!(config.database.as_deref(), Some("people"));
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.fetch_size, 10);
    }

    #[test]
    fn test_default_config_targets_localhost() {
        let config = GraphConfig::default();
        assert_eq!(config.uri, "neo4j://localhost:7687");
        assert_eq!(config.user, "neo4j");
        assert!(config.database.is_none());
    }

    #[test]
    fn test_auth_failures_are_classified() {
        let err = classify_connect_error(neo4rs::Error::AuthenticationError(
            "The client is unauthorized due to authentication failure.".to_string(),
        ));
        assert!(matches!(err, GraphError::Authentication(_)));
    }

    #[test]
    fn test_other_failures_mean_unavailable() {
        let err = classify_connect_error(neo4rs::Error::UnexpectedMessage(
            "connection reset".to_string(),
        ));
        assert!(matches!(err, GraphError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_connect_to_closed_port_fails_fast() {
        let config = GraphConfig {
            uri: "bolt://127.0.0.1:1".to_string(),
            ..GraphConfig::default()
        };

        let started = std::time::Instant::now();
        let result = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            GraphClient::connect(&config),
        )
        .await
        .expect("connect should not retry against a closed port");

        assert!(matches!(result, Err(GraphError::Unavailable(_))));
        assert!(started.elapsed() < std::time::Duration::from_secs(5));
    }
}
