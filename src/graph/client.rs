//! Neo4j connection client

use neo4rs::{ConfigBuilder, Graph, Query};

use crate::{
    config::GraphConfig,
    error::{AppError, AppResult},
};

/// Client for graph store operations.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new client from config.
    ///
    /// neo4rs pools lazily: `Graph::connect` only builds the pool and does
    /// not open a bolt connection. A `RETURN 1` ping is issued here so an
    /// unreachable endpoint fails at startup instead of on the first query.
    pub async fn connect(config: &GraphConfig) -> AppResult<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db("neo4j")
            .max_connections(4)
            .fetch_size(50)
            .build()?;

        let graph = Graph::connect(neo4j_config).await?;

        graph.run(Query::new("RETURN 1".to_string())).await?;

        Ok(Self { graph })
    }

    /// Execute a Cypher query that returns no results.
    pub async fn execute(&self, query: Query) -> AppResult<()> {
        self.graph.run(query).await?;
        Ok(())
    }

    /// Execute a Cypher query and collect the result rows.
    pub async fn query(&self, query: Query) -> AppResult<Vec<neo4rs::Row>> {
        let mut result = self.graph.execute(query).await?;

        let mut rows = Vec::new();
        while let Some(row) = result.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }
}

/// Read a named field out of a result row.
pub fn row_field<T: serde::de::DeserializeOwned>(row: &neo4rs::Row, field: &str) -> AppResult<T> {
    row.get(field)
        .map_err(|e| AppError::Internal(format!("Failed to read graph field '{}': {:?}", field, e)))
}
