//! Graph read path
//!
//! Serves relationship queries from the mirror. Nothing here writes to
//! the graph; the mirror is rebuilt by the separate batch builder.

use neo4rs::Query;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    graph::{client::row_field, GraphClient},
};

/// Book record as stored in the graph mirror.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GraphBook {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publisher: String,
}

#[derive(Clone)]
pub struct GraphService {
    client: GraphClient,
}

impl GraphService {
    pub fn new(client: GraphClient) -> Self {
        Self { client }
    }

    /// List books from the mirror with their resolved relationships.
    ///
    /// Only books with all three edges present appear; a book whose edge
    /// was skipped during the mirror build is absent from this view.
    pub async fn list_books(&self) -> AppResult<Vec<GraphBook>> {
        let query = Query::new(
            "MATCH (b:Book)-[:WRITTEN_BY]->(a:Author),
                   (b)-[:BELONGS_TO]->(g:Genre),
                   (b)-[:PUBLISHED_BY]->(p:Publisher)
             RETURN b.BookID as id, b.Title as title,
                    a.Name as author, g.Name as genre, p.Name as publisher
             ORDER BY id"
                .to_string(),
        );

        let rows = self.client.query(query).await?;

        let mut books = Vec::with_capacity(rows.len());
        for row in &rows {
            books.push(GraphBook {
                id: row_field(row, "id")?,
                title: row_field(row, "title")?,
                author: row_field(row, "author")?,
                genre: row_field(row, "genre")?,
                publisher: row_field(row, "publisher")?,
            });
        }
        Ok(books)
    }
}
