//! Graph mirror endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, services::graph::GraphBook, AppState};

/// List books from the graph mirror
#[utoipa::path(
    get,
    path = "/graph/books",
    tag = "graph",
    responses(
        (status = 200, description = "Books with resolved relationships", body = Vec<GraphBook>),
        (status = 500, description = "Graph store failure")
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<GraphBook>>> {
    let books = state.services.graph.list_books().await?;
    Ok(Json(books))
}
