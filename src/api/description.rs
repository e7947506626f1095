//! Description proxy endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{error::AppResult, AppState};

#[derive(Deserialize, IntoParams)]
pub struct DescriptionQuery {
    /// Entity name to describe
    pub name: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct DescriptionResponse {
    pub description: String,
}

/// Fetch a generated description for an entity
#[utoipa::path(
    get,
    path = "/description",
    tag = "description",
    params(DescriptionQuery),
    responses(
        (status = 200, description = "Generated description", body = DescriptionResponse),
        (status = 400, description = "Missing entity name"),
        (status = 500, description = "Upstream or configuration failure")
    )
)]
pub async fn get_description(
    State(state): State<AppState>,
    Query(query): Query<DescriptionQuery>,
) -> AppResult<Json<DescriptionResponse>> {
    let name = query.name.unwrap_or_default();
    let description = state.services.description.describe(&name).await?;
    Ok(Json(DescriptionResponse { description }))
}
