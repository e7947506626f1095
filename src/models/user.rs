//! User account model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// User account row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserAccount {
    #[sqlx(rename = "userid")]
    pub id: i32,
    pub name: String,
}
