//! Borrow/return endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, AppState};

/// Borrow request body
#[derive(Deserialize, ToSchema)]
pub struct BorrowRequest {
    /// Name shown in the UI; not persisted against a user record
    #[serde(rename = "borrowerName")]
    pub borrower_name: Option<String>,
    /// Borrow date, YYYY-MM-DD
    #[serde(rename = "borrowDate")]
    pub borrow_date: String,
}

/// Return request body
#[derive(Deserialize, ToSchema)]
pub struct ReturnRequest {
    /// Return date, YYYY-MM-DD
    #[serde(rename = "returnDate")]
    pub return_date: String,
}

/// Outcome of a borrow or return
#[derive(Serialize, ToSchema)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/book/{id}",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = BorrowRequest,
    responses(
        (status = 200, description = "Book borrowed", body = ActionResponse),
        (status = 400, description = "Book already borrowed or invalid date"),
        (status = 404, description = "Book not found"),
        (status = 500, description = "Commit failure")
    )
)]
pub async fn borrow_book(
    State(state): State<AppState>,
    Path(book_id): Path<i32>,
    Json(request): Json<BorrowRequest>,
) -> AppResult<Json<ActionResponse>> {
    state
        .services
        .loans
        .borrow_book(
            book_id,
            request.borrower_name.as_deref(),
            &request.borrow_date,
        )
        .await?;

    Ok(Json(ActionResponse {
        success: true,
        message: "Book borrowed successfully".to_string(),
    }))
}

/// Return a book
#[utoipa::path(
    post,
    path = "/return/{id}",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = ReturnRequest,
    responses(
        (status = 200, description = "Book returned", body = ActionResponse),
        (status = 400, description = "Book is not borrowed or invalid date")
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    Path(book_id): Path<i32>,
    Json(request): Json<ReturnRequest>,
) -> AppResult<Json<ActionResponse>> {
    state
        .services
        .loans
        .return_book(book_id, &request.return_date)
        .await?;

    Ok(Json(ActionResponse {
        success: true,
        message: "Book returned successfully".to_string(),
    }))
}
