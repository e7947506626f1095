//! Book model and catalog view types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book state while it sits on the shelf.
pub const STATE_PRESENT: &str = "Present";
/// Book state while it is out with a borrower.
pub const STATE_BORROWED: &str = "Borrowed";

/// Book row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    #[sqlx(rename = "bookid")]
    pub id: i32,
    pub title: String,
    /// "Present", "Borrowed", or occasionally something else entirely for
    /// legacy rows; only "Borrowed" blocks a new borrow.
    pub state: Option<String>,
    #[sqlx(rename = "authorid")]
    pub author_id: Option<i32>,
    #[sqlx(rename = "genreid")]
    pub genre_id: Option<i32>,
    #[sqlx(rename = "publisherid")]
    pub publisher_id: Option<i32>,
}

/// Denormalized book record served by `GET /api/books`.
///
/// Display names are resolved to "Unknown" when the referenced row is
/// absent; borrower fields are empty strings when the book has never been
/// borrowed. Dates render as `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookView {
    pub id: i32,
    pub title: String,
    pub state: Option<String>,
    pub author: String,
    pub genre: String,
    pub publisher: String,
    pub borrower: String,
    #[serde(rename = "borrowDate")]
    pub borrow_date: String,
    #[serde(rename = "returnDate")]
    pub return_date: String,
}
