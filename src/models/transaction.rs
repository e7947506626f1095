//! Borrow transaction model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Borrow transaction row from the database.
///
/// A transaction with no return date is "open": the book is still out.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowTransaction {
    #[sqlx(rename = "transactionid")]
    pub id: i32,
    #[sqlx(rename = "bookid")]
    pub book_id: i32,
    #[sqlx(rename = "userid")]
    pub user_id: i32,
    #[sqlx(rename = "borrowdate")]
    pub borrow_date: NaiveDate,
    #[sqlx(rename = "returndate")]
    pub return_date: Option<NaiveDate>,
}

/// Render a date as `YYYY-MM-DD` for API responses and graph properties.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Render an optional date, with `""` standing in for "never happened".
pub fn format_date_opt(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(d), "2024-01-05");
    }

    #[test]
    fn test_format_date_opt_absent() {
        assert_eq!(format_date_opt(None), "");
    }

    #[test]
    fn test_format_date_opt_present() {
        let d = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(format_date_opt(Some(d)), "2024-12-31");
    }
}
