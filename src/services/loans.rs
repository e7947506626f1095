//! Borrow/return workflow service

use chrono::NaiveDate;

use crate::{
    config::BorrowConfig,
    error::{AppError, AppResult},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    config: BorrowConfig,
}

impl LoansService {
    pub fn new(repository: Repository, config: BorrowConfig) -> Self {
        Self { repository, config }
    }

    /// Borrow a book for the configured default user.
    ///
    /// The borrower name is accepted from the caller but not persisted:
    /// the transaction is always recorded against the default account.
    pub async fn borrow_book(
        &self,
        book_id: i32,
        borrower_name: Option<&str>,
        borrow_date: &str,
    ) -> AppResult<i32> {
        let borrow_date = parse_date(borrow_date, "borrowDate")?;

        if let Some(name) = borrower_name {
            tracing::debug!(book_id, borrower = name, "Borrow requested");
        }

        self.repository
            .loans
            .borrow(book_id, self.config.default_user_id, borrow_date)
            .await
    }

    /// Return a borrowed book.
    pub async fn return_book(&self, book_id: i32, return_date: &str) -> AppResult<()> {
        let return_date = parse_date(return_date, "returnDate")?;
        self.repository.loans.return_book(book_id, return_date).await
    }
}

fn parse_date(value: &str, field: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: expected YYYY-MM-DD", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(
            parse_date("2024-01-01", "borrowDate").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_date_invalid() {
        let err = parse_date("01/01/2024", "borrowDate").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
