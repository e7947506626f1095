//! Borrow/return repository for database operations
//!
//! Both workflows run inside a single database transaction with the book
//! row locked up front, so the state check and the state flip cannot be
//! interleaved with a concurrent borrow or return of the same book.

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{STATE_BORROWED, STATE_PRESENT},
        BorrowTransaction,
    },
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all borrow transactions
    pub async fn list_all(&self) -> AppResult<Vec<BorrowTransaction>> {
        let transactions = sqlx::query_as::<_, BorrowTransaction>(
            "SELECT * FROM borrowtransaction ORDER BY transactionid",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(transactions)
    }

    /// Most recent transaction for a book, by borrow date descending
    pub async fn latest_for_book(&self, book_id: i32) -> AppResult<Option<BorrowTransaction>> {
        let transaction = sqlx::query_as::<_, BorrowTransaction>(
            r#"
            SELECT * FROM borrowtransaction
            WHERE bookid = $1
            ORDER BY borrowdate DESC, transactionid DESC
            LIMIT 1
            "#,
        )
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(transaction)
    }

    /// Borrow a book: flip its state to "Borrowed" and record an open
    /// transaction for the given user, atomically.
    ///
    /// Returns the new transaction ID. Fails with `NotFound` for an unknown
    /// book and `Conflict` when the book is already borrowed.
    pub async fn borrow(
        &self,
        book_id: i32,
        user_id: i32,
        borrow_date: NaiveDate,
    ) -> AppResult<i32> {
        let mut tx = self.pool.begin().await?;

        // Lock the book row so the state check and flip are atomic.
        let state: Option<Option<String>> =
            sqlx::query_scalar("SELECT state FROM book WHERE bookid = $1 FOR UPDATE")
                .bind(book_id)
                .fetch_optional(&mut *tx)
                .await?;

        let state = match state {
            Some(state) => state,
            None => return Err(AppError::NotFound("Book not found".to_string())),
        };

        if state.as_deref() == Some(STATE_BORROWED) {
            return Err(AppError::Conflict("Book already borrowed".to_string()));
        }

        sqlx::query("UPDATE book SET state = $2 WHERE bookid = $1")
            .bind(book_id)
            .bind(STATE_BORROWED)
            .execute(&mut *tx)
            .await?;

        let transaction_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO borrowtransaction (bookid, userid, borrowdate)
            VALUES ($1, $2, $3)
            RETURNING transactionid
            "#,
        )
        .bind(book_id)
        .bind(user_id)
        .bind(borrow_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(transaction_id)
    }

    /// Return a book: flip its state back to "Present" and close the most
    /// recent transaction, atomically.
    ///
    /// Fails with `InvalidState` when the book is absent or not currently
    /// borrowed. If no transaction row exists the state still flips; that
    /// legacy edge case leaves no completed transaction record behind.
    pub async fn return_book(&self, book_id: i32, return_date: NaiveDate) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let state: Option<Option<String>> =
            sqlx::query_scalar("SELECT state FROM book WHERE bookid = $1 FOR UPDATE")
                .bind(book_id)
                .fetch_optional(&mut *tx)
                .await?;

        match state {
            Some(state) if state.as_deref() == Some(STATE_BORROWED) => {}
            _ => return Err(AppError::InvalidState("Book is not borrowed".to_string())),
        }

        sqlx::query("UPDATE book SET state = $2 WHERE bookid = $1")
            .bind(book_id)
            .bind(STATE_PRESENT)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            UPDATE borrowtransaction SET returndate = $2
            WHERE transactionid = (
                SELECT transactionid FROM borrowtransaction
                WHERE bookid = $1
                ORDER BY borrowdate DESC, transactionid DESC
                LIMIT 1
            )
            "#,
        )
        .bind(book_id)
        .bind(return_date)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }
}
