//! Catalog query service
//!
//! Produces the denormalized book list the UI renders. Every call walks
//! the full book table and resolves each reference with a point lookup;
//! there is no pagination and no caching.

use crate::{
    error::AppResult,
    models::{transaction::format_date_opt, Author, BookView},
    repository::Repository,
};

const UNKNOWN: &str = "Unknown";

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all authors
    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list_all().await
    }

    /// List all books as view-ready records.
    ///
    /// Display names fall back to "Unknown" when the referenced row is
    /// absent. Borrower fields come from the most recent transaction and
    /// are empty strings when the book has never been borrowed.
    pub async fn list_books(&self) -> AppResult<Vec<BookView>> {
        let books = self.repository.books.list_all().await?;

        let mut views = Vec::with_capacity(books.len());
        for book in books {
            let author = match book.author_id {
                Some(id) => self.repository.authors.get_name(id).await?,
                None => None,
            };
            let genre = match book.genre_id {
                Some(id) => self.repository.genres.get_name(id).await?,
                None => None,
            };
            let publisher = match book.publisher_id {
                Some(id) => self.repository.publishers.get_name(id).await?,
                None => None,
            };

            let latest = self.repository.loans.latest_for_book(book.id).await?;
            let (borrower, borrow_date, return_date) = match &latest {
                Some(transaction) => {
                    let borrower = self
                        .repository
                        .users
                        .get_name(transaction.user_id)
                        .await?
                        .unwrap_or_else(|| UNKNOWN.to_string());
                    (
                        borrower,
                        format_date_opt(Some(transaction.borrow_date)),
                        format_date_opt(transaction.return_date),
                    )
                }
                None => (String::new(), String::new(), String::new()),
            };

            views.push(BookView {
                id: book.id,
                title: book.title,
                state: book.state,
                author: author.unwrap_or_else(|| UNKNOWN.to_string()),
                genre: genre.unwrap_or_else(|| UNKNOWN.to_string()),
                publisher: publisher.unwrap_or_else(|| UNKNOWN.to_string()),
                borrower,
                borrow_date,
                return_date,
            });
        }

        Ok(views)
    }
}
