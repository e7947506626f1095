//! Relational-to-graph mirror builder
//!
//! Reads a full snapshot of the relational catalog and replays it into the
//! graph store as MERGE operations, one entity type at a time and in
//! dependency order. Every write is an upsert, so the build is idempotent
//! and safe to re-run after a partial failure.
//!
//! Rows whose foreign references are missing from the snapshot do not stop
//! the build: the affected edge is dropped and recorded in the report, so
//! dangling references are visible to the caller instead of silently lost.

use std::collections::HashSet;

use neo4rs::Query;
use tracing::{debug, info, warn};

use crate::{
    error::AppResult,
    models::{
        transaction::format_date, Author, Book, BorrowTransaction, Genre, Publisher, UserAccount,
    },
    repository::Repository,
};

use super::GraphClient;

/// Full relational snapshot the mirror is derived from.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub authors: Vec<Author>,
    pub genres: Vec<Genre>,
    pub publishers: Vec<Publisher>,
    pub users: Vec<UserAccount>,
    pub books: Vec<Book>,
    pub transactions: Vec<BorrowTransaction>,
}

impl CatalogSnapshot {
    /// Load the complete catalog through the repository layer.
    pub async fn load(repository: &Repository) -> AppResult<Self> {
        Ok(Self {
            authors: repository.authors.list_all().await?,
            genres: repository.genres.list_all().await?,
            publishers: repository.publishers.list_all().await?,
            users: repository.users.list_all().await?,
            books: repository.books.list_all().await?,
            transactions: repository.loans.list_all().await?,
        })
    }
}

/// One upsert against the graph store.
///
/// The plan is a plain value so it can be inspected and compared without a
/// live graph connection; `to_query` turns an operation into Cypher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorOp {
    MergeAuthor { id: i32, name: String },
    MergeGenre { id: i32, name: String },
    MergePublisher { id: i32, name: String },
    MergeUser { id: i32, name: String },
    MergeBook { id: i32, title: String, state: String },
    MergeWrittenBy { book_id: i32, author_id: i32 },
    MergeBelongsTo { book_id: i32, genre_id: i32 },
    MergePublishedBy { book_id: i32, publisher_id: i32 },
    MergeBorrowed {
        book_id: i32,
        user_id: i32,
        borrow_date: String,
        return_date: Option<String>,
    },
}

impl MirrorOp {
    fn is_relationship(&self) -> bool {
        matches!(
            self,
            MirrorOp::MergeWrittenBy { .. }
                | MirrorOp::MergeBelongsTo { .. }
                | MirrorOp::MergePublishedBy { .. }
                | MirrorOp::MergeBorrowed { .. }
        )
    }

    /// Render the operation as a parameterized Cypher MERGE.
    pub fn to_query(&self) -> Query {
        match self {
            MirrorOp::MergeAuthor { id, name } => {
                Query::new("MERGE (a:Author {AuthorID: $id}) SET a.Name = $name".to_string())
                    .param("id", *id as i64)
                    .param("name", name.as_str())
            }
            MirrorOp::MergeGenre { id, name } => {
                Query::new("MERGE (g:Genre {GenreID: $id}) SET g.Name = $name".to_string())
                    .param("id", *id as i64)
                    .param("name", name.as_str())
            }
            MirrorOp::MergePublisher { id, name } => {
                Query::new("MERGE (p:Publisher {PublisherID: $id}) SET p.Name = $name".to_string())
                    .param("id", *id as i64)
                    .param("name", name.as_str())
            }
            MirrorOp::MergeUser { id, name } => {
                Query::new("MERGE (u:User {UserID: $id}) SET u.Name = $name".to_string())
                    .param("id", *id as i64)
                    .param("name", name.as_str())
            }
            MirrorOp::MergeBook { id, title, state } => Query::new(
                "MERGE (b:Book {BookID: $id}) SET b.Title = $title, b.State = $state".to_string(),
            )
            .param("id", *id as i64)
            .param("title", title.as_str())
            .param("state", state.as_str()),
            MirrorOp::MergeWrittenBy { book_id, author_id } => Query::new(
                "MATCH (b:Book {BookID: $book_id}), (a:Author {AuthorID: $author_id})
                 MERGE (b)-[:WRITTEN_BY]->(a)"
                    .to_string(),
            )
            .param("book_id", *book_id as i64)
            .param("author_id", *author_id as i64),
            MirrorOp::MergeBelongsTo { book_id, genre_id } => Query::new(
                "MATCH (b:Book {BookID: $book_id}), (g:Genre {GenreID: $genre_id})
                 MERGE (b)-[:BELONGS_TO]->(g)"
                    .to_string(),
            )
            .param("book_id", *book_id as i64)
            .param("genre_id", *genre_id as i64),
            MirrorOp::MergePublishedBy {
                book_id,
                publisher_id,
            } => Query::new(
                "MATCH (b:Book {BookID: $book_id}), (p:Publisher {PublisherID: $publisher_id})
                 MERGE (b)-[:PUBLISHED_BY]->(p)"
                    .to_string(),
            )
            .param("book_id", *book_id as i64)
            .param("publisher_id", *publisher_id as i64),
            MirrorOp::MergeBorrowed {
                book_id,
                user_id,
                borrow_date,
                return_date,
            } => {
                // The return date is overwritten on every run, explicitly
                // with null while the transaction is still open.
                let query = match return_date {
                    Some(date) => Query::new(
                        "MATCH (u:User {UserID: $user_id}), (b:Book {BookID: $book_id})
                         MERGE (u)-[r:BORROWED {BorrowDate: $borrow_date}]->(b)
                         SET r.ReturnDate = $return_date"
                            .to_string(),
                    )
                    .param("return_date", date.as_str()),
                    None => Query::new(
                        "MATCH (u:User {UserID: $user_id}), (b:Book {BookID: $book_id})
                         MERGE (u)-[r:BORROWED {BorrowDate: $borrow_date}]->(b)
                         SET r.ReturnDate = null"
                            .to_string(),
                    ),
                };
                query
                    .param("user_id", *user_id as i64)
                    .param("book_id", *book_id as i64)
                    .param("borrow_date", borrow_date.as_str())
            }
        }
    }
}

/// Outcome of a mirror build.
#[derive(Debug, Clone, Default)]
pub struct MirrorReport {
    pub nodes: usize,
    pub relationships: usize,
    /// Human-readable entries for every edge dropped because its
    /// referenced row was missing from the snapshot.
    pub skipped: Vec<String>,
}

/// Derive the ordered merge plan from a snapshot.
///
/// Nodes without dependencies come first, then books with their three
/// edges, then borrow edges. The plan is a deterministic function of the
/// snapshot: replaying the same snapshot yields the same plan.
pub fn plan(snapshot: &CatalogSnapshot) -> (Vec<MirrorOp>, Vec<String>) {
    let mut ops = Vec::new();
    let mut skipped = Vec::new();

    let author_ids: HashSet<i32> = snapshot.authors.iter().map(|a| a.id).collect();
    let genre_ids: HashSet<i32> = snapshot.genres.iter().map(|g| g.id).collect();
    let publisher_ids: HashSet<i32> = snapshot.publishers.iter().map(|p| p.id).collect();
    let user_ids: HashSet<i32> = snapshot.users.iter().map(|u| u.id).collect();
    let book_ids: HashSet<i32> = snapshot.books.iter().map(|b| b.id).collect();

    for author in &snapshot.authors {
        ops.push(MirrorOp::MergeAuthor {
            id: author.id,
            name: author.name.clone(),
        });
    }
    for genre in &snapshot.genres {
        ops.push(MirrorOp::MergeGenre {
            id: genre.id,
            name: genre.name.clone(),
        });
    }
    for publisher in &snapshot.publishers {
        ops.push(MirrorOp::MergePublisher {
            id: publisher.id,
            name: publisher.name.clone(),
        });
    }
    for user in &snapshot.users {
        ops.push(MirrorOp::MergeUser {
            id: user.id,
            name: user.name.clone(),
        });
    }

    for book in &snapshot.books {
        ops.push(MirrorOp::MergeBook {
            id: book.id,
            title: book.title.clone(),
            state: book.state.clone().unwrap_or_default(),
        });

        match book.author_id {
            Some(author_id) if author_ids.contains(&author_id) => {
                ops.push(MirrorOp::MergeWrittenBy {
                    book_id: book.id,
                    author_id,
                });
            }
            reference => skipped.push(format!(
                "book {}: author {:?} not in snapshot, WRITTEN_BY edge skipped",
                book.id, reference
            )),
        }
        match book.genre_id {
            Some(genre_id) if genre_ids.contains(&genre_id) => {
                ops.push(MirrorOp::MergeBelongsTo {
                    book_id: book.id,
                    genre_id,
                });
            }
            reference => skipped.push(format!(
                "book {}: genre {:?} not in snapshot, BELONGS_TO edge skipped",
                book.id, reference
            )),
        }
        match book.publisher_id {
            Some(publisher_id) if publisher_ids.contains(&publisher_id) => {
                ops.push(MirrorOp::MergePublishedBy {
                    book_id: book.id,
                    publisher_id,
                });
            }
            reference => skipped.push(format!(
                "book {}: publisher {:?} not in snapshot, PUBLISHED_BY edge skipped",
                book.id, reference
            )),
        }
    }

    for transaction in &snapshot.transactions {
        if !book_ids.contains(&transaction.book_id) || !user_ids.contains(&transaction.user_id) {
            skipped.push(format!(
                "transaction {}: book {} or user {} not in snapshot, BORROWED edge skipped",
                transaction.id, transaction.book_id, transaction.user_id
            ));
            continue;
        }
        ops.push(MirrorOp::MergeBorrowed {
            book_id: transaction.book_id,
            user_id: transaction.user_id,
            borrow_date: format_date(transaction.borrow_date),
            return_date: transaction.return_date.map(format_date),
        });
    }

    (ops, skipped)
}

/// Replay a snapshot into the graph store.
///
/// Each operation runs on its own; there is no transaction spanning the
/// build, so a crash mid-way leaves a partial mirror that the next run
/// completes through MERGE semantics.
pub async fn build_mirror(
    client: &GraphClient,
    snapshot: &CatalogSnapshot,
) -> AppResult<MirrorReport> {
    let (ops, skipped) = plan(snapshot);

    info!(
        authors = snapshot.authors.len(),
        genres = snapshot.genres.len(),
        publishers = snapshot.publishers.len(),
        users = snapshot.users.len(),
        books = snapshot.books.len(),
        transactions = snapshot.transactions.len(),
        "Starting mirror build"
    );

    let mut report = MirrorReport {
        skipped,
        ..Default::default()
    };

    for op in &ops {
        client.execute(op.to_query()).await?;
        if op.is_relationship() {
            report.relationships += 1;
        } else {
            report.nodes += 1;
        }
        debug!(?op, "Merged");
    }

    for entry in &report.skipped {
        warn!("{}", entry);
    }

    info!(
        nodes = report.nodes,
        relationships = report.relationships,
        skipped = report.skipped.len(),
        "Mirror build complete"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot {
            authors: vec![Author {
                id: 1,
                name: "Ursula K. Le Guin".to_string(),
            }],
            genres: vec![Genre {
                id: 1,
                name: "Science Fiction".to_string(),
            }],
            publishers: vec![Publisher {
                id: 1,
                name: "Ace Books".to_string(),
            }],
            users: vec![UserAccount {
                id: 1,
                name: "Alice".to_string(),
            }],
            books: vec![Book {
                id: 1,
                title: "The Dispossessed".to_string(),
                state: Some("Borrowed".to_string()),
                author_id: Some(1),
                genre_id: Some(1),
                publisher_id: Some(1),
            }],
            transactions: vec![BorrowTransaction {
                id: 1,
                book_id: 1,
                user_id: 1,
                borrow_date: date(2024, 1, 1),
                return_date: None,
            }],
        }
    }

    #[test]
    fn test_plan_is_deterministic() {
        let snapshot = snapshot();
        assert_eq!(plan(&snapshot), plan(&snapshot));
    }

    #[test]
    fn test_plan_dependency_order() {
        let (ops, skipped) = plan(&snapshot());
        assert!(skipped.is_empty());

        // Authors, genres, publishers, users before the book; the book
        // before its edges; the borrow edge last.
        assert!(matches!(ops[0], MirrorOp::MergeAuthor { id: 1, .. }));
        assert!(matches!(ops[1], MirrorOp::MergeGenre { id: 1, .. }));
        assert!(matches!(ops[2], MirrorOp::MergePublisher { id: 1, .. }));
        assert!(matches!(ops[3], MirrorOp::MergeUser { id: 1, .. }));
        assert!(matches!(ops[4], MirrorOp::MergeBook { id: 1, .. }));
        assert!(matches!(ops[5], MirrorOp::MergeWrittenBy { .. }));
        assert!(matches!(ops[6], MirrorOp::MergeBelongsTo { .. }));
        assert!(matches!(ops[7], MirrorOp::MergePublishedBy { .. }));
        assert!(matches!(ops[8], MirrorOp::MergeBorrowed { .. }));
        assert_eq!(ops.len(), 9);
    }

    #[test]
    fn test_open_transaction_keeps_null_return_date() {
        let (ops, _) = plan(&snapshot());
        let Some(MirrorOp::MergeBorrowed {
            borrow_date,
            return_date,
            ..
        }) = ops.last()
        else {
            panic!("expected a borrow edge");
        };
        assert_eq!(borrow_date, "2024-01-01");
        assert_eq!(*return_date, None);
    }

    #[test]
    fn test_closed_transaction_carries_return_date() {
        let mut snapshot = snapshot();
        snapshot.transactions[0].return_date = Some(date(2024, 2, 1));
        let (ops, _) = plan(&snapshot);
        let Some(MirrorOp::MergeBorrowed { return_date, .. }) = ops.last() else {
            panic!("expected a borrow edge");
        };
        assert_eq!(return_date.as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn test_dangling_author_skips_only_that_edge() {
        let mut snapshot = snapshot();
        snapshot.books[0].author_id = Some(99);
        let (ops, skipped) = plan(&snapshot);

        assert!(!ops.iter().any(|op| matches!(op, MirrorOp::MergeWrittenBy { .. })));
        // The book node and the two remaining edges survive.
        assert!(ops.iter().any(|op| matches!(op, MirrorOp::MergeBook { .. })));
        assert!(ops.iter().any(|op| matches!(op, MirrorOp::MergeBelongsTo { .. })));
        assert!(ops.iter().any(|op| matches!(op, MirrorOp::MergePublishedBy { .. })));
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].contains("WRITTEN_BY"));
    }

    #[test]
    fn test_dangling_transaction_user_skips_borrow_edge() {
        let mut snapshot = snapshot();
        snapshot.transactions[0].user_id = 42;
        let (ops, skipped) = plan(&snapshot);

        assert!(!ops.iter().any(|op| matches!(op, MirrorOp::MergeBorrowed { .. })));
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].contains("BORROWED"));
    }

    #[test]
    fn test_null_state_rendered_as_empty() {
        let mut snapshot = snapshot();
        snapshot.books[0].state = None;
        let (ops, _) = plan(&snapshot);
        let Some(MirrorOp::MergeBook { state, .. }) =
            ops.iter().find(|op| matches!(op, MirrorOp::MergeBook { .. }))
        else {
            panic!("expected a book node");
        };
        assert_eq!(state, "");
    }
}
