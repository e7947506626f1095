//! Database models and API view types

pub mod author;
pub mod book;
pub mod genre;
pub mod publisher;
pub mod transaction;
pub mod user;

pub use author::Author;
pub use book::{Book, BookView};
pub use genre::Genre;
pub use publisher::Publisher;
pub use transaction::BorrowTransaction;
pub use user::UserAccount;
