//! Graph store integration
//!
//! The graph side of the catalog is a derived mirror of the relational
//! data: it can be rebuilt from scratch at any time and is never written
//! by the live borrow/return workflow.

pub mod client;
pub mod mirror;

pub use client::GraphClient;
pub use mirror::{CatalogSnapshot, MirrorReport};
