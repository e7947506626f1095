//! API handlers for Biblios REST endpoints

pub mod catalog;
pub mod description;
pub mod graph;
pub mod health;
pub mod loans;
pub mod openapi;
