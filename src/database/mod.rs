//! Database module exports.

#[cfg(test)]
pub mod memory;
mod models;
mod mongo;
pub mod queries;
mod repository;
mod store;

pub use models::*;
pub use mongo::Database;
pub use repository::ListingRepository;
pub use store::ListingStore;
