//! Repository module - data access layer.

mod listing_repository;

pub use listing_repository::ListingRepository;
