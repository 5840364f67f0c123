//! Listing store abstraction.
//!
//! Commands are written against this trait so they run unchanged over
//! MongoDB or the in-memory store used by tests.

use futures::stream::BoxStream;
use mongodb::bson::DateTime;

use super::models::{Listing, SuburbPriceSummary, SuburbQuery};
use crate::error::Result;

/// Lazily produced report rows.
pub type SummaryStream = BoxStream<'static, Result<SuburbPriceSummary>>;

#[allow(async_fn_in_trait)]
pub trait ListingStore {
    /// First listing (smallest `_id`) with exactly this name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Listing>>;

    /// Delete the listing `find_by_name` would return. Returns 0 or 1.
    async fn delete_by_name(&self, name: &str) -> Result<u64>;

    /// Delete every listing scraped strictly before `cutoff`.
    async fn delete_scraped_before(&self, cutoff: DateTime) -> Result<u64>;

    /// Suburbs ordered by ascending average price, then suburb name.
    async fn cheapest_suburbs(&self, query: &SuburbQuery) -> Result<SummaryStream>;
}
