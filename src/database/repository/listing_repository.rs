//! Listing repository backed by MongoDB.

use futures::{StreamExt, TryStreamExt};
use mongodb::bson::{DateTime, Document};
use mongodb::Collection;
use tracing::debug;

use crate::database::models::{Listing, SuburbPriceSummary, SuburbQuery};
use crate::database::queries;
use crate::database::store::{ListingStore, SummaryStream};
use crate::database::Database;
use crate::error::{ListingError, Result};

/// Repository for listing documents.
pub struct ListingRepository {
    collection: Collection<Listing>,
}

impl ListingRepository {
    pub fn new(db: &Database, collection: &str) -> Self {
        Self {
            collection: db.collection(collection),
        }
    }
}

impl ListingStore for ListingRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Listing>> {
        let result = self
            .collection
            .find_one(queries::name_filter(name))
            .sort(queries::first_listing_sort())
            .projection(queries::presence_projection())
            .await?;

        debug!("Lookup listing '{}': found={}", name, result.is_some());
        Ok(result)
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64> {
        // findOneAndDelete takes a sort, deleteOne does not. The delete has
        // already committed when the reply arrives, so only `_id` comes back
        // and it is read as a raw document.
        let raw: Collection<Document> = self.collection.clone_with_type();
        let deleted = raw
            .find_one_and_delete(queries::name_filter(name))
            .sort(queries::first_listing_sort())
            .projection(queries::id_projection())
            .await?;

        let count = u64::from(deleted.is_some());
        debug!("Deleted {} listing(s) named '{}'", count, name);
        Ok(count)
    }

    async fn delete_scraped_before(&self, cutoff: DateTime) -> Result<u64> {
        let result = self
            .collection
            .delete_many(queries::scraped_before_filter(cutoff))
            .await?;

        debug!("Deleted {} listing(s) scraped before {}", result.deleted_count, cutoff);
        Ok(result.deleted_count)
    }

    async fn cheapest_suburbs(&self, query: &SuburbQuery) -> Result<SummaryStream> {
        let pipeline = queries::cheapest_suburbs_pipeline(query);
        debug!("Aggregating cheapest suburbs: {:?}", pipeline);

        let cursor = self
            .collection
            .aggregate(pipeline)
            .with_type::<SuburbPriceSummary>()
            .await?;

        Ok(cursor.map_err(ListingError::Query).boxed())
    }
}
