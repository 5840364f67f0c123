//! In-memory listing store for tests.
//!
//! Mirrors the MongoDB filters and pipeline, including the `_id` and
//! suburb-name tie-breaks.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use futures::StreamExt;
use mongodb::bson::{Bson, DateTime};
use parking_lot::Mutex;

use super::models::{Listing, Price, SuburbPriceSummary, SuburbQuery, ENTIRE_HOME};
use super::store::{ListingStore, SummaryStream};
use crate::error::Result;

/// Sort key for an `_id`; fixtures use string IDs.
fn id_key(id: &Bson) -> String {
    match id {
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    listings: Mutex<Vec<Listing>>,
}

impl MemoryStore {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: Mutex::new(listings),
        }
    }

    pub fn len(&self) -> usize {
        self.listings.lock().len()
    }

    pub fn ids(&self) -> Vec<String> {
        self.listings.lock().iter().map(|l| id_key(&l.id)).collect()
    }

    fn first_index(listings: &[Listing], name: &str) -> Option<usize> {
        listings
            .iter()
            .enumerate()
            .filter(|(_, l)| l.name == name)
            .min_by_key(|(_, l)| id_key(&l.id))
            .map(|(i, _)| i)
    }

    fn qualifies(listing: &Listing, query: &SuburbQuery) -> bool {
        listing.bedrooms == Some(1)
            && listing.address.country.as_deref() == Some(query.country.as_str())
            && listing.address.market.as_deref() == Some(query.market.as_str())
            && listing.suburb().is_some()
            && listing.room_type.as_deref() == Some(ENTIRE_HOME)
    }
}

impl ListingStore for MemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Listing>> {
        let listings = self.listings.lock();
        Ok(Self::first_index(&listings, name).map(|i| listings[i].clone()))
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64> {
        let mut listings = self.listings.lock();
        match Self::first_index(&listings, name) {
            Some(i) => {
                listings.remove(i);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_scraped_before(&self, cutoff: DateTime) -> Result<u64> {
        let mut listings = self.listings.lock();
        let before = listings.len();
        listings.retain(|l| !l.scraped_before(cutoff));
        Ok((before - listings.len()) as u64)
    }

    async fn cheapest_suburbs(&self, query: &SuburbQuery) -> Result<SummaryStream> {
        // $avg skips missing prices and yields null for a group without any
        let mut groups: BTreeMap<String, (f64, u32)> = BTreeMap::new();
        for listing in self.listings.lock().iter().filter(|l| Self::qualifies(l, query)) {
            let (sum, count) = groups.entry(listing.suburb().unwrap_or_default().to_string()).or_default();
            if let Some(price) = listing.price {
                *sum += price.value();
                *count += 1;
            }
        }

        let mut rows: Vec<SuburbPriceSummary> = groups
            .into_iter()
            .map(|(suburb, (sum, count))| {
                let average = (count > 0).then(|| sum / f64::from(count));
                SuburbPriceSummary::new(suburb, average)
            })
            .collect();

        // null sorts before any number, as on the server
        rows.sort_by(|a, b| {
            let key = |row: &SuburbPriceSummary| row.average_price.map(Price::value);
            match (key(a), key(b)) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(x), Some(y)) => x.total_cmp(&y),
            }
            .then_with(|| a.suburb.cmp(&b.suburb))
        });
        rows.truncate(query.limit as usize);

        Ok(futures::stream::iter(rows.into_iter().map(Ok)).boxed())
    }
}
