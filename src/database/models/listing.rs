//! Listing document model.
//!
//! Only the fields the reports and cleanup commands touch are mapped; the
//! rest of the sample document is ignored on read.

use mongodb::bson::{Bson, DateTime};
use serde::{Deserialize, Serialize};

use super::common::Price;

/// Room type counted by the cheapest-suburb report.
pub const ENTIRE_HOME: &str = "Entire home/apt";

/// Postal address of a listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,

    /// May be missing or empty in the sample dataset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
}

/// A short-term rental listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    /// Document ID: a string in `sample_airbnb`, an ObjectId for
    /// listings inserted by hand
    #[serde(rename = "_id", default)]
    pub id: Bson,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub address: Address,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    /// When the listing was last refreshed from its source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_scraped: Option<DateTime>,
}

impl Listing {
    /// Create a bare listing with an ID and name.
    #[cfg(test)]
    pub fn new(id: impl Into<Bson>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Suburb, if present and non-empty.
    #[cfg(test)]
    pub fn suburb(&self) -> Option<&str> {
        self.address.suburb.as_deref().filter(|s| !s.is_empty())
    }

    /// Whether the listing was scraped strictly before `cutoff`.
    ///
    /// Listings without a scrape date never qualify.
    #[cfg(test)]
    pub fn scraped_before(&self, cutoff: DateTime) -> bool {
        self.last_scraped.is_some_and(|scraped| scraped < cutoff)
    }
}
