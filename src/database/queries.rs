//! Filter and pipeline documents for the listing collection.

use mongodb::bson::{doc, Bson, DateTime, Document};

use super::models::{SuburbQuery, ENTIRE_HOME};

/// Order used to pick "the first" of several same-named listings.
pub fn first_listing_sort() -> Document {
    doc! { "_id": 1 }
}

/// Fields needed to report on a listing.
pub fn presence_projection() -> Document {
    doc! { "name": 1, "last_scraped": 1 }
}

/// Only the document ID.
pub fn id_projection() -> Document {
    doc! { "_id": 1 }
}

/// Exact match on the listing name.
pub fn name_filter(name: &str) -> Document {
    doc! { "name": name }
}

/// Listings scraped strictly before `cutoff`.
///
/// `$lt` never matches documents lacking the field.
pub fn scraped_before_filter(cutoff: DateTime) -> Document {
    doc! { "last_scraped": { "$lt": cutoff } }
}

/// Pipeline for the cheapest-suburb report.
///
/// `$exists` alone also matches an explicit `null` suburb, so nulls are
/// excluded along with the empty string. Equal averages are ordered by
/// suburb name.
pub fn cheapest_suburbs_pipeline(query: &SuburbQuery) -> Vec<Document> {
    vec![
        doc! {
            "$match": {
                "bedrooms": 1,
                "address.country": query.country.as_str(),
                "address.market": query.market.as_str(),
                "address.suburb": { "$exists": 1, "$nin": ["", Bson::Null] },
                "room_type": ENTIRE_HOME,
            }
        },
        doc! {
            "$group": {
                "_id": "$address.suburb",
                "averagePrice": { "$avg": "$price" },
            }
        },
        doc! { "$sort": { "averagePrice": 1, "_id": 1 } },
        doc! { "$limit": i64::from(query.limit) },
    ]
}
