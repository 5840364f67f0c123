//! Aggregation output for the cheapest-suburb report.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::Price;
use crate::error::{ListingError, Result};

/// Parameters of the cheapest-suburb report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuburbQuery {
    pub country: String,
    pub market: String,
    /// Maximum number of suburbs to return (always positive)
    pub limit: u32,
}

impl SuburbQuery {
    /// Build a query, rejecting a zero limit.
    pub fn new(country: impl Into<String>, market: impl Into<String>, limit: u32) -> Result<Self> {
        if limit == 0 {
            return Err(ListingError::Config(
                "suburb limit must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            country: country.into(),
            market: market.into(),
            limit,
        })
    }
}

/// Average nightly price of one suburb.
///
/// Read from the `$group` stage output (`_id` is the suburb), written out as
/// `{"suburb": ..., "averagePrice": ...}`. `$avg` yields `null` for a suburb
/// with no numeric prices; that row prints `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuburbPriceSummary {
    #[serde(rename(deserialize = "_id"))]
    pub suburb: String,

    #[serde(rename = "averagePrice", default)]
    pub average_price: Option<Price>,
}

#[cfg(test)]
impl SuburbPriceSummary {
    pub fn new(suburb: impl Into<String>, average_price: Option<f64>) -> Self {
        Self {
            suburb: suburb.into(),
            average_price: average_price.map(Price),
        }
    }
}

impl fmt::Display for SuburbPriceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.average_price {
            Some(price) => write!(f, "{}: {}", self.suburb, price),
            None => write!(f, "{}: null", self.suburb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, Bson};

    #[test]
    fn test_zero_limit_rejected() {
        assert!(SuburbQuery::new("Australia", "Sydney", 0).is_err());
        assert_eq!(SuburbQuery::new("Australia", "Sydney", 10).unwrap().limit, 10);
    }

    #[test]
    fn test_reads_group_output() {
        let summary: SuburbPriceSummary =
            mongodb::bson::from_document(doc! { "_id": "Rockdale", "averagePrice": 46.5 }).unwrap();

        assert_eq!(summary, SuburbPriceSummary::new("Rockdale", Some(46.5)));
        assert_eq!(summary.to_string(), "Rockdale: 46.5");
    }

    #[test]
    fn test_reads_null_average() {
        let raw = doc! { "_id": "Manly", "averagePrice": Bson::Null };
        let bytes = mongodb::bson::to_vec(&raw).unwrap();

        let summary: SuburbPriceSummary = mongodb::bson::from_slice(&bytes).unwrap();

        assert_eq!(summary, SuburbPriceSummary::new("Manly", None));
        assert_eq!(summary.to_string(), "Manly: null");
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            serde_json::json!({ "suburb": "Manly", "averagePrice": null })
        );
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(SuburbPriceSummary::new("Rockdale", Some(50.0))).unwrap();
        assert_eq!(json, serde_json::json!({ "suburb": "Rockdale", "averagePrice": 50.0 }));
    }
}
