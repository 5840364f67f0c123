//! Configuration module.
//!
//! Loads connection settings from environment variables (and `.env`).

use std::env;

use crate::error::{ListingError, Result};

const DEFAULT_DATABASE: &str = "sample_airbnb";
const DEFAULT_COLLECTION: &str = "listingsAndReviews";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // MongoDB
    pub mongodb_uri: String,
    pub mongodb_database: String,

    /// Collection holding the listing documents.
    pub listings_collection: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns `ListingError::Config` if `MONGODB_URI` is not set.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mongodb_uri = non_empty("MONGODB_URI")
            .ok_or_else(|| ListingError::Config("MONGODB_URI must be set".to_string()))?;

        Ok(Self {
            mongodb_uri,
            mongodb_database: non_empty("MONGODB_DATABASE")
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            listings_collection: non_empty("MONGODB_COLLECTION")
                .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
        })
    }
}
