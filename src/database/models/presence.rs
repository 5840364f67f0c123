//! Outcome of a listing existence check.

use std::fmt;

use mongodb::bson::DateTime;

use super::listing::Listing;
use crate::utils::format_scraped_date;

#[derive(Debug, Clone, PartialEq)]
pub enum ListingPresence {
    Found { name: String, last_scraped: DateTime },
    FoundUnscraped { name: String },
    Missing { name: String },
}

impl ListingPresence {
    /// Classify a lookup result for `name`.
    pub fn from_lookup(name: &str, listing: Option<&Listing>) -> Self {
        let name = name.to_string();
        match listing {
            Some(Listing {
                last_scraped: Some(last_scraped),
                ..
            }) => Self::Found {
                name,
                last_scraped: *last_scraped,
            },
            Some(_) => Self::FoundUnscraped { name },
            None => Self::Missing { name },
        }
    }

    #[cfg(test)]
    pub fn exists(&self) -> bool {
        !matches!(self, Self::Missing { .. })
    }
}

impl fmt::Display for ListingPresence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { name, last_scraped } => write!(
                f,
                "Found a listing in the collection with the name '{}'. Listing was last scraped {}.",
                name,
                format_scraped_date(*last_scraped)
            ),
            Self::FoundUnscraped { name } => {
                write!(f, "Found a listing in the collection with the name '{}'", name)
            }
            Self::Missing { name } => write!(f, "No listings found with the name '{}'", name),
        }
    }
}
