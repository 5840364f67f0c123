//! Database model exports.

pub mod common;
pub mod listing;
pub mod presence;
pub mod suburb;

pub use common::Price;
pub use listing::{Listing, ENTIRE_HOME};
pub use presence::ListingPresence;
pub use suburb::{SuburbPriceSummary, SuburbQuery};
