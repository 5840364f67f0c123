//! Error types shared by the store layer and the commands.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to connect to MongoDB")]
    Connection(#[source] mongodb::error::Error),

    #[error("listing query failed")]
    Query(#[from] mongodb::error::Error),

    #[error("failed to write report")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ListingError>;
