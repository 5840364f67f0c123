//! MongoDB database wrapper.

use mongodb::{options::ClientOptions, Client, Collection};
use tracing::info;

use crate::error::{ListingError, Result};

/// Database wrapper owning the MongoDB client for one run.
#[derive(Debug, Clone)]
pub struct Database {
    client: Client,
    db: mongodb::Database,
}

impl Database {
    /// Connect to MongoDB with the given URI and database name.
    ///
    /// # Arguments
    /// * `uri` - MongoDB connection string
    /// * `db_name` - Database name to use
    ///
    /// # Errors
    /// Returns `ListingError::Connection` if the URI is invalid or the
    /// server does not answer a ping.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        let options = ClientOptions::parse(uri)
            .await
            .map_err(ListingError::Connection)?;
        let client = Client::with_options(options).map_err(ListingError::Connection)?;

        // Ping the database to verify connection
        client
            .database("admin")
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(ListingError::Connection)?;

        info!("Successfully connected to MongoDB");

        let db = client.database(db_name);

        Ok(Self { client, db })
    }

    /// Get a typed collection from the database.
    ///
    /// # Arguments
    /// * `name` - Collection name
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Shut the client down, waiting for in-flight operations and
    /// releasing pooled connections.
    pub async fn close(self) {
        self.client.shutdown().await;
        info!("MongoDB connection closed");
    }
}
