use crate::error::AppError;
use mongodb::{bson::doc, options::ClientOptions, Client as MongoClient};
use std::time::Duration;

/// Owned handle to the MongoDB connection. Created once at startup, held for
/// the lifetime of the process, and released via [`MongoDb::disconnect`].
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
}

impl MongoDb {
    /// Construct the client without touching the network. The deadline is
    /// applied to the driver's connect and server-selection timeouts so no
    /// later operation can outwait it.
    pub async fn new(uri: &str, deadline: Duration) -> Result<Self, AppError> {
        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB URI {}: {}", uri, e);
            AppError::from(e)
        })?;
        options.connect_timeout = Some(deadline);
        options.server_selection_timeout = Some(deadline);

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to construct MongoDB client: {}", e);
            AppError::from(e)
        })?;

        Ok(Self { client })
    }

    /// Establish and verify the connection within the deadline. No retry: a
    /// failure here is fatal to startup.
    pub async fn connect(uri: &str, deadline: Duration) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let db = Self::new(uri, deadline).await?;

        tokio::time::timeout(deadline, db.ping())
            .await
            .map_err(|_| {
                tracing::error!(
                    "MongoDB connection not established within {:?}",
                    deadline
                );
                AppError::DatabaseError(anyhow::anyhow!(
                    "connection attempt timed out after {:?}",
                    deadline
                ))
            })??;

        tracing::info!("Successfully connected to MongoDB");
        Ok(db)
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB ping failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// Release the connection, waiting for in-flight operations to drain.
    pub async fn disconnect(self) {
        tracing::info!("Disconnecting from MongoDB");
        self.client.shutdown().await;
    }
}
