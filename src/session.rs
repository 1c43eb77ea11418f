use mongodb::{Client, Database};
use std::future::Future;
use tracing::{debug, info};

use crate::{
    config::ReportConfig,
    error::ReportError,
    store::{MongoUserStore, USERS_COLLECTION},
};

/// Picks the database named in the URI, falling back to the configured name.
pub fn select_database(client: &Client, config: &ReportConfig) -> Result<Database, ReportError> {
    client
        .default_database()
        .or_else(|| config.database_name.as_deref().map(|name| client.database(name)))
        .ok_or(ReportError::NoDefaultDatabase)
}

/// Runs `f` against the `users` collection and shuts the client down afterwards,
/// whatever `f` returned. If the client cannot be built, `f` never runs.
pub async fn with_users<F, Fut, T>(config: &ReportConfig, f: F) -> Result<T, ReportError>
where
    F: FnOnce(MongoUserStore) -> Fut,
    Fut: Future<Output = Result<T, ReportError>>,
{
    let client = Client::with_uri_str(&config.mongo_uri).await?;
    debug!("MongoDB client created");

    let result = match select_database(&client, config) {
        Ok(database) => {
            info!("Using database {}", database.name());
            f(MongoUserStore::new(database.collection(USERS_COLLECTION))).await
        }
        Err(e) => Err(e),
    };

    client.shutdown().await;
    debug!("MongoDB client shut down");

    result
}
