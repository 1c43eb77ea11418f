use dotenv::dotenv;
use std::env;

pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/hub_juventude_db";

/// Connection settings for a report run, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub mongo_uri: String,
    /// Used only when the URI does not name a database.
    pub database_name: Option<String>,
}

impl ReportConfig {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongo_uri = lookup("MONGO_URI")
            .unwrap_or_else(|| DEFAULT_MONGO_URI.to_string());
        let database_name = lookup("DATABASE_NAME").filter(|name| !name.is_empty());

        ReportConfig { mongo_uri, database_name }
    }
}
