use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};
use mongodb::{
    bson::{self, doc, Document},
    Collection,
};
use tracing::{debug, error};

use crate::{
    error::ReportError,
    models::{InterestCount, User},
};

pub const USERS_COLLECTION: &str = "users";

pub type InterestStream = BoxStream<'static, Result<InterestCount, ReportError>>;

/// Read-only queries the user report needs.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Number of stored users, no filter applied.
    async fn count_users(&self) -> Result<u64, ReportError>;

    /// Users per interest area, largest count first.
    async fn interest_counts(&self) -> Result<InterestStream, ReportError>;
}

/// Unwind `areasInteresse`, count each value, sort by count descending.
pub fn interest_pipeline() -> Vec<Document> {
    vec![
        doc! { "$unwind": "$areasInteresse" },
        doc! { "$group": { "_id": "$areasInteresse", "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": -1 } },
    ]
}

pub fn decode_interest(row: Document) -> Result<InterestCount, ReportError> {
    Ok(bson::from_document(row)?)
}

pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(collection: Collection<User>) -> Self {
        MongoUserStore { collection }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn count_users(&self) -> Result<u64, ReportError> {
        debug!("Counting documents in {}", self.collection.name());

        self.collection.count_documents(doc! {}, None).await.map_err(|e| {
            error!("Failed to count users: {}", e);
            ReportError::from(e)
        })
    }

    async fn interest_counts(&self) -> Result<InterestStream, ReportError> {
        debug!("Aggregating users per interest area");

        let cursor = self
            .collection
            .aggregate(interest_pipeline(), None)
            .await
            .map_err(|e| {
                error!("Failed to start interest aggregation: {}", e);
                ReportError::from(e)
            })?;

        Ok(cursor
            .map(|row| row.map_err(ReportError::from).and_then(decode_interest))
            .boxed())
    }
}

#[cfg(test)]
pub mod memory {
    use super::*;

    /// Applies the same unwind/group/sort as [`interest_pipeline`] to users held in memory.
    #[derive(Default)]
    pub struct MemoryUserStore {
        pub users: Vec<User>,
        pub fail_count: bool,
        pub fail_aggregation: bool,
    }

    impl MemoryUserStore {
        pub fn from_documents(documents: Vec<Document>) -> Self {
            let users = documents
                .into_iter()
                .map(|d| bson::from_document(d).expect("user document"))
                .collect();
            MemoryUserStore { users, ..Default::default() }
        }

        pub fn with_interests(interests: &[&[&str]]) -> Self {
            Self::from_documents(
                interests
                    .iter()
                    .map(|areas| doc! { "nomeCompleto": "Test", "areasInteresse": areas.to_vec() })
                    .collect(),
            )
        }
    }

    fn unavailable(what: &str) -> ReportError {
        <bson::de::Error as serde::de::Error>::custom(format!("{} unavailable", what)).into()
    }

    #[async_trait]
    impl UserStore for MemoryUserStore {
        async fn count_users(&self) -> Result<u64, ReportError> {
            if self.fail_count {
                return Err(unavailable("count"));
            }
            Ok(self.users.len() as u64)
        }

        async fn interest_counts(&self) -> Result<InterestStream, ReportError> {
            if self.fail_aggregation {
                return Err(unavailable("aggregate"));
            }

            let mut rows: Vec<InterestCount> = Vec::new();
            for area in self.users.iter().flat_map(|u| u.areas_interesse.iter()) {
                match rows.iter_mut().find(|row| &row.area == area) {
                    Some(row) => row.count += 1,
                    None => rows.push(InterestCount { area: area.clone(), count: 1 }),
                }
            }
            rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label().cmp(&b.label())));

            Ok(futures::stream::iter(rows.into_iter().map(Ok)).boxed())
        }
    }
}
