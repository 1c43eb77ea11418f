use mongodb::bson;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ReportError {
    Database(mongodb::error::Error),
    Decode(bson::de::Error),
    NoDefaultDatabase,
    Output(io::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Database(e) => write!(f, "{}", e),
            ReportError::Decode(e) => write!(f, "invalid aggregation row: {}", e),
            ReportError::NoDefaultDatabase => write!(f, "No default database name defined or provided."),
            ReportError::Output(e) => write!(f, "failed to write report: {}", e),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Database(e) => Some(e),
            ReportError::Decode(e) => Some(e),
            ReportError::NoDefaultDatabase => None,
            ReportError::Output(e) => Some(e),
        }
    }
}

impl From<mongodb::error::Error> for ReportError {
    fn from(e: mongodb::error::Error) -> Self {
        ReportError::Database(e)
    }
}

impl From<bson::de::Error> for ReportError {
    fn from(e: bson::de::Error) -> Self {
        ReportError::Decode(e)
    }
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        ReportError::Output(e)
    }
}
