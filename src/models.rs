use mongodb::bson::Bson;
use serde::Deserialize;

/// The slice of a stored user record this report reads.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct User {
    #[serde(rename = "areasInteresse", default)]
    pub areas_interesse: Vec<Bson>,
}

/// One row of the per-interest aggregation. The group key is whatever the
/// unwound array held, so it is kept as raw BSON.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InterestCount {
    #[serde(rename = "_id")]
    pub area: Bson,
    pub count: i64,
}

impl InterestCount {
    /// Plain-text form of the group key: strings unquoted, `null` for missing values.
    pub fn label(&self) -> String {
        match &self.area {
            Bson::String(s) => s.clone(),
            Bson::Null | Bson::Undefined => "null".to_string(),
            Bson::Int32(n) => n.to_string(),
            Bson::Int64(n) => n.to_string(),
            Bson::Double(n) => n.to_string(),
            Bson::Boolean(b) => b.to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserReport {
    pub total_users: u64,
    pub interests: Vec<InterestCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(area: Bson) -> InterestCount {
        InterestCount { area, count: 1 }
    }

    #[test]
    fn labels_are_plain_text() {
        assert_eq!(row(Bson::String("music".into())).label(), "music");
        assert_eq!(row(Bson::Null).label(), "null");
        assert_eq!(row(Bson::Int32(42)).label(), "42");
        assert_eq!(row(Bson::Boolean(true)).label(), "true");
    }
}
