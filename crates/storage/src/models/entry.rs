use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// A single leaderboard submission.
///
/// Both fields hold whatever JSON the client sent. A missing field is stored
/// as `null` (see `SubmitScoreRequest`); nothing is validated.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Entry {
    #[schema(value_type = Option<String>, example = "Alice")]
    pub name: Value,
    #[schema(value_type = Option<f64>, example = 10)]
    pub score: Value,
}

impl Entry {
    pub fn new(name: impl Into<Value>, score: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            score: score.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_name_before_score() {
        let entry = Entry::new("Alice", 10);
        let encoded = serde_json::to_string(&entry).unwrap();
        assert_eq!(encoded, r#"{"name":"Alice","score":10}"#);
    }
}
