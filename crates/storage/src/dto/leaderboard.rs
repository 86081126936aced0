use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::models::Entry;

pub const SCORE_SUBMITTED_MESSAGE: &str = "Score submitted!";

/// Body of `POST /submit`.
///
/// Any JSON object is accepted. `name` and `score` are taken as-is and
/// default to `null`; other keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, ToSchema)]
pub struct SubmitScoreRequest {
    #[schema(value_type = Option<String>, example = "Alice")]
    pub name: Value,
    #[schema(value_type = Option<f64>, example = 10)]
    pub score: Value,
}

impl From<Map<String, Value>> for SubmitScoreRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            name: body.remove("name").unwrap_or_default(),
            score: body.remove("score").unwrap_or_default(),
        }
    }
}

impl From<SubmitScoreRequest> for Entry {
    fn from(request: SubmitScoreRequest) -> Self {
        Self {
            name: request.name,
            score: request.score,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitScoreResponse {
    #[schema(example = "Score submitted!")]
    pub message: String,
}

impl SubmitScoreResponse {
    pub fn submitted() -> Self {
        Self {
            message: SCORE_SUBMITTED_MESSAGE.to_string(),
        }
    }
}
