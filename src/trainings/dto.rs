use serde::Deserialize;

use super::repo::TrainingCategory;

/// Request body for creating a training session. The coach is always the
/// caller; a coach id in the body is an unknown field and rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTrainingRequest {
    pub title: String,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub category: TrainingCategory,
}
