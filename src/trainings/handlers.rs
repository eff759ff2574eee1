use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument, warn};

use crate::{
    auth::{extractors::AuthUser, repo::Role},
    error::ApiError,
    state::AppState,
};

use super::{
    dto::CreateTrainingRequest,
    repo::{NewTraining, Training, TrainingWithCoach},
};

/// Weekly schedule, any authenticated member.
#[instrument(skip(state))]
pub async fn list_trainings(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
) -> Result<Json<Vec<TrainingWithCoach>>, ApiError> {
    let trainings = Training::list(&state.db).await?;
    Ok(Json(trainings))
}

/// Create a training session. Coaches only; the session is owned by the caller.
#[instrument(skip(state, payload))]
pub async fn create_training(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateTrainingRequest>,
) -> Result<(StatusCode, Json<Training>), ApiError> {
    if claims.role != Role::Coach {
        warn!(user_id = %claims.sub, "non-coach tried to create training");
        return Err(ApiError::Forbidden);
    }

    if !(0..=6).contains(&payload.day_of_week) {
        return Err(ApiError::Validation("day_of_week must be 0-6".into()));
    }

    let new = NewTraining {
        title: &payload.title,
        day_of_week: payload.day_of_week,
        start_time: &payload.start_time,
        end_time: &payload.end_time,
        category: payload.category,
        coach_id: claims.sub,
    };
    let training = Training::create(&state.db, &new).await?;

    info!(training_id = %training.id, coach_id = %claims.sub, "training created");
    Ok((StatusCode::CREATED, Json(training)))
}
