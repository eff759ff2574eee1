use axum::{extract::State, Json};
use tracing::instrument;

use crate::{
    auth::{
        extractors::AuthUser,
        repo::{Role, User},
    },
    error::ApiError,
    state::AppState,
};

use super::dto::StudentSummary;

/// Student roster: every STUDENT-role user, public fields only.
#[instrument(skip(state))]
pub async fn list_students(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
) -> Result<Json<Vec<StudentSummary>>, ApiError> {
    let users = User::list_by_role(&state.db, Role::Student).await?;
    let students = users.into_iter().map(StudentSummary::from).collect();
    Ok(Json(students))
}
