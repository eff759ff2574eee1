use crate::state::AppState;
use axum::{routing::get, Router};

mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/trainings",
        get(handlers::list_trainings).post(handlers::create_training),
    )
}
