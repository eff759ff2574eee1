use crate::state::AppState;
use axum::{routing::get, Router};

mod dto;
pub mod handlers;

pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(handlers::list_students))
}
