pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::questions::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/conversation", post(handlers::handle_conversation))
        .with_state(state)
}
