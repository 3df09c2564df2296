use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::questions::handlers;
use crate::features::questions::services::QuestionService;

/// Create routes for the questions feature
pub fn routes(service: Arc<QuestionService>) -> Router {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::search_questions),
        )
        .route("/questions/create", post(handlers::create_question))
        .route("/questions/{id}", delete(handlers::delete_question))
        // Older clients post deletes to this path
        .route("/questions/{id}/delete", delete(handlers::delete_question))
        .route(
            "/categories/{id}/questions",
            get(handlers::list_category_questions),
        )
        .with_state(service)
}
