use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::quizzes::handlers;
use crate::features::quizzes::services::QuizService;

/// Create routes for the quizzes feature
pub fn routes(service: Arc<QuizService>) -> Router {
    Router::new()
        .route("/quizzes", post(handlers::play_quiz))
        .with_state(service)
}
