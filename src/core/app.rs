use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::AppConfig;
use crate::core::middleware;
use crate::features::categories::{routes as categories_routes, CategoryRepository, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionRepository, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};

/// Services shared by the HTTP handlers, built once at startup
pub struct AppServices {
    pub categories: Arc<CategoryService>,
    pub questions: Arc<QuestionService>,
    pub quizzes: Arc<QuizService>,
}

impl AppServices {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(Arc::clone(&categories))),
            questions: Arc::new(QuestionService::new(Arc::clone(&questions), categories)),
            quizzes: Arc::new(QuizService::new(questions)),
        }
    }
}

// Simple health check endpoint
async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Assemble the routing table and the HTTP middleware stack
pub fn build_router(
    services: AppServices,
    config: &AppConfig,
    openapi: utoipa::openapi::OpenApi,
) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(categories_routes::routes(services.categories))
        .merge(questions_routes::routes(services.questions))
        .merge(quizzes_routes::routes(services.quizzes))
        .route("/health", get(health_check))
        .fallback(middleware::not_found)
        // Must come after every route is registered
        .method_not_allowed_fallback(middleware::method_not_allowed)
        .layer(DefaultBodyLimit::max(config.max_request_body_size))
        .layer(middleware::cors_layer(config.cors_allowed_origins.clone()))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
