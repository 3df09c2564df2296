use std::collections::HashSet;
use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Get the next quiz question
///
/// Returns a random question from the requested category (or from all
/// categories) that is not listed in `previous_questions`. `question` is
/// `null` once the quiz is complete.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, or null when complete", body = QuizResponseDto),
        (status = 400, description = "Malformed request", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn play_quiz(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<QuizRequestDto>,
) -> Result<Json<QuizResponseDto>> {
    let previous: HashSet<i32> = dto.previous_questions.iter().copied().collect();
    let selection = service.next_question(dto.scope(), &previous).await?;

    Ok(Json(QuizResponseDto {
        success: true,
        question: selection.question,
        remaining_questions: selection.remaining,
    }))
}
