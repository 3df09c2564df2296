use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::questions::dtos::{
    CreateQuestionDto, CreatedQuestionResponseDto, DeletedQuestionResponseDto,
    QuestionListResponseDto, SearchQuery, SearchQuestionsDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::pagination::PaginationQuery;
use crate::shared::types::ErrorResponse;

/// List questions, ten per page, with all categories
#[utoipa::path(
    get,
    path = "/questions",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionListResponseDto),
        (status = 400, description = "Invalid page", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<PaginationQuery>,
) -> Result<Json<QuestionListResponseDto>> {
    let (page, categories) = service.list(query.page()).await?;
    Ok(Json(
        QuestionListResponseDto::from_page(page, None).with_categories(categories),
    ))
}

/// List the questions of one category, ten per page
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category id"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Page of questions", body = QuestionListResponseDto),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_category_questions(
    State(service): State<Arc<QuestionService>>,
    AppPath(category_id): AppPath<i32>,
    AppQuery(query): AppQuery<PaginationQuery>,
) -> Result<Json<QuestionListResponseDto>> {
    let page = service.list_by_category(category_id, query.page()).await?;
    Ok(Json(QuestionListResponseDto::from_page(
        page,
        Some(category_id),
    )))
}

/// Search questions by a case-insensitive substring
#[utoipa::path(
    post,
    path = "/questions",
    params(SearchQuery),
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Page of matching questions", body = QuestionListResponseDto),
        (status = 400, description = "Missing or malformed searchTerm", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<SearchQuery>,
    AppJson(dto): AppJson<SearchQuestionsDto>,
) -> Result<Json<QuestionListResponseDto>> {
    let page = service.search(&dto.search_term, query.page()).await?;
    Ok(Json(QuestionListResponseDto::from_page(
        page,
        query.category,
    )))
}

/// Create a question
#[utoipa::path(
    post,
    path = "/questions/create",
    request_body = CreateQuestionDto,
    responses(
        (status = 201, description = "Question created", body = CreatedQuestionResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 422, description = "Question already exists", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<(StatusCode, Json<CreatedQuestionResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let question = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedQuestionResponseDto {
            success: true,
            created: question.id,
            question,
        }),
    ))
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeletedQuestionResponseDto),
        (status = 404, description = "Question not found", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<DeletedQuestionResponseDto>> {
    let total_questions = service.delete(id).await?;
    Ok(Json(DeletedQuestionResponseDto {
        success: true,
        deleted: id,
        total_questions,
    }))
}
