use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::categories::dtos::{CategoryDetailResponseDto, CategoryListResponseDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ErrorResponse;

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "List of categories", body = CategoryListResponseDto),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoryListResponseDto>> {
    let categories = service.list().await?;
    Ok(Json(CategoryListResponseDto::new(categories)))
}

/// Get category by id
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryDetailResponseDto),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<CategoryDetailResponseDto>> {
    let category = service.get(id).await?;
    Ok(Json(CategoryDetailResponseDto {
        success: true,
        category,
    }))
}
