use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Response DTO for category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            kind: c.kind,
        }
    }
}

/// Response body for `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponseDto {
    pub success: bool,
    pub categories: Vec<CategoryResponseDto>,
    pub count: usize,
}

impl CategoryListResponseDto {
    pub fn new(categories: Vec<CategoryResponseDto>) -> Self {
        Self {
            success: true,
            count: categories.len(),
            categories,
        }
    }
}

/// Response body for `GET /categories/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDetailResponseDto {
    pub success: bool,
    pub category: CategoryResponseDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_label_as_type() {
        let dto = CategoryResponseDto::from(Category {
            id: 1,
            kind: "Science".to_string(),
        });
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value, serde_json::json!({"id": 1, "type": "Science"}));
    }
}
