use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::questions::models::Question;
use crate::shared::pagination::{clamp_page, default_page, Page};
use crate::shared::validation::{deserialize_lenient_i32, validate_not_blank};

/// Response DTO for question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Request DTO for creating a question
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(
        length(min = 1, message = "Question is required"),
        custom(function = "validate_not_blank")
    )]
    pub question: String,

    #[validate(
        length(min = 1, message = "Answer is required"),
        custom(function = "validate_not_blank")
    )]
    pub answer: String,

    /// Category id; numeric strings such as `"1"` are accepted
    #[serde(deserialize_with = "deserialize_lenient_i32")]
    pub category: i32,

    /// Difficulty (1-5); numeric strings such as `"3"` are accepted
    #[serde(deserialize_with = "deserialize_lenient_i32")]
    pub difficulty: i32,
}

/// Request DTO for searching questions
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    /// Case-insensitive substring of the question text
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Query params for the search endpoint
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Category the client is currently showing, echoed back
    pub category: Option<i32>,
}

impl SearchQuery {
    pub fn page(&self) -> usize {
        clamp_page(self.page)
    }
}

/// Response body shared by the question listing endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    /// Matching questions before pagination
    pub total_questions: usize,
    /// Questions on this page
    pub count: usize,
    pub current_category: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategoryResponseDto>>,
}

impl QuestionListResponseDto {
    pub fn from_page(page: Page<QuestionResponseDto>, current_category: Option<i32>) -> Self {
        Self {
            success: true,
            count: page.items.len(),
            total_questions: page.total,
            questions: page.items,
            current_category,
            categories: None,
        }
    }

    pub fn with_categories(mut self, categories: Vec<CategoryResponseDto>) -> Self {
        self.categories = Some(categories);
        self
    }
}

/// Response body for `POST /questions/create`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedQuestionResponseDto {
    pub success: bool,
    pub question: QuestionResponseDto,
    /// Id assigned to the new question
    pub created: i32,
}

/// Response body for `DELETE /questions/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedQuestionResponseDto {
    pub success: bool,
    pub deleted: i32,
    /// Questions left in the store
    pub total_questions: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dto_accepts_numeric_strings() {
        let dto: CreateQuestionDto = serde_json::from_value(serde_json::json!({
            "question": "What is my nationality",
            "answer": "Ugandan",
            "category": "1",
            "difficulty": 1
        }))
        .unwrap();

        assert_eq!(dto.category, 1);
        assert_eq!(dto.difficulty, 1);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_dto_rejects_non_integer_difficulty() {
        let result = serde_json::from_value::<CreateQuestionDto>(serde_json::json!({
            "question": "What is my sex",
            "answer": "male",
            "category": "1",
            "difficulty": "should integer"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_dto_rejects_blank_text() {
        let dto = CreateQuestionDto {
            question: "   ".to_string(),
            answer: "x".to_string(),
            category: 1,
            difficulty: 1,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_search_dto_uses_camel_case_term() {
        let dto: SearchQuestionsDto =
            serde_json::from_value(serde_json::json!({"searchTerm": "age"})).unwrap();
        assert_eq!(dto.search_term, "age");
    }

    #[test]
    fn test_list_response_counts() {
        let page = Page {
            items: vec![QuestionResponseDto {
                id: 1,
                question: "q".to_string(),
                answer: "a".to_string(),
                category: 1,
                difficulty: 2,
            }],
            total: 11,
        };
        let dto = QuestionListResponseDto::from_page(page, Some(1));
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["total_questions"], 11);
        assert_eq!(value["current_category"], 1);
        assert!(value.get("categories").is_none());
    }
}
