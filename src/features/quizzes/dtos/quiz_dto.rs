use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionResponseDto;
use crate::features::quizzes::services::QuizScope;
use crate::shared::constants::QUIZ_ALL_CATEGORIES_TYPE;
use crate::shared::validation::deserialize_lenient_i32;

/// Category the quiz is played in
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    /// Category id; 0 means all categories
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    pub id: i32,

    /// Category label, or `"click"` for all categories
    #[serde(default, rename = "type")]
    #[schema(value_type = Option<Object>)]
    pub kind: Option<serde_json::Value>,
}

impl QuizCategoryDto {
    pub fn scope(&self) -> QuizScope {
        let all_requested = self
            .kind
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .is_some_and(|kind| kind.eq_ignore_ascii_case(QUIZ_ALL_CATEGORIES_TYPE));

        if all_requested || self.id <= 0 {
            QuizScope::All
        } else {
            QuizScope::Category(self.id)
        }
    }
}

/// Request DTO for the next quiz question
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    /// Ids of the questions already served in this quiz
    #[serde(default)]
    pub previous_questions: Vec<i32>,

    #[serde(default)]
    pub quiz_category: Option<QuizCategoryDto>,
}

impl QuizRequestDto {
    pub fn scope(&self) -> QuizScope {
        self.quiz_category
            .as_ref()
            .map_or(QuizScope::All, QuizCategoryDto::scope)
    }
}

/// Response body for `POST /quizzes`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    pub success: bool,
    /// `null` once every eligible question has been served
    pub question: Option<QuestionResponseDto>,
    /// Eligible questions still unserved after this one
    pub remaining_questions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scope_of(body: serde_json::Value) -> QuizScope {
        serde_json::from_value::<QuizRequestDto>(body).unwrap().scope()
    }

    #[test]
    fn test_category_scope() {
        let scope = scope_of(json!({
            "previous_questions": [],
            "quiz_category": {"type": 1, "id": 2}
        }));
        assert_eq!(scope, QuizScope::Category(2));

        let scope = scope_of(json!({"quiz_category": {"type": "Science", "id": "1"}}));
        assert_eq!(scope, QuizScope::Category(1));
    }

    #[test]
    fn test_all_scope() {
        assert_eq!(
            scope_of(json!({"quiz_category": {"type": "click", "id": 2}})),
            QuizScope::All
        );
        assert_eq!(
            scope_of(json!({"quiz_category": {"type": "Science", "id": 0}})),
            QuizScope::All
        );
        assert_eq!(scope_of(json!({"quiz_category": null})), QuizScope::All);
        assert_eq!(scope_of(json!({})), QuizScope::All);
    }

    #[test]
    fn test_previous_questions_default_to_empty() {
        let dto: QuizRequestDto = serde_json::from_value(json!({})).unwrap();
        assert!(dto.previous_questions.is_empty());
    }
}
