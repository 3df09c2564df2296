use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::repositories::CategoryRepository;
use crate::features::questions::dtos::{CreateQuestionDto, QuestionResponseDto};
use crate::features::questions::models::NewQuestion;
use crate::features::questions::repositories::QuestionRepository;
use crate::shared::constants::QUESTIONS_PER_PAGE;
use crate::shared::pagination::Page;

/// Service for question listing, search and maintenance
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl QuestionService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// One page of all questions, together with every category
    pub async fn list(
        &self,
        page: usize,
    ) -> Result<(Page<QuestionResponseDto>, Vec<CategoryResponseDto>)> {
        let categories = self.categories.list_all().await?;
        let questions = self.questions.list_all().await?;

        Ok((
            Page::from_collection(questions, page, QUESTIONS_PER_PAGE),
            categories.into_iter().map(Into::into).collect(),
        ))
    }

    /// One page of the questions in `category_id`.
    ///
    /// An unknown category is `NotFound`; a known category without
    /// questions yields an empty page.
    pub async fn list_by_category(
        &self,
        category_id: i32,
        page: usize,
    ) -> Result<Page<QuestionResponseDto>> {
        if self.categories.find_by_id(category_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Category {} not found",
                category_id
            )));
        }

        let questions = self.questions.list_by_category(category_id).await?;
        Ok(Page::from_collection(questions, page, QUESTIONS_PER_PAGE))
    }

    /// One page of the questions whose text contains `term`, ignoring case
    pub async fn search(&self, term: &str, page: usize) -> Result<Page<QuestionResponseDto>> {
        let questions = self.questions.search(term).await?;
        tracing::debug!("Search '{}' matched {} questions", term, questions.len());
        Ok(Page::from_collection(questions, page, QUESTIONS_PER_PAGE))
    }

    /// Store a new question.
    ///
    /// Rejected with `Conflict` when a question with the same text
    /// (trimmed, case-insensitive) already exists. Nothing is written on
    /// rejection.
    pub async fn create(&self, dto: CreateQuestionDto) -> Result<QuestionResponseDto> {
        let new_question = NewQuestion {
            question: dto.question.trim().to_string(),
            answer: dto.answer.trim().to_string(),
            category: dto.category,
            difficulty: dto.difficulty,
        };

        if self
            .categories
            .find_by_id(new_question.category)
            .await?
            .is_none()
        {
            return Err(AppError::Validation(format!(
                "Category {} does not exist",
                new_question.category
            )));
        }

        if let Some(existing) = self.questions.find_by_text(&new_question.question).await? {
            return Err(AppError::Conflict(format!(
                "'{}' already exists as question {}",
                new_question.question, existing.id
            )));
        }

        let question = self.questions.insert(new_question).await?;
        tracing::info!(
            "Question created: id={}, category={}",
            question.id,
            question.category
        );

        Ok(question.into())
    }

    /// Delete a question, returning how many questions remain
    pub async fn delete(&self, id: i32) -> Result<i64> {
        if !self.questions.delete_by_id(id).await? {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        tracing::info!("Question deleted: id={}", id);
        self.questions.count().await
    }
}
