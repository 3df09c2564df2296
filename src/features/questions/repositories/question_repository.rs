use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::questions::models::{NewQuestion, Question};

/// Storage for trivia questions.
///
/// Listings are ordered by id ascending so that page boundaries stay
/// stable between requests.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Question>>;

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case
    async fn search(&self, term: &str) -> Result<Vec<Question>>;

    /// First question whose text equals `text`, ignoring case. Callers pass
    /// trimmed text; stored text is trimmed on insert.
    async fn find_by_text(&self, text: &str) -> Result<Option<Question>>;

    async fn insert(&self, question: NewQuestion) -> Result<Question>;

    /// Returns false when no question has that id
    async fn delete_by_id(&self, id: i32) -> Result<bool>;

    async fn count(&self) -> Result<i64>;
}

/// Escapes LIKE wildcards so `term` is matched literally
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn list_all(&self) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions of category {}: {:?}", category_id, e);
            AppError::Database(e)
        })
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>> {
        let pattern = format!("%{}%", escape_like(term));

        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search questions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_text(&self, text: &str) -> Result<Option<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE LOWER(question) = LOWER($1)
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(text)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up question by text: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(question.question)
        .bind(question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert question: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete question {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count questions: {:?}", e);
                AppError::Database(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("title"), "title");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\dir"), "c:\\\\dir");
    }
}
