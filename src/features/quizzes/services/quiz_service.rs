use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;

use crate::core::error::Result;
use crate::features::questions::dtos::QuestionResponseDto;
use crate::features::questions::models::Question;
use crate::features::questions::repositories::QuestionRepository;

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i32),
}

/// Outcome of one quiz round
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSelection {
    /// `None` when the quiz is complete
    pub question: Option<QuestionResponseDto>,
    pub remaining: usize,
}

/// Picks uniformly among the candidates not in `previous`.
///
/// Returns the pick and how many eligible candidates are left after it.
pub fn select_next<R: Rng>(
    candidates: Vec<Question>,
    previous: &HashSet<i32>,
    rng: &mut R,
) -> (Option<Question>, usize) {
    let mut eligible: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    if eligible.is_empty() {
        return (None, 0);
    }

    let index = rng.random_range(0..eligible.len());
    let picked = eligible.swap_remove(index);
    (Some(picked), eligible.len())
}

pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuizService {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    pub async fn next_question(
        &self,
        scope: QuizScope,
        previous: &HashSet<i32>,
    ) -> Result<QuizSelection> {
        let candidates = match scope {
            QuizScope::All => self.questions.list_all().await?,
            QuizScope::Category(category_id) => {
                self.questions.list_by_category(category_id).await?
            }
        };

        let (question, remaining) = select_next(candidates, previous, &mut rand::rng());

        match &question {
            Some(q) => tracing::debug!("Quiz served question {} ({:?})", q.id, scope),
            None => tracing::debug!("Quiz complete for {:?}", scope),
        }

        Ok(QuizSelection {
            question: question.map(Into::into),
            remaining,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryTriviaStore;
    use rand::{rngs::StdRng, SeedableRng};

    fn question(id: i32, category: i32) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: "answer".to_string(),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn test_select_never_returns_previous() {
        let mut rng = StdRng::seed_from_u64(7);
        let previous: HashSet<i32> = [1, 3, 5].into_iter().collect();

        for _ in 0..50 {
            let candidates = (1..=6).map(|id| question(id, 1)).collect();
            let (picked, remaining) = select_next(candidates, &previous, &mut rng);
            let picked = picked.unwrap();
            assert!(!previous.contains(&picked.id));
            assert_eq!(remaining, 2);
        }
    }

    #[test]
    fn test_select_exhausted() {
        let mut rng = StdRng::seed_from_u64(1);
        let previous: HashSet<i32> = [1, 2].into_iter().collect();
        let candidates = vec![question(1, 1), question(2, 1)];

        assert_eq!(select_next(candidates, &previous, &mut rng), (None, 0));
        assert_eq!(select_next(Vec::new(), &HashSet::new(), &mut rng), (None, 0));
    }

    #[test]
    fn test_select_reaches_every_candidate() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let candidates = (1..=4).map(|id| question(id, 1)).collect();
            let (picked, _) = select_next(candidates, &HashSet::new(), &mut rng);
            seen.insert(picked.unwrap().id);
        }
        assert_eq!(seen.len(), 4);
    }

    #[tokio::test]
    async fn test_quiz_plays_through_a_category() {
        let store = Arc::new(InMemoryTriviaStore::with_default_categories());
        store.add_question("Science one", "a", 1, 1);
        store.add_question("Art one", "a", 2, 1);
        store.add_question("Science two", "a", 1, 1);
        let service = QuizService::new(store);

        let mut previous = HashSet::new();
        for expected_remaining in [1, 0] {
            let selection = service
                .next_question(QuizScope::Category(1), &previous)
                .await
                .unwrap();
            let question = selection.question.unwrap();
            assert_eq!(question.category, 1);
            assert_eq!(selection.remaining, expected_remaining);
            assert!(previous.insert(question.id));
        }

        let done = service
            .next_question(QuizScope::Category(1), &previous)
            .await
            .unwrap();
        assert_eq!(done.question, None);
    }

    #[tokio::test]
    async fn test_quiz_all_categories() {
        let store = Arc::new(InMemoryTriviaStore::with_default_categories());
        store.add_question("Science one", "a", 1, 1);
        store.add_question("Art one", "a", 2, 1);
        let service = QuizService::new(store);

        let previous: HashSet<i32> = [1].into_iter().collect();
        let selection = service
            .next_question(QuizScope::All, &previous)
            .await
            .unwrap();
        assert_eq!(selection.question.unwrap().id, 2);
    }
}
