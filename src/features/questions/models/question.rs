use sqlx::FromRow;

/// Database model for question
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Category id. Not a foreign key; the service checks it on insert.
    pub category: i32,
    /// Expected to be 1-5, not enforced
    pub difficulty: i32,
}

/// A question that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}
