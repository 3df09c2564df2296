/// Fixed page size for every question listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Quiz category `type` sent by the client's "ALL" button
pub const QUIZ_ALL_CATEGORIES_TYPE: &str = "click";
