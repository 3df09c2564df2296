//! Trivia questions: listing, category listing, search, create and delete.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Paginated list of all questions plus categories |
//! | GET | `/categories/{id}/questions?page=N` | Paginated list of one category |
//! | POST | `/questions` | Paginated case-insensitive search on `searchTerm` |
//! | POST | `/questions/create` | Create a question |
//! | DELETE | `/questions/{id}` | Delete a question |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgQuestionRepository, QuestionRepository};
pub use services::QuestionService;
