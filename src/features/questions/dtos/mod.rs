pub mod question_dto;

pub use question_dto::{
    CreateQuestionDto, CreatedQuestionResponseDto, DeletedQuestionResponseDto,
    QuestionListResponseDto, QuestionResponseDto, SearchQuery, SearchQuestionsDto,
};
