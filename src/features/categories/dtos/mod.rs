pub mod category_dto;

pub use category_dto::{CategoryDetailResponseDto, CategoryListResponseDto, CategoryResponseDto};
