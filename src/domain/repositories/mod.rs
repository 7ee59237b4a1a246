pub mod image_repository;
pub mod user_repository;
