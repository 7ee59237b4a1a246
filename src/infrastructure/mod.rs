pub mod config;
pub mod http_api;
pub mod image_repository;
pub mod user_repository;
