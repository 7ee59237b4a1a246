pub mod register_user_usecase;
pub mod session_usecase;
