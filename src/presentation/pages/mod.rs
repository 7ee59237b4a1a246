pub mod current_user;
pub mod join_page;
