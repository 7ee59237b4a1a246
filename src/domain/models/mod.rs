pub mod join_form;
pub mod join_status;
pub mod session;
pub mod user;
