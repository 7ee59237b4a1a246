pub mod messages;
pub mod pages;
