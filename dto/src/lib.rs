pub mod event;
pub mod member;
