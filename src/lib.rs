#[macro_use]
extern crate rocket;

pub mod contact;
pub mod directory;
pub mod error;
pub mod event_log;
pub mod export;
pub mod query;
pub mod session;
pub mod tools;
pub mod web;
