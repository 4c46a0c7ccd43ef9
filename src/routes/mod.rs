pub mod ai;
pub mod auth;
pub mod chat;
pub mod exercise;
pub mod health_checks;
pub mod pdf;

pub use health_checks::*;
