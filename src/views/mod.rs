mod chat;
mod exercise;
mod pdf;
mod user;

pub use chat::*;
pub use exercise::*;
pub use pdf::*;
pub use user::*;
