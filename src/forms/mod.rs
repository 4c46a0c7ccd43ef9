pub mod ai;
pub mod chat;
pub mod exercise;
pub mod user;

pub use ai::*;
pub use chat::*;
pub use exercise::*;
pub use user::*;
