use crate::models;
use serde_derive::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

pub const DEFAULT_USER_ROLE: &str = "user";

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(min_length = 3)]
    #[validate(max_length = 254)]
    pub email: String,
    #[validate(min_length = 6)]
    pub password: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub name: String,
}

impl RegisterForm {
    pub fn into_user(self, password_hash: String) -> models::User {
        models::User {
            id: Uuid::new_v4(),
            email: self.email.trim().to_lowercase(),
            name: self.name,
            password_hash,
            role: DEFAULT_USER_ROLE.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(min_length = 1)]
    pub email: String,
    #[validate(min_length = 1)]
    pub password: String,
}
