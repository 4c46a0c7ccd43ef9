use crate::models;
use serde_derive::Serialize;
use uuid::Uuid;

#[derive(Default, Debug, Clone, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<&models::User> for UserView {
    fn from(user: &models::User) -> Self {
        UserView {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
        }
    }
}
