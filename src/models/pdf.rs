use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Default, Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pdf {
    pub id: Uuid,
    pub user_id: Uuid,
    pub filename: String,
    pub original_name: String,
    // Identifier of the binary in the external object store.
    pub storage_id: String,
    pub text_content: String,
    pub word_count: i32,
    pub page_count: i32,
    pub subject: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Display for Pdf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} pages, {} words)",
            self.original_name, self.page_count, self.word_count
        )
    }
}
