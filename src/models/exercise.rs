use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Default, Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub pdf_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub subject: String,
    pub difficulty: String,
    // Question items as returned by the agent service, stored as JSONB.
    pub questions: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
