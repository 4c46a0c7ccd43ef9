use crate::models;
use chrono::{DateTime, Utc};
use serde_derive::Serialize;
use uuid::Uuid;

#[derive(Default, Debug, Clone, Serialize)]
pub struct PdfRef {
    pub id: Uuid,
    pub original_name: String,
}

// Single-chat view with the PDF reference resolved.
#[derive(Default, Debug, Clone, Serialize)]
pub struct ChatView {
    pub id: Uuid,
    pub title: String,
    pub language: String,
    pub messages: serde_json::Value,
    pub pdf: Option<PdfRef>,
    pub last_message_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl ChatView {
    pub fn from_parts(chat: models::Chat, pdf: Option<models::Pdf>) -> Self {
        ChatView {
            id: chat.id,
            title: chat.title,
            language: chat.language,
            messages: chat.messages,
            pdf: pdf.map(|pdf| PdfRef {
                id: pdf.id,
                original_name: pdf.original_name,
            }),
            last_message_at: chat.last_message_at,
            created_at: chat.created_at,
        }
    }
}
