use crate::models;
use chrono::{DateTime, Utc};
use serde_derive::Serialize;
use uuid::Uuid;

// Listing/detail view; the extracted text stays server-side.
#[derive(Default, Debug, Clone, Serialize)]
pub struct PdfView {
    pub id: Uuid,
    pub filename: String,
    pub original_name: String,
    pub word_count: i32,
    pub page_count: i32,
    pub subject: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<models::Pdf> for PdfView {
    fn from(pdf: models::Pdf) -> Self {
        PdfView {
            id: pdf.id,
            filename: pdf.filename,
            original_name: pdf.original_name,
            word_count: pdf.word_count,
            page_count: pdf.page_count,
            subject: pdf.subject,
            tags: pdf.tags,
            created_at: pdf.created_at,
        }
    }
}
