use crate::models;
use serde_derive::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

pub(crate) fn default_language() -> String {
    models::DEFAULT_CHAT_LANGUAGE.to_string()
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionForm {
    #[validate(min_length = 1)]
    pub question: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PdfQueryForm {
    #[validate(min_length = 1)]
    pub question: String,
    pub pdf_id: Uuid,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeForm {
    pub pdf_id: Uuid,
    #[serde(default = "default_language")]
    pub language: String,
}
