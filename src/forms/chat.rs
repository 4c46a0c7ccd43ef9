use crate::models;
use serde_derive::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatForm {
    #[validate(max_length = 200)]
    pub title: Option<String>,
    pub pdf_id: Option<Uuid>,
    #[validate(max_length = 50)]
    pub language: Option<String>,
}

impl ChatForm {
    pub fn into_chat(self, user_id: Uuid) -> models::Chat {
        models::Chat {
            id: Uuid::new_v4(),
            user_id,
            pdf_id: self.pdf_id,
            title: self
                .title
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| models::DEFAULT_CHAT_TITLE.to_string()),
            language: self
                .language
                .filter(|language| !language.trim().is_empty())
                .unwrap_or_else(|| models::DEFAULT_CHAT_LANGUAGE.to_string()),
            messages: serde_json::Value::Array(vec![]),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MessageForm {
    pub role: models::MessageRole,
    #[validate(min_length = 1)]
    pub content: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RenameForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_fields_are_missing() {
        let user_id = Uuid::new_v4();
        let chat = ChatForm::default().into_chat(user_id);

        assert_eq!(chat.title, models::DEFAULT_CHAT_TITLE);
        assert_eq!(chat.language, models::DEFAULT_CHAT_LANGUAGE);
        assert_eq!(chat.user_id, user_id);
        assert!(chat.pdf_id.is_none());
        assert!(chat.message_list().is_empty());
    }

    #[test]
    fn blank_title_falls_back_to_default() {
        let form = ChatForm {
            title: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            form.into_chat(Uuid::new_v4()).title,
            models::DEFAULT_CHAT_TITLE
        );
    }

    #[test]
    fn empty_message_content_is_invalid() {
        let form = MessageForm {
            role: models::MessageRole::User,
            content: String::new(),
        };
        assert!(form.validate().is_err());
    }
}
