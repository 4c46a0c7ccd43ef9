use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use chrono::Utc;
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub(crate) const AUTO_TITLE_LIMIT: usize = 50;

#[tracing::instrument(name = "Append message to chat.", skip_all)]
#[post("/{id}/messages")]
pub async fn add(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::MessageForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Chat>::build().form_error(errors.to_string()));
    }

    let (id,) = path.into_inner();
    let chat = db::chat::fetch(pg_pool.get_ref(), id, user.id)
        .await
        .map_err(|_err| JsonResponse::<models::Chat>::build().internal_server_error(""))?
        .ok_or_else(|| JsonResponse::<models::Chat>::build().not_found("Chat not found"))?;

    let mut messages = chat.message_list();
    messages.push(models::ChatMessage {
        role: form.role,
        content: form.content.clone(),
        timestamp: Utc::now(),
    });

    // The title is derived once, from the first student message, and only
    // while the chat still carries the default title.
    let title = if chat.title == models::DEFAULT_CHAT_TITLE
        && form.role == models::MessageRole::User
        && messages.len() == 1
    {
        auto_title(&form.content)
    } else {
        chat.title.clone()
    };

    let messages = serde_json::to_value(&messages)
        .map_err(|_err| JsonResponse::<models::Chat>::build().internal_server_error(""))?;

    db::chat::append(pg_pool.get_ref(), chat.id, user.id, &messages, &title)
        .await
        .map_err(|_err| JsonResponse::<models::Chat>::build().internal_server_error(""))?
        .ok_or_else(|| JsonResponse::<models::Chat>::build().not_found("Chat not found"))
        .map(|chat| JsonResponse::build().set_item(chat).ok("OK"))
}

fn auto_title(content: &str) -> String {
    let truncated: String = content.chars().take(AUTO_TITLE_LIMIT).collect();
    if content.chars().count() > AUTO_TITLE_LIMIT {
        format!("{truncated}...")
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_message_becomes_title_verbatim() {
        assert_eq!(auto_title("What is photosynthesis?"), "What is photosynthesis?");
    }

    #[test]
    fn exactly_fifty_characters_gets_no_ellipsis() {
        let content = "a".repeat(50);
        assert_eq!(auto_title(&content), content);
    }

    #[test]
    fn long_message_is_truncated_with_ellipsis() {
        let content = "b".repeat(60);
        let title = auto_title(&content);
        assert_eq!(title, format!("{}...", "b".repeat(50)));
    }

    #[test]
    fn truncation_respects_character_boundaries() {
        let content = "é".repeat(60);
        let title = auto_title(&content);
        assert_eq!(title.chars().count(), 53);
        assert!(title.ends_with("..."));
    }
}
