use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

// Listing cap, matching the client's history panel.
pub const CHAT_LIST_LIMIT: i64 = 50;

#[tracing::instrument(name = "List chats.", skip_all)]
#[get("")]
pub async fn list(
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::chat::fetch_by_user(pg_pool.get_ref(), user.id, CHAT_LIST_LIMIT)
        .await
        .map(|chats| JsonResponse::build().set_list(chats).ok("OK"))
        .map_err(|_err| JsonResponse::<models::Chat>::build().internal_server_error(""))
}

#[tracing::instrument(name = "Get one chat.", skip_all)]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    let chat = db::chat::fetch(pg_pool.get_ref(), id, user.id)
        .await
        .map_err(|_err| JsonResponse::<views::ChatView>::build().internal_server_error(""))?
        .ok_or_else(|| JsonResponse::<views::ChatView>::build().not_found("Chat not found"))?;

    let pdf = match chat.pdf_id {
        Some(pdf_id) => db::pdf::fetch(pg_pool.get_ref(), pdf_id, user.id)
            .await
            .map_err(|_err| JsonResponse::<views::ChatView>::build().internal_server_error(""))?,
        None => None,
    };

    Ok(JsonResponse::build()
        .set_item(views::ChatView::from_parts(chat, pdf))
        .ok("OK"))
}
