use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Delete chat of a user.", skip_all)]
#[delete("/{id}")]
pub async fn item(
    user: web::ReqData<Arc<models::User>>,
    path: web::Path<(Uuid,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    db::chat::delete(pg_pool.get_ref(), id, user.id)
        .await
        .map_err(|_err| JsonResponse::<models::Chat>::build().internal_server_error(""))
        .and_then(|deleted| match deleted {
            true => Ok(JsonResponse::<models::Chat>::build().ok("Chat deleted successfully")),
            false => Err(JsonResponse::<models::Chat>::build().not_found("Chat not found")),
        })
}
