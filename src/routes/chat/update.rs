use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{patch, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "Rename chat.", skip_all)]
#[patch("/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::RenameForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Chat>::build().form_error(errors.to_string()));
    }

    let (id,) = path.into_inner();
    db::chat::update_title(pg_pool.get_ref(), id, user.id, &form.title)
        .await
        .map_err(|_err| JsonResponse::<models::Chat>::build().internal_server_error(""))?
        .ok_or_else(|| JsonResponse::<models::Chat>::build().not_found("Chat not found"))
        .map(|chat| JsonResponse::build().set_item(chat).ok("success"))
}
