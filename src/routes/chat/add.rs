use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Create chat.", skip_all)]
#[post("")]
pub async fn item(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::ChatForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Chat>::build().form_error(errors.to_string()));
    }

    let form = form.into_inner();

    // A referenced PDF must belong to the same student.
    if let Some(pdf_id) = form.pdf_id {
        db::pdf::fetch(pg_pool.get_ref(), pdf_id, user.id)
            .await
            .map_err(|_err| JsonResponse::<models::Chat>::build().internal_server_error(""))?
            .ok_or_else(|| JsonResponse::<models::Chat>::build().not_found("PDF not found"))?;
    }

    db::chat::insert(pg_pool.get_ref(), form.into_chat(user.id))
        .await
        .map(|chat| {
            JsonResponse::build()
                .set_id(chat.id)
                .set_item(chat)
                .created("success")
        })
        .map_err(|_err| JsonResponse::<models::Chat>::build().internal_server_error("Failed to insert"))
}
