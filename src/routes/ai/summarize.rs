use crate::db;
use crate::forms;
use crate::helpers::{AgentClient, JsonResponse};
use crate::models;
use actix_web::{post, web, HttpResponse, Responder, Result};
use serde_json::Value;
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Summarize a PDF.", skip_all)]
#[post("/summarize-pdf")]
pub async fn handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::SummarizeForm>,
    agent: web::Data<AgentClient>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let pdf = db::pdf::fetch(pg_pool.get_ref(), form.pdf_id, user.id)
        .await
        .map_err(|_err| JsonResponse::<Value>::build().internal_server_error(""))?
        .ok_or_else(|| JsonResponse::<Value>::build().not_found("PDF not found"))?;

    agent
        .summarize(&pdf.text_content, &form.language, user.id)
        .await
        .map(|payload| HttpResponse::Ok().json(payload))
        .map_err(|err| JsonResponse::<Value>::build().internal_server_error(err))
}
