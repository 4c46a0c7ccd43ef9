use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "List PDFs.", skip_all)]
#[get("")]
pub async fn list(
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::pdf::fetch_by_user(pg_pool.get_ref(), user.id)
        .await
        .map(|pdfs| {
            let pdfs = pdfs.into_iter().map(views::PdfView::from).collect();
            JsonResponse::build().set_list(pdfs).ok("OK")
        })
        .map_err(|_err| JsonResponse::<views::PdfView>::build().internal_server_error(""))
}

#[tracing::instrument(name = "Get one PDF.", skip_all)]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    db::pdf::fetch(pg_pool.get_ref(), id, user.id)
        .await
        .map_err(|_err| JsonResponse::<views::PdfView>::build().internal_server_error(""))?
        .ok_or_else(|| JsonResponse::<views::PdfView>::build().not_found("PDF not found"))
        .map(|pdf| {
            JsonResponse::build()
                .set_item(views::PdfView::from(pdf))
                .ok("OK")
        })
}
