use crate::db;
use crate::helpers::{JsonResponse, StorageClient};
use crate::models;
use crate::views;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

// Removes the external binary first, then the local record. A partial
// failure between the two steps is not reconciled.
#[tracing::instrument(name = "Delete PDF of a user.", skip_all)]
#[delete("/{id}")]
pub async fn item(
    user: web::ReqData<Arc<models::User>>,
    path: web::Path<(Uuid,)>,
    pg_pool: web::Data<PgPool>,
    storage: web::Data<StorageClient>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    let pdf = db::pdf::fetch(pg_pool.get_ref(), id, user.id)
        .await
        .map_err(|_err| JsonResponse::<views::PdfView>::build().internal_server_error(""))?
        .ok_or_else(|| JsonResponse::<views::PdfView>::build().not_found("PDF not found"))?;

    storage
        .delete(&pdf.storage_id)
        .await
        .map_err(|err| JsonResponse::<views::PdfView>::build().internal_server_error(err))?;

    db::pdf::delete(pg_pool.get_ref(), pdf.id, user.id)
        .await
        .map_err(|_err| JsonResponse::<views::PdfView>::build().internal_server_error(""))
        .and_then(|deleted| match deleted {
            true => Ok(JsonResponse::<views::PdfView>::build().ok("PDF deleted successfully")),
            false => Err(JsonResponse::<views::PdfView>::build().not_found("PDF not found")),
        })
}
