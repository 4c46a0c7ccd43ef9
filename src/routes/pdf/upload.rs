use crate::configuration::Settings;
use crate::db;
use crate::helpers;
use crate::helpers::{JsonResponse, StorageClient};
use crate::models;
use crate::views;
use actix_multipart::Multipart;
use actix_web::{post, web, Responder, Result};
use futures_util::TryStreamExt;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

const UPLOAD_FIELD: &str = "pdf";
const FALLBACK_FILENAME: &str = "document.pdf";

// Parse, push the binary to the object store, then persist the record.
// A failure at any step aborts the request; an already-stored binary is
// not compensated when the insert fails afterwards.
#[tracing::instrument(name = "Upload PDF.", skip_all)]
#[post("/upload")]
pub async fn handler(
    mut payload: Multipart,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
    storage: web::Data<StorageClient>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let mut file_bytes: Vec<u8> = Vec::new();
    let mut original_name: Option<String> = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|err| JsonResponse::<views::PdfView>::build().bad_request(err.to_string()))?
    {
        if field.name() != UPLOAD_FIELD {
            continue;
        }

        original_name = field
            .content_disposition()
            .get_filename()
            .map(|name| name.to_string());

        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|err| JsonResponse::<views::PdfView>::build().bad_request(err.to_string()))?
        {
            if file_bytes.len() + chunk.len() > settings.max_upload_size {
                return Err(JsonResponse::<views::PdfView>::build()
                    .bad_request("PDF exceeds the upload size limit"));
            }
            file_bytes.extend_from_slice(&chunk);
        }
    }

    if file_bytes.is_empty() {
        return Err(JsonResponse::<views::PdfView>::build().bad_request("No PDF file uploaded"));
    }

    let parsed = helpers::pdf::parse(&file_bytes).map_err(|err| {
        tracing::debug!("Rejecting upload: {}", err);
        JsonResponse::<views::PdfView>::build().bad_request(err.to_string())
    })?;

    let original_name = original_name.unwrap_or_else(|| FALLBACK_FILENAME.to_string());
    let storage_id = storage
        .upload(&original_name, file_bytes)
        .await
        .map_err(|err| JsonResponse::<views::PdfView>::build().internal_server_error(err))?;

    let pdf = models::Pdf {
        id: Uuid::new_v4(),
        user_id: user.id,
        filename: storage_id.clone(),
        original_name,
        storage_id,
        text_content: parsed.text,
        word_count: parsed.word_count,
        page_count: parsed.page_count,
        subject: None,
        tags: Vec::new(),
        ..Default::default()
    };

    db::pdf::insert(pg_pool.get_ref(), pdf)
        .await
        .map(|pdf| {
            JsonResponse::build()
                .set_id(pdf.id)
                .set_item(views::PdfView::from(pdf))
                .created("PDF uploaded successfully")
        })
        .map_err(|_err| {
            JsonResponse::<views::PdfView>::build().internal_server_error("Failed to insert")
        })
}
