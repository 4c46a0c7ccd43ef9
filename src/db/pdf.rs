use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

#[tracing::instrument(name = "Fetch PDF of a user.", skip(pool))]
pub async fn fetch(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<models::Pdf>, sqlx::Error> {
    sqlx::query_as::<_, models::Pdf>(r#"SELECT * FROM pdfs WHERE id = $1 AND user_id = $2"#)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch PDF, error: {:?}", err);
            err
        })
}

#[tracing::instrument(name = "Fetch PDFs by user id.", skip(pool))]
pub async fn fetch_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<models::Pdf>, sqlx::Error> {
    sqlx::query_as::<_, models::Pdf>(
        r#"
        SELECT *
        FROM pdfs
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch PDFs, error: {:?}", err);
        err
    })
}

pub async fn insert(pool: &PgPool, pdf: models::Pdf) -> Result<models::Pdf, sqlx::Error> {
    let query_span = tracing::info_span!("Saving uploaded PDF into the database");
    sqlx::query_as::<_, models::Pdf>(
        r#"
        INSERT INTO pdfs (id, user_id, filename, original_name, storage_id, text_content,
                          word_count, page_count, subject, tags, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(pdf.id)
    .bind(pdf.user_id)
    .bind(pdf.filename)
    .bind(pdf.original_name)
    .bind(pdf.storage_id)
    .bind(pdf.text_content)
    .bind(pdf.word_count)
    .bind(pdf.page_count)
    .bind(pdf.subject)
    .bind(pdf.tags)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert PDF, error: {:?}", err);
        err
    })
}

#[tracing::instrument(name = "Delete PDF of a user.", skip(pool))]
pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query(r#"DELETE FROM pdfs WHERE id = $1 AND user_id = $2"#)
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete PDF, error: {:?}", err);
            err
        })
}
