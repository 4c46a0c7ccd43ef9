use crate::models;
use serde_json::Value;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

#[tracing::instrument(name = "Fetch chat of a user.", skip(pool))]
pub async fn fetch(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<models::Chat>, sqlx::Error> {
    sqlx::query_as::<_, models::Chat>(r#"SELECT * FROM chats WHERE id = $1 AND user_id = $2"#)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch chat, error: {:?}", err);
            err
        })
}

#[tracing::instrument(name = "Fetch chats by user id.", skip(pool))]
pub async fn fetch_by_user(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<models::Chat>, sqlx::Error> {
    sqlx::query_as::<_, models::Chat>(
        r#"
        SELECT *
        FROM chats
        WHERE user_id = $1
        ORDER BY last_message_at DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch chats, error: {:?}", err);
        err
    })
}

pub async fn insert(pool: &PgPool, chat: models::Chat) -> Result<models::Chat, sqlx::Error> {
    let query_span = tracing::info_span!("Saving new chat into the database");
    sqlx::query_as::<_, models::Chat>(
        r#"
        INSERT INTO chats (id, user_id, pdf_id, title, language, messages,
                           last_message_at, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6,
                NOW() at time zone 'utc', NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(chat.id)
    .bind(chat.user_id)
    .bind(chat.pdf_id)
    .bind(chat.title)
    .bind(chat.language)
    .bind(chat.messages)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert chat, error: {:?}", err);
        err
    })
}

// Persists the appended message list together with the (possibly re-derived)
// title and bumps last_message_at in one statement.
#[tracing::instrument(name = "Append messages to chat.", skip(pool, messages))]
pub async fn append(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    messages: &Value,
    title: &str,
) -> Result<Option<models::Chat>, sqlx::Error> {
    sqlx::query_as::<_, models::Chat>(
        r#"
        UPDATE chats
        SET
            messages = $3,
            title = $4,
            last_message_at = NOW() at time zone 'utc',
            updated_at = NOW() at time zone 'utc'
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(messages)
    .bind(title)
    .fetch_optional(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to append to chat, error: {:?}", err);
        err
    })
}

#[tracing::instrument(name = "Rename chat.", skip(pool))]
pub async fn update_title(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    title: &str,
) -> Result<Option<models::Chat>, sqlx::Error> {
    sqlx::query_as::<_, models::Chat>(
        r#"
        UPDATE chats
        SET title = $3, updated_at = NOW() at time zone 'utc'
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(title)
    .fetch_optional(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to rename chat, error: {:?}", err);
        err
    })
}

#[tracing::instrument(name = "Delete chat of a user.", skip(pool))]
pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query(r#"DELETE FROM chats WHERE id = $1 AND user_id = $2"#)
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete chat, error: {:?}", err);
            err
        })
}
