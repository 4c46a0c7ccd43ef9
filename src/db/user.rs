use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

#[tracing::instrument(name = "Fetch user by id.", skip(pool))]
pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<models::User>, sqlx::Error> {
    sqlx::query_as::<_, models::User>(r#"SELECT * FROM users WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch user, error: {:?}", err);
            err
        })
}

#[tracing::instrument(name = "Fetch user by email.", skip(pool))]
pub async fn fetch_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<models::User>, sqlx::Error> {
    sqlx::query_as::<_, models::User>(r#"SELECT * FROM users WHERE email = $1"#)
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch user, error: {:?}", err);
            err
        })
}

pub async fn insert(pool: &PgPool, user: models::User) -> Result<models::User, sqlx::Error> {
    let query_span = tracing::info_span!("Saving new user into the database");
    sqlx::query_as::<_, models::User>(
        r#"
        INSERT INTO users (id, email, name, password_hash, role, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(user.id)
    .bind(user.email)
    .bind(user.name)
    .bind(user.password_hash)
    .bind(user.role)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert user, error: {:?}", err);
        err
    })
}
