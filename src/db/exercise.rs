use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

#[tracing::instrument(name = "Fetch exercise of a user.", skip(pool))]
pub async fn fetch(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<models::Exercise>, sqlx::Error> {
    sqlx::query_as::<_, models::Exercise>(
        r#"SELECT * FROM exercises WHERE id = $1 AND user_id = $2"#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch exercise, error: {:?}", err);
        err
    })
}

#[tracing::instrument(name = "Fetch exercises by user id.", skip(pool))]
pub async fn fetch_by_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<models::Exercise>, sqlx::Error> {
    sqlx::query_as::<_, models::Exercise>(
        r#"
        SELECT *
        FROM exercises
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch exercises, error: {:?}", err);
        err
    })
}

pub async fn insert(
    pool: &PgPool,
    exercise: models::Exercise,
) -> Result<models::Exercise, sqlx::Error> {
    let query_span = tracing::info_span!("Saving generated exercise into the database");
    sqlx::query_as::<_, models::Exercise>(
        r#"
        INSERT INTO exercises (id, user_id, pdf_id, title, description, subject,
                               difficulty, questions, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8,
                NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(exercise.id)
    .bind(exercise.user_id)
    .bind(exercise.pdf_id)
    .bind(exercise.title)
    .bind(exercise.description)
    .bind(exercise.subject)
    .bind(exercise.difficulty)
    .bind(exercise.questions)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert exercise, error: {:?}", err);
        err
    })
}
