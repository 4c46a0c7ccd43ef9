use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[tracing::instrument(name = "List exercises.", skip_all)]
#[get("")]
pub async fn list(
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::exercise::fetch_by_user(pg_pool.get_ref(), user.id)
        .await
        .map(|exercises| {
            let exercises = exercises
                .into_iter()
                .map(views::ExerciseSummary::from)
                .collect();
            JsonResponse::build().set_list(exercises).ok("OK")
        })
        .map_err(|_err| JsonResponse::<views::ExerciseSummary>::build().internal_server_error(""))
}

#[tracing::instrument(name = "Get one exercise.", skip_all)]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    user: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (id,) = path.into_inner();

    db::exercise::fetch(pg_pool.get_ref(), id, user.id)
        .await
        .map_err(|_err| JsonResponse::<models::Exercise>::build().internal_server_error(""))?
        .ok_or_else(|| JsonResponse::<models::Exercise>::build().not_found("Exercise not found"))
        .map(|exercise| JsonResponse::build().set_item(exercise).ok("OK"))
}
