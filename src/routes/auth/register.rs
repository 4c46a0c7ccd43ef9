use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::{token, JsonResponse};
use crate::routes::auth::session_cookie;
use crate::views;
use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Register a new student.", skip_all)]
#[post("/register")]
pub async fn register_handler(
    form: web::Json<forms::RegisterForm>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        let err_msg = format!("Invalid data received {:?}", errors.to_string());
        tracing::debug!(err_msg);

        return Err(JsonResponse::<views::UserView>::build().form_error(errors.to_string()));
    }

    let email = form.email.trim().to_lowercase();
    let existing = db::user::fetch_by_email(pg_pool.get_ref(), &email)
        .await
        .map_err(|_err| JsonResponse::<views::UserView>::build().internal_server_error(""))?;
    if existing.is_some() {
        return Err(JsonResponse::<views::UserView>::build().bad_request("User already exists"));
    }

    let password_hash = bcrypt::hash(form.password.as_str(), bcrypt::DEFAULT_COST).map_err(
        |err| {
            tracing::error!("Failed to hash password: {:?}", err);
            JsonResponse::<views::UserView>::build().internal_server_error("")
        },
    )?;

    let user = db::user::insert(pg_pool.get_ref(), form.into_inner().into_user(password_hash))
        .await
        .map_err(|_err| {
            JsonResponse::<views::UserView>::build().internal_server_error("Failed to insert")
        })?;

    let session = token::issue(
        user.id,
        &settings.auth.jwt_secret,
        settings.auth.token_ttl_days,
    )
    .map_err(|err| JsonResponse::<views::UserView>::build().internal_server_error(err))?;

    let body = JsonResponse::<views::UserView>::build()
        .set_id(user.id)
        .set_item(views::UserView::from(&user))
        .body(StatusCode::CREATED, "registered".to_string());

    Ok(HttpResponse::Created()
        .cookie(session_cookie(session, settings.auth.token_ttl_days))
        .json(body))
}
