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

#[tracing::instrument(name = "Log a student in.", skip_all)]
#[post("/login")]
pub async fn login_handler(
    form: web::Json<forms::LoginForm>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::UserView>::build().form_error(errors.to_string()));
    }

    let email = form.email.trim().to_lowercase();
    let user = db::user::fetch_by_email(pg_pool.get_ref(), &email)
        .await
        .map_err(|_err| JsonResponse::<views::UserView>::build().internal_server_error(""))?
        // A missing user and a wrong password are indistinguishable to the caller.
        .ok_or_else(|| {
            JsonResponse::<views::UserView>::build().bad_request("Invalid credentials")
        })?;

    let password_matches =
        bcrypt::verify(form.password.as_str(), &user.password_hash).map_err(|err| {
            tracing::error!("Failed to verify password: {:?}", err);
            JsonResponse::<views::UserView>::build().internal_server_error("")
        })?;
    if !password_matches {
        return Err(JsonResponse::<views::UserView>::build().bad_request("Invalid credentials"));
    }

    let session = token::issue(
        user.id,
        &settings.auth.jwt_secret,
        settings.auth.token_ttl_days,
    )
    .map_err(|err| JsonResponse::<views::UserView>::build().internal_server_error(err))?;

    let body = JsonResponse::<views::UserView>::build()
        .set_id(user.id)
        .set_item(views::UserView::from(&user))
        .body(StatusCode::OK, "logged in".to_string());

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(session, settings.auth.token_ttl_days))
        .json(body))
}
