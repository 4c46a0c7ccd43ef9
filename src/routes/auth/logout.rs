use crate::helpers::token::SESSION_COOKIE;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::http::StatusCode;
use actix_web::{cookie::Cookie, post, HttpResponse, Responder, Result};

// Clears the session cookie. Stateless tokens are not revoked server-side.
#[tracing::instrument(name = "Log a student out.")]
#[post("/logout")]
pub async fn logout_handler() -> Result<impl Responder> {
    let mut removal = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .finish();
    removal.make_removal();

    let body = JsonResponse::<views::UserView>::build()
        .body(StatusCode::OK, "Logged out successfully".to_string());

    Ok(HttpResponse::Ok().cookie(removal).json(body))
}
