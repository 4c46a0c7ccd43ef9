mod f_bearer;
mod f_cookie;

pub use f_bearer::try_bearer;
pub use f_cookie::try_cookie;

use crate::configuration::Settings;
use crate::db;
use crate::helpers;
use actix_web::{dev::ServiceRequest, web, HttpMessage};
use sqlx::PgPool;
use std::sync::Arc;

// Shared tail of every authentication method: verify the session token and
// attach the owning user to the request.
pub(crate) async fn authenticate_token(
    req: &mut ServiceRequest,
    token: &str,
) -> Result<(), String> {
    let secret = req
        .app_data::<web::Data<Settings>>()
        .unwrap()
        .auth
        .jwt_secret
        .clone();
    let claims = helpers::token::verify(token, &secret)?;

    let pg_pool = req
        .app_data::<web::Data<PgPool>>()
        .unwrap()
        .get_ref()
        .clone();
    let user = db::user::fetch(&pg_pool, claims.sub)
        .await
        .map_err(|_| "could not load user".to_string())?
        .ok_or_else(|| "unknown user".to_string())?;

    if req.extensions_mut().insert(Arc::new(user)).is_some() {
        return Err("user already logged".to_string());
    }

    Ok(())
}
