mod login;
mod logout;
mod me;
mod register;

pub use login::*;
pub use logout::*;
pub use me::*;
pub use register::*;

use crate::helpers::token::SESSION_COOKIE;
use actix_web::cookie::{time::Duration, Cookie, SameSite};

pub(crate) fn session_cookie(token: String, ttl_days: i64) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(ttl_days))
        .finish()
}
