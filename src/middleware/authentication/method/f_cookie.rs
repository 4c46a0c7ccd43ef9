use crate::helpers::token::SESSION_COOKIE;
use crate::middleware::authentication::get_header;
use crate::middleware::authentication::method::authenticate_token;
use actix_web::dev::ServiceRequest;

#[tracing::instrument(name = "Authenticate with session cookie")]
pub async fn try_cookie(req: &mut ServiceRequest) -> Result<bool, String> {
    let cookie_header = get_header::<String>(req, "cookie")?;
    if cookie_header.is_none() {
        return Ok(false);
    }

    // Find the session token among the request cookies.
    let cookies = cookie_header.unwrap();
    let token = cookies.split(';').find_map(|cookie| {
        let parts: Vec<&str> = cookie.trim().splitn(2, '=').collect();
        if parts.len() == 2 && parts[0] == SESSION_COOKIE {
            Some(parts[1].to_string())
        } else {
            None
        }
    });

    if token.is_none() {
        return Ok(false);
    }

    tracing::debug!("Found session token in cookies");
    authenticate_token(req, &token.unwrap()).await.map(|_| true)
}
