use crate::middleware::authentication::get_header;
use crate::middleware::authentication::method::authenticate_token;
use actix_web::dev::ServiceRequest;

fn try_extract_token(authentication: String) -> Result<String, String> {
    let mut authentication_parts = authentication.splitn(2, ' ');
    match authentication_parts.next() {
        Some("Bearer") => {}
        _ => return Err("Bearer scheme missing".to_string()),
    }

    authentication_parts
        .next()
        .map(|token| token.to_string())
        .ok_or_else(|| {
            tracing::error!("Bearer token is missing");
            "authentication required".to_string()
        })
}

#[tracing::instrument(name = "Authenticate with bearer token")]
pub async fn try_bearer(req: &mut ServiceRequest) -> Result<bool, String> {
    let authentication = get_header::<String>(req, "authorization")?;
    if authentication.is_none() {
        return Ok(false);
    }

    let token = try_extract_token(authentication.unwrap())?;
    authenticate_token(req, &token).await.map(|_| true)
}
