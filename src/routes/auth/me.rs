use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Get current student.", skip_all)]
#[get("")]
pub async fn me_handler(user: web::ReqData<Arc<models::User>>) -> Result<impl Responder> {
    let user = user.into_inner();

    Ok(JsonResponse::build()
        .set_item(views::UserView::from(user.as_ref()))
        .ok("OK"))
}
