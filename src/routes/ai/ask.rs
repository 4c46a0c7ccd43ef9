use crate::forms;
use crate::helpers::{AgentClient, JsonResponse};
use crate::models;
use actix_web::{post, web, HttpResponse, Responder, Result};
use serde_json::Value;
use serde_valid::Validate;
use std::sync::Arc;

// The upstream response body is relayed to the caller unmodified.
#[tracing::instrument(name = "Ask the tutor a question.", skip_all)]
#[post("/ask")]
pub async fn handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::QuestionForm>,
    agent: web::Data<AgentClient>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<Value>::build().form_error(errors.to_string()));
    }

    agent
        .ask(&form.question, &form.language, user.id)
        .await
        .map(|payload| HttpResponse::Ok().json(payload))
        .map_err(|err| JsonResponse::<Value>::build().internal_server_error(err))
}
