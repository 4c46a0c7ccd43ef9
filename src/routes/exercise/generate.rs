use crate::db;
use crate::forms;
use crate::helpers::{AgentClient, JsonResponse};
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

// Forwards the request to the agent service and persists whatever structured
// exercise it returns, merged with the owning student.
#[tracing::instrument(name = "Generate exercise.", skip_all)]
#[post("/generate")]
pub async fn handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::GenerateForm>,
    agent: web::Data<AgentClient>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Exercise>::build().form_error(errors.to_string()));
    }

    let payload = agent
        .generate_exercise(&form, user.id)
        .await
        .map_err(|err| JsonResponse::<models::Exercise>::build().internal_server_error(err))?;

    let generated: forms::GeneratedExercise = serde_json::from_value(payload).map_err(|err| {
        tracing::error!("Agent service returned an unusable exercise payload: {:?}", err);
        JsonResponse::<models::Exercise>::build().internal_server_error("Error generating exercise")
    })?;
    if generated.title.trim().is_empty() {
        tracing::error!("Agent service returned an exercise without a title");
        return Err(JsonResponse::<models::Exercise>::build()
            .internal_server_error("Error generating exercise"));
    }

    let exercise = models::Exercise {
        id: Uuid::new_v4(),
        user_id: user.id,
        pdf_id: None,
        title: generated.title,
        description: generated.description,
        subject: if generated.subject.is_empty() {
            form.subject.clone()
        } else {
            generated.subject
        },
        difficulty: generated.difficulty.as_str().to_string(),
        questions: if generated.questions.is_null() {
            serde_json::Value::Array(vec![])
        } else {
            generated.questions
        },
        ..Default::default()
    };

    db::exercise::insert(pg_pool.get_ref(), exercise)
        .await
        .map(|exercise| {
            JsonResponse::build()
                .set_id(exercise.id)
                .set_item(exercise)
                .created("success")
        })
        .map_err(|_err| {
            JsonResponse::<models::Exercise>::build().internal_server_error("Failed to insert")
        })
}
