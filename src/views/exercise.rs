use crate::models;
use chrono::{DateTime, Utc};
use serde_derive::Serialize;
use uuid::Uuid;

// Listing view; question bodies are only returned by the detail route.
#[derive(Default, Debug, Clone, Serialize)]
pub struct ExerciseSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub subject: String,
    pub difficulty: String,
    pub created_at: DateTime<Utc>,
}

impl From<models::Exercise> for ExerciseSummary {
    fn from(exercise: models::Exercise) -> Self {
        ExerciseSummary {
            id: exercise.id,
            title: exercise.title,
            description: exercise.description,
            subject: exercise.subject,
            difficulty: exercise.difficulty,
            created_at: exercise.created_at,
        }
    }
}
