use serde_derive::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub topic: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub subject: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_question_count")]
    #[validate(minimum = 1)]
    #[validate(maximum = 20)]
    pub number_of_questions: u8,
}

fn default_question_count() -> u8 {
    5
}

// What the agent service hands back for a generation request. Everything is
// optional on the wire; the row columns are the only schema enforced.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratedExercise {
    pub title: String,
    pub description: String,
    pub subject: String,
    pub difficulty: Difficulty,
    pub questions: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_count_defaults_to_five() {
        let form: GenerateForm =
            serde_json::from_value(serde_json::json!({"topic": "Fractions", "subject": "Math"}))
                .unwrap();
        assert_eq!(form.number_of_questions, 5);
        assert_eq!(form.difficulty, Difficulty::Medium);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn question_count_is_bounded() {
        let form: GenerateForm = serde_json::from_value(serde_json::json!({
            "topic": "Fractions",
            "subject": "Math",
            "numberOfQuestions": 50
        }))
        .unwrap();
        assert!(form.validate().is_err());
    }

    #[test]
    fn generated_payload_tolerates_missing_fields() {
        let generated: GeneratedExercise =
            serde_json::from_value(serde_json::json!({"title": "Quiz"})).unwrap();
        assert_eq!(generated.title, "Quiz");
        assert_eq!(generated.difficulty, Difficulty::Medium);
        assert!(generated.questions.is_null());
    }
}
