use crate::configuration::AgentSettings;
use crate::forms;
use serde_derive::Serialize;
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

// The upstream summarize endpoint requires a question field; the product
// sends a fixed placeholder for summaries.
pub const SUMMARIZE_QUESTION: &str = "summarize";

// Thin client for the external AI agent service. Requests are forwarded
// once, without retries; any upstream failure surfaces to the caller.
#[derive(Debug, Clone)]
pub struct AgentClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AskPayload<'a> {
    question: &'a str,
    language: &'a str,
    user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pdf_content: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateExercisePayload<'a> {
    topic: &'a str,
    subject: &'a str,
    difficulty: &'a str,
    number_of_questions: u8,
    user_id: Uuid,
}

impl AgentClient {
    pub fn try_new(settings: &AgentSettings) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|err| format!("failed to build agent http client: {err}"))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn ask(&self, question: &str, language: &str, user_id: Uuid) -> Result<Value, String> {
        self.forward(
            "/ask",
            &AskPayload {
                question,
                language,
                user_id,
                pdf_content: None,
            },
        )
        .await
    }

    pub async fn ask_pdf(
        &self,
        question: &str,
        pdf_content: &str,
        language: &str,
        user_id: Uuid,
    ) -> Result<Value, String> {
        self.forward(
            "/ask-pdf",
            &AskPayload {
                question,
                language,
                user_id,
                pdf_content: Some(pdf_content),
            },
        )
        .await
    }

    pub async fn summarize(
        &self,
        pdf_content: &str,
        language: &str,
        user_id: Uuid,
    ) -> Result<Value, String> {
        self.forward(
            "/summarize",
            &AskPayload {
                question: SUMMARIZE_QUESTION,
                language,
                user_id,
                pdf_content: Some(pdf_content),
            },
        )
        .await
    }

    pub async fn generate_exercise(
        &self,
        form: &forms::GenerateForm,
        user_id: Uuid,
    ) -> Result<Value, String> {
        self.forward(
            "/generate-exercise",
            &GenerateExercisePayload {
                topic: &form.topic,
                subject: &form.subject,
                difficulty: form.difficulty.as_str(),
                number_of_questions: form.number_of_questions,
                user_id,
            },
        )
        .await
    }

    #[tracing::instrument(name = "Forward request to agent service.", skip(self, payload))]
    async fn forward<P: serde::Serialize>(&self, path: &str, payload: &P) -> Result<Value, String> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Agent service request failed: {:?}", err);
                format!("agent service unreachable: {err}")
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!("Agent service returned {}: {}", status, detail);
            return Err(format!("agent service returned {status}"));
        }

        response.json::<Value>().await.map_err(|err| {
            tracing::error!("Failed to decode agent service response: {:?}", err);
            "could not decode agent service response".to_string()
        })
    }
}
