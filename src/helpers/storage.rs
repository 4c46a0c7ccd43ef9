use crate::configuration::StorageSettings;
use reqwest::Client;
use serde_derive::Deserialize;

// Client for the external object store holding uploaded PDF binaries.
// Only the stable object identifier is kept locally.
#[derive(Debug, Clone)]
pub struct StorageClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    id: String,
}

impl StorageClient {
    pub fn new(settings: &StorageSettings) -> Self {
        Self {
            client: Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        }
    }

    #[tracing::instrument(name = "Upload binary to object store.", skip(self, bytes))]
    pub async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<String, String> {
        let url = format!("{}/objects", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .query(&[("name", filename)])
            .body(bytes)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Object store upload failed: {:?}", err);
                format!("object store unreachable: {err}")
            })?
            .error_for_status()
            .map_err(|err| {
                tracing::error!("Object store rejected upload: {:?}", err);
                format!("object store error: {err}")
            })?;

        response
            .json::<UploadResponse>()
            .await
            .map(|uploaded| uploaded.id)
            .map_err(|err| {
                tracing::error!("Failed to decode object store response: {:?}", err);
                "could not decode object store response".to_string()
            })
    }

    #[tracing::instrument(name = "Delete binary from object store.", skip(self))]
    pub async fn delete(&self, object_id: &str) -> Result<(), String> {
        let url = format!("{}/objects/{}", self.base_url, object_id);

        self.client
            .delete(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Object store delete failed: {:?}", err);
                format!("object store unreachable: {err}")
            })?
            .error_for_status()
            .map_err(|err| {
                tracing::error!("Object store rejected delete: {:?}", err);
                format!("object store error: {err}")
            })?;

        Ok(())
    }
}
