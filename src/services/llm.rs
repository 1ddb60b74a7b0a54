use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};

const IMAGE_SIZE: &str = "1024x1024";

/// Free-text generation from a system prompt and a user input
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, instructions: &str, input: &str) -> AppResult<String>;
}

/// Image generation returning base64-encoded PNG bytes
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    #[serde(default)]
    b64_json: Option<String>,
}

/// OpenAI REST client for chat completions and image generation
#[derive(Clone)]
pub struct OpenAiClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
    image_model: String,
}

impl OpenAiClient {
    pub fn new(
        http_client: HttpClient,
        api_key: String,
        api_url: String,
        model: String,
        image_model: String,
    ) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
            model,
            image_model,
        }
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> AppResult<T> {
        let url = format!("{}/{}", self.api_url.trim_end_matches('/'), path);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(500).collect();
            tracing::error!(status = %status, body = %body, path = %path, "OpenAI API error");
            return Err(AppError::ExternalApi(format!(
                "OpenAI API returned status {}",
                status
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(&self, instructions: &str, input: &str) -> AppResult<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": instructions },
                { "role": "user", "content": input }
            ]
        });

        let response: ChatCompletionResponse = self.post("chat/completions", body).await?;
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::ExternalApi("OpenAI response had no content".to_string()))?;

        tracing::debug!(
            output = %content.chars().take(2000).collect::<String>(),
            "Generated text"
        );

        Ok(content)
    }
}

#[async_trait::async_trait]
impl ImageGenerator for OpenAiClient {
    async fn generate_image(&self, prompt: &str) -> AppResult<String> {
        let body = json!({
            "model": self.image_model,
            "prompt": prompt,
            "size": IMAGE_SIZE,
        });

        let response: ImageGenerationResponse = self.post("images/generations", body).await?;
        response
            .data
            .into_iter()
            .next()
            .and_then(|image| image.b64_json)
            .ok_or_else(|| AppError::ExternalApi("OpenAI response had no image data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_completion_deserialization() {
        let json = r#"{
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "{\"items\": []}"}}]
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("{\"items\": []}")
        );
    }

    #[test]
    fn test_image_response_deserialization() {
        let json = r#"{"created": 1, "data": [{"b64_json": "aGVsbG8="}]}"#;
        let response: ImageGenerationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data[0].b64_json.as_deref(), Some("aGVsbG8="));
    }
}
