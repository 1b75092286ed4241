use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Turns a text prompt into raw image bytes.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    data: String,
}

pub struct GeminiImageGenerator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiImageGenerator {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self> {
        Self::with_base_url(api_key, model, timeout, GEMINI_API_URL)
    }

    pub fn with_base_url(
        api_key: String,
        model: String,
        timeout: Duration,
        base_url: &str,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn request_image(&self, prompt: &str) -> Result<Vec<u8>> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("API error: HTTP {}: {}", status, error_text).into());
        }

        let body: GenerateContentResponse = response.json().await?;

        let encoded = body
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .find_map(|part| part.inline_data)
            .map(|inline| inline.data)
            .ok_or_else(|| AppError::GenerationFailed("No image generated.".to_string()))?;

        let bytes = STANDARD.decode(encoded.trim())?;
        if bytes.is_empty() {
            return Err(AppError::GenerationFailed(
                "Image payload was empty".to_string(),
            ));
        }

        Ok(bytes)
    }
}

#[async_trait]
impl ImageGenerator for GeminiImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>> {
        tracing::info!("Generating image with {}", self.model);
        tracing::debug!("Prompt: {}", prompt);

        self.request_image(prompt).await.map_err(|e| match e {
            AppError::GenerationFailed(_) => e,
            other => AppError::GenerationFailed(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "gemini-3-pro-image-preview";

    fn generator(server: &MockServer) -> GeminiImageGenerator {
        GeminiImageGenerator::with_base_url(
            "test-key".to_string(),
            MODEL.to_string(),
            Duration::from_secs(5),
            &server.uri(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn returns_decoded_inline_image() {
        let server = MockServer::start().await;
        let image = vec![0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3];

        Mock::given(method("POST"))
            .and(path(format!("/models/{}:generateContent", MODEL)))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{"parts": [{"text": "a fox"}]}],
                "generationConfig": {"responseModalities": ["IMAGE"]}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "parts": [
                            {"text": "Here is your sketch"},
                            {"inlineData": {"mimeType": "image/jpeg", "data": STANDARD.encode(&image)}}
                        ]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let bytes = generator(&server).generate("a fox").await.unwrap();
        assert_eq!(bytes, image);
    }

    #[tokio::test]
    async fn response_without_image_is_a_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "I can't draw that"}]}}]
            })))
            .mount(&server)
            .await;

        let err = generator(&server).generate("a fox").await.unwrap_err();
        assert!(matches!(err, AppError::GenerationFailed(_)));
    }

    #[tokio::test]
    async fn server_error_is_a_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let err = generator(&server).generate("a fox").await.unwrap_err();
        match err {
            AppError::GenerationFailed(msg) => assert!(msg.contains("500")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn empty_candidates_is_a_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let err = generator(&server).generate("a fox").await.unwrap_err();
        assert!(matches!(err, AppError::GenerationFailed(_)));
    }
}
