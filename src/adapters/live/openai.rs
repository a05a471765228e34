//! Live adapter for the `OpenAI` Images API.

use reqwest::Client;
use serde::Deserialize;

use crate::error::ImageError;
use crate::ports::image_generator::{
    GenerateFuture, GenerationRequest, GenerationResponse, GenerationResult, ImageGenerator,
};

/// Live image generator that calls the `OpenAI` Images API.
///
/// Base64 payloads are passed through undecoded; decoding is the service
/// pipeline's job.
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiGenerator {
    /// Create a new generator with the given API key and base endpoint URL
    /// (e.g., `https://api.openai.com/v1`).
    #[must_use]
    pub fn new(api_key: String, base_url: String) -> Self {
        Self { client: Client::new(), api_key, base_url }
    }
}

impl ImageGenerator for OpenAiGenerator {
    fn generate(&self, request: &GenerationRequest) -> GenerateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let url = format!("{}/images/generations", self.base_url.trim_end_matches('/'));

            let body = serde_json::json!({
                "model": request.model,
                "prompt": request.prompt,
                "n": request.count,
                "size": request.size,
            });

            let response = self
                .client
                .post(&url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .json(&body)
                .send()
                .await?;

            let status = response.status();
            let response_text = response.text().await?;

            if !status.is_success() {
                return Err(ImageError::Api { status: status.as_u16(), message: response_text });
            }

            let parsed: OpenAiResponse = serde_json::from_str(&response_text).map_err(|e| {
                ImageError::Api { status: 200, message: format!("Failed to parse response: {e}") }
            })?;

            let data = parsed
                .data
                .into_iter()
                .map(|item| GenerationResult { b64_json: item.b64_json })
                .collect();

            Ok(GenerationResponse { data })
        })
    }
}

// --- OpenAI API response types ---

#[derive(Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    data: Vec<OpenAiImageData>,
}

#[derive(Deserialize)]
struct OpenAiImageData {
    #[serde(default)]
    b64_json: Option<String>,
}
