//! Image generator port for AI image generation APIs.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::ImageError;

/// A request to generate images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The model identifier (e.g., `"gpt-image-1"`).
    pub model: String,
    /// The text prompt describing the desired image.
    pub prompt: String,
    /// Number of images to generate.
    pub count: u32,
    /// Requested resolution as `"WIDTHxHEIGHT"` (e.g., `"1024x1024"`).
    pub size: String,
}

/// A single generation result entry.
///
/// The payload stays base64-encoded at this boundary; decoding happens in
/// the service pipeline so cassettes record exactly what the API returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Base64-encoded image data, if the API attached one to this entry.
    #[serde(default)]
    pub b64_json: Option<String>,
}

/// Response containing generation results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// The result entries, in API order.
    pub data: Vec<GenerationResult>,
}

impl GenerationResponse {
    /// The first base64 payload in the response, if any entry carries one.
    #[must_use]
    pub fn first_payload(&self) -> Option<&str> {
        self.data.iter().find_map(|entry| entry.b64_json.as_deref())
    }
}

/// Boxed future type returned by [`ImageGenerator::generate`].
pub type GenerateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<GenerationResponse, ImageError>> + Send + 'a>>;

/// Generates images from text prompts via an external API.
pub trait ImageGenerator: Send + Sync {
    /// Generate images for the given request.
    fn generate(&self, request: &GenerationRequest) -> GenerateFuture<'_>;
}
