//! The generate-and-save pipeline.

use std::path::{Path, PathBuf};

use base64::Engine;

use crate::error::ImageError;
use crate::output::{ensure_parent_dir, save_image};
use crate::ports::image_generator::{GenerationRequest, ImageGenerator};

/// Number of images requested per call.
const IMAGE_COUNT: u32 = 1;

/// Resolution requested per call.
const IMAGE_SIZE: &str = "1024x1024";

/// Turns a text prompt into a saved image file by delegating to an
/// [`ImageGenerator`] port.
///
/// The service holds no mutable state; any number of calls may run
/// concurrently against one instance. The generator and model are fixed at
/// construction, so tests inject stubs without touching the process
/// environment.
pub struct ImageService {
    generator: Box<dyn ImageGenerator>,
    model: String,
}

impl ImageService {
    /// Create a service that generates with the given port implementation
    /// and model identifier.
    #[must_use]
    pub fn new(generator: Box<dyn ImageGenerator>, model: impl Into<String>) -> Self {
        Self { generator, model: model.into() }
    }

    /// Generate one image for `prompt` and save it to `output_path`,
    /// returning the path on success.
    ///
    /// The path's parent directory is created if absent; an existing file at
    /// the path is overwritten. The encoding is inferred from the path's
    /// extension. On a failure after the directory was created, the
    /// directory is left in place; no partial state is cleaned up.
    ///
    /// # Errors
    ///
    /// Every failure surfaces as an [`ImageError`] whose message describes
    /// the cause: API or transport failure, an empty result set, a malformed
    /// base64 payload, undecodable image bytes, directory creation failure,
    /// or a failed write.
    pub async fn generate_and_save_image(
        &self,
        prompt: &str,
        output_path: impl AsRef<Path>,
    ) -> Result<PathBuf, ImageError> {
        let output_path = output_path.as_ref();

        let request = GenerationRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            count: IMAGE_COUNT,
            size: IMAGE_SIZE.to_string(),
        };

        let response = self.generator.generate(&request).await?;

        let payload = response.first_payload().ok_or(ImageError::NoImage)?;

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| ImageError::Payload(e.to_string()))?;

        let image =
            image::load_from_memory(&bytes).map_err(|e| ImageError::Decode(e.to_string()))?;

        ensure_parent_dir(output_path)?;
        save_image(&image, output_path)?;

        Ok(output_path.to_path_buf())
    }
}
