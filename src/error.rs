//! Unified error type for pixgen.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating and saving an image.
///
/// Callers receive one error kind whose `Display` message describes the
/// underlying cause; the variants exist so tests can assert on the cause
/// without parsing message text.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API succeeded but returned no image payload.
    #[error("No image was generated: the API returned an empty result")]
    NoImage,

    /// The returned base64 payload could not be decoded.
    #[error("Failed to decode base64 image payload: {0}")]
    Payload(String),

    /// The decoded bytes are not a well-formed image.
    #[error("Failed to decode image data: {0}")]
    Decode(String),

    /// The output path's parent directory could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The image could not be encoded or written to the output path.
    #[error("Failed to save image: {0}")]
    Save(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No API key configured.
    #[error("No API key configured. Set {env_var} or add it to the config file.")]
    MissingApiKey {
        /// The environment variable name.
        env_var: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_image_message_mentions_generation() {
        let msg = ImageError::NoImage.to_string();
        assert!(msg.contains("No image was generated"), "got: {msg}");
    }

    #[test]
    fn create_dir_message_mentions_directory() {
        let err = ImageError::CreateDir {
            path: PathBuf::from("/tmp/out"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to create directory"), "got: {msg}");
        assert!(msg.contains("/tmp/out"), "got: {msg}");
    }

    #[test]
    fn api_message_carries_status_and_body() {
        let err = ImageError::Api { status: 429, message: "quota exceeded".into() };
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("quota exceeded"));
    }
}
