//! File naming and image saving helpers.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ImageError;

/// Generate an output filename from a prompt.
///
/// Sanitizes the first 50 characters of the prompt to kebab-case, appends a
/// unix timestamp, and uses a `.png` extension.
#[must_use]
pub fn auto_filename(prompt: &str) -> String {
    let sanitized = sanitize_for_filename(prompt, 50);
    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
    format!("{sanitized}-{timestamp}.png")
}

/// Sanitize a string for use in a filename.
///
/// Converts to lowercase, replaces non-alphanumeric chars with hyphens,
/// collapses consecutive hyphens, and trims to max length.
#[must_use]
pub fn sanitize_for_filename(input: &str, max_len: usize) -> String {
    let mut result = String::with_capacity(max_len);
    let mut last_was_hyphen = true; // Prevents leading hyphen

    for ch in input.chars().take(max_len * 2) {
        if result.len() >= max_len {
            break;
        }
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            result.push('-');
            last_was_hyphen = true;
        }
    }

    while result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        "image".to_string()
    } else {
        result
    }
}

/// Ensure the parent directory of `output_path` exists, creating it and any
/// missing ancestors if necessary.
///
/// # Errors
///
/// Returns [`ImageError::CreateDir`] naming the directory if creation fails.
pub fn ensure_parent_dir(output_path: &Path) -> Result<(), ImageError> {
    match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|source| ImageError::CreateDir { path: parent.to_path_buf(), source }),
        _ => Ok(()),
    }
}

/// Save a decoded image to `output_path`, inferring the encoding from the
/// path's extension.
///
/// # Errors
///
/// Returns an error if the extension maps to no supported format or the
/// encode/write fails.
pub fn save_image(image: &image::DynamicImage, output_path: &Path) -> Result<(), ImageError> {
    image
        .save(output_path)
        .map_err(|e| ImageError::Save(format!("{}: {e}", output_path.display())))
}

/// Resolve the output path: use the explicit path or auto-generate one.
#[must_use]
pub fn resolve_output_path(explicit: Option<&str>, prompt: &str) -> PathBuf {
    match explicit {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(auto_filename(prompt)),
    }
}
