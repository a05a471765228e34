//! Service context that bundles the generator port with its wiring.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::openai::OpenAiGenerator;
use crate::adapters::recording::image_generator::RecordingImageGenerator;
use crate::adapters::replaying::image_generator::ReplayingImageGenerator;
use crate::cassette::config::load_cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::Config;
use crate::error::ImageError;
use crate::ports::ImageGenerator;

/// Bundles the configured image generator port.
pub struct ServiceContext {
    /// Image generator port.
    pub generator: Box<dyn ImageGenerator>,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write cassette files to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<std::path::PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapter still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Create a live context from the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured.
    pub fn live(config: &Config) -> Result<Self, ImageError> {
        let key = config
            .api_key
            .clone()
            .ok_or(ImageError::MissingApiKey { env_var: "OPENAI_API_KEY".into() })?;
        let generator = Box::new(OpenAiGenerator::new(key, config.base_url.clone()));
        Ok(Self { generator })
    }

    /// Create a recording context that wraps a live adapter with a recorder.
    ///
    /// # Errors
    ///
    /// Returns an error if the live context cannot be created.
    pub fn recording(config: &Config) -> Result<(Self, RecordingSession), ImageError> {
        let live_ctx = Self::live(config)?;

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = std::path::PathBuf::from(".pixgen/cassettes").join(&timestamp);

        let commit = get_commit_hash();
        let path = output_dir.join("image_generator.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-image_generator"),
            &commit,
        )));

        let recording_gen = RecordingImageGenerator::new(live_ctx.generator, Arc::clone(&recorder));

        let ctx = Self { generator: Box::new(recording_gen) };
        let session = RecordingSession { recorder };

        Ok((ctx, session))
    }

    /// Create a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path) -> Result<Self, ImageError> {
        let replayer = load_cassette(path)
            .map_err(|e| ImageError::Config(format!("Failed to load cassette: {e}")))?;
        let replayer = Arc::new(Mutex::new(replayer));
        let generator = Box::new(ReplayingImageGenerator::new(replayer));
        Ok(Self { generator })
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_without_key_is_missing_api_key() {
        let config = Config { api_key: None, base_url: "https://x".into(), model: "m".into() };
        let err = ServiceContext::live(&config).err().unwrap();
        assert!(matches!(err, ImageError::MissingApiKey { .. }));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn replaying_missing_cassette_fails() {
        let err = ServiceContext::replaying(Path::new("/nonexistent/c.yaml")).err().unwrap();
        assert!(matches!(err, ImageError::Config(_)));
    }
}
