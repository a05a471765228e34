//! Replaying adapters that serve recorded interactions from cassettes.

pub mod image_generator;

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;

/// Retrieve the next recorded output for a given port and method.
///
/// # Panics
///
/// Panics if the cassette has no more interactions for the pair.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut guard = replayer.lock().expect("replayer lock poisoned");
    guard.next_interaction(port, method).output
}

/// Deserialize a replayed output as `Result<T, Error>`, following the
/// recorder's Ok/Err convention. Outputs without either key are treated as a
/// bare Ok value.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err_val) = output.get("Err") {
        return Err(err_val.as_str().unwrap_or("replayed error").to_string().into());
    }
    let ok_val = match output.get("Ok") {
        Some(v) => v.clone(),
        None => output,
    };
    serde_json::from_value(ok_val)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
}
