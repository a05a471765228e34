//! Recording adapters that capture interactions to cassettes.

pub mod image_generator;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Record a `Result<T, E>` interaction. Ok values serialize under an `"Ok"`
/// key, errors under `"Err"` as their display string.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let input_json = serde_json::to_value(input).expect("recording input must serialize");

    let output_json = match result {
        Ok(v) => serde_json::json!({
            "Ok": serde_json::to_value(v).expect("recording output must serialize")
        }),
        Err(e) => serde_json::json!({ "Err": e.to_string() }),
    };

    recorder.lock().expect("recorder lock poisoned").record(port, method, input_json, output_json);
}
