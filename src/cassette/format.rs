//! On-disk cassette format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded session of port interactions, serialized as YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Human-readable name of the recording session.
    pub name: String,
    /// When the session was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Git commit hash of the code that produced the recording.
    pub commit: String,
    /// The recorded interactions, in call order.
    pub interactions: Vec<Interaction>,
}

/// One recorded port call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Global sequence number within the cassette.
    pub seq: u64,
    /// Port name (e.g., `"image_generator"`).
    pub port: String,
    /// Method name on the port (e.g., `"generate"`).
    pub method: String,
    /// The serialized request.
    pub input: serde_json::Value,
    /// The serialized result, as `{"Ok": ...}` or `{"Err": "..."}`.
    pub output: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cassette_yaml_round_trip() {
        let cassette = Cassette {
            name: "session".into(),
            recorded_at: Utc::now(),
            commit: "deadbeef".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "image_generator".into(),
                method: "generate".into(),
                input: json!({"prompt": "a cat"}),
                output: json!({"Ok": {"data": []}}),
            }],
        };
        let yaml = serde_yaml::to_string(&cassette).unwrap();
        let parsed: Cassette = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.name, "session");
        assert_eq!(parsed.interactions.len(), 1);
        assert_eq!(parsed.interactions[0].port, "image_generator");
    }
}
