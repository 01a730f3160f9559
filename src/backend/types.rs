//! Wire types for the route backend's REST API.
//!
//! `GET /get_elements` answers:
//!
//! ```json
//! { "elements": { "BlueLine": ["..."], "RedLine": ["..."], "GreenLine": ["..."] } }
//! ```
//!
//! Parsing is lenient per line: a key that is absent, `null`, or not an
//! array becomes an empty list, and non-string entries are skipped. Only a
//! missing `elements` object counts as a malformed response.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::core::topology::{Line, LineTopology};

#[derive(Deserialize, Debug)]
pub struct ElementsResponse {
    pub elements: Option<serde_json::Map<String, Value>>,
}

impl ElementsResponse {
    /// Convert to a topology, or `None` if `elements` is missing.
    pub fn into_topology(self) -> Option<LineTopology> {
        let elements = self.elements?;
        let [blue, red, green] = Line::ALL.map(|line| stations_for(&elements, line));
        Some(LineTopology::new(blue, red, green))
    }
}

fn stations_for(elements: &serde_json::Map<String, Value>, line: Line) -> Vec<String> {
    match elements.get(line.key()) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(name.clone()),
                other => {
                    debug!("Skipping non-string station on {}: {}", line.key(), other);
                    None
                }
            })
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            debug!("{} is not a list ({}), treating as empty", line.key(), other);
            Vec::new()
        }
    }
}

/// Body of a journey response, before it is classified.
///
/// Kept as raw JSON because success and failure share the same status code
/// and are told apart only by which key is present.
#[derive(Deserialize, Debug)]
pub struct JourneyResponse(pub Value);

impl JourneyResponse {
    pub fn res(&self) -> Option<&Value> {
        self.0.as_object().and_then(|obj| obj.get("res"))
    }

    pub fn error(&self) -> Option<&Value> {
        self.0.as_object().and_then(|obj| obj.get("error"))
    }
}
