//! # Journey Outcome
//!
//! Every completed journey query is decoded into exactly one `JourneyOutcome`
//! at the backend boundary. Nothing downstream looks at raw JSON again.
//!
//! ```text
//! 200 { res: {..} }        →  Route(RouteSummary)   →  ["Distance: ..", "Time: ..", "Cost: .."]
//! 200 { error: ".." }      →  Rejected(msg)         →  ["Error : .."]
//! 4xx/5xx { error: ".." }  →  Transport{status,msg} →  ["Error: .."]
//! request/parse failure    →  Network(msg)          →  ["Error: .."]
//! ```
//!
//! The `Rejected` line has a space before the colon, the other error lines
//! don't.

use serde_json::Value;

/// Distance, time and cost exactly as the backend sent them.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub distance: Option<Value>,
    pub time: Option<Value>,
    pub cost: Option<Value>,
}

impl RouteSummary {
    /// Pull the three fields out of a `res` value. Missing fields stay `None`.
    pub fn from_value(res: &Value) -> Self {
        Self {
            distance: res.get("distance").cloned(),
            time: res.get("time").cloned(),
            cost: res.get("cost").cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JourneyOutcome {
    /// Valid route.
    Route(RouteSummary),
    /// Backend answered OK but refused the query (unroutable, unknown station).
    Rejected(String),
    /// Non-success HTTP status.
    Transport { status: u16, message: String },
    /// The request never completed or the body was unreadable.
    Network(String),
}

impl JourneyOutcome {
    /// The result message lines for this outcome.
    pub fn lines(&self) -> Vec<String> {
        match self {
            JourneyOutcome::Route(route) => vec![
                format!("Distance: {}", display_value(route.distance.as_ref())),
                format!("Time: {}", display_value(route.time.as_ref())),
                format!("Cost: {}", display_value(route.cost.as_ref())),
            ],
            JourneyOutcome::Rejected(message) => vec![format!("Error : {message}")],
            JourneyOutcome::Transport { message, .. } | JourneyOutcome::Network(message) => {
                vec![format!("Error: {message}")]
            }
        }
    }

    pub fn is_route(&self) -> bool {
        matches!(self, JourneyOutcome::Route(_))
    }
}

/// Render a JSON value the way string interpolation would show it.
///
/// Strings lose their quotes, integral floats drop the `.0`, and an absent
/// value reads `undefined`. Nothing is rounded.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}
