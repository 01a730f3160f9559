//! # Application State
//!
//! Core business state for the journey planner. Domain logic only,
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── topology: LineTopology          // stations per line, replaced wholesale
//! ├── selection: JourneySelection     // source/destination picks
//! ├── field_errors: FieldErrors       // per-field "required" messages
//! ├── result: Option<Vec<String>>     // None until the first query resolves
//! ├── map_visible: bool               // route map panel toggle
//! ├── pending_query: Option<u64>      // id of the query in flight, if any
//! ├── status_message: String          // status bar text
//! ├── base_url: String                // backend origin, for display
//! └── result_received_at: Option<..>  // when the current result arrived
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::form::{FieldErrors, JourneySelection};
use crate::core::topology::LineTopology;

pub struct App {
    pub topology: LineTopology,
    pub selection: JourneySelection,
    pub field_errors: FieldErrors,
    /// Result message lines of the last completed query.
    /// Left untouched while a new query is in flight.
    pub result: Option<Vec<String>>,
    pub map_visible: bool,
    /// Id of the query currently in flight. Responses for any other id are stale.
    pub pending_query: Option<u64>,
    pub next_query_id: u64,
    pub status_message: String,
    pub base_url: String,
    /// Local time the current result arrived, "HH:MM:SS".
    pub result_received_at: Option<String>,
}

impl App {
    pub fn new(base_url: String) -> Self {
        Self {
            topology: LineTopology::default(),
            selection: JourneySelection::default(),
            field_errors: FieldErrors::default(),
            result: None,
            map_visible: false,
            pending_query: None,
            next_query_id: 1,
            status_message: String::from("Loading stations..."),
            base_url,
            result_received_at: None,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.pending_query.is_some()
    }
}
