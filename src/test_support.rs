//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::backend::{BackendError, JourneyBackend};
use crate::core::form::JourneyQuery;
use crate::core::outcome::JourneyOutcome;
use crate::core::topology::LineTopology;

/// A backend that answers every call with canned values and never touches the network.
pub struct StubBackend {
    pub topology: LineTopology,
    pub outcome: JourneyOutcome,
}

#[async_trait]
impl JourneyBackend for StubBackend {
    async fn fetch_topology(&self) -> Result<LineTopology, BackendError> {
        Ok(self.topology.clone())
    }

    async fn plan_journey(&self, _query: &JourneyQuery) -> JourneyOutcome {
        self.outcome.clone()
    }
}

/// Creates a test App pointed at an unroutable origin.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new("http://test.invalid".to_string())
}

/// A small three-line topology for render and navigation tests.
pub fn sample_topology() -> LineTopology {
    LineTopology::new(
        vec!["Miyapur".into(), "Ameerpet".into(), "LB Nagar".into()],
        vec!["JNTU College".into(), "Parade Ground".into()],
        vec!["JBS Parade Ground".into(), "MG Bus Station".into()],
    )
}
