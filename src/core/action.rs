//! # Actions
//!
//! Everything that can happen in the planner becomes an `Action`.
//! User presses Calculate? That's `Action::Submit`.
//! Backend answers? That's `Action::JourneyResolved { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller must
//! start. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::form::{Field, JourneyQuery};
use crate::core::outcome::JourneyOutcome;
use crate::core::state::App;
use crate::core::topology::LineTopology;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Station taxonomy arrived.
    TopologyLoaded(LineTopology),
    /// Station taxonomy could not be fetched. Logged, never shown as a result.
    TopologyFailed(String),
    SelectStation { field: Field, station: String },
    /// User pressed Calculate.
    Submit,
    /// A journey query finished (successfully or not).
    JourneyResolved {
        id: u64,
        outcome: JourneyOutcome,
        received_at: String,
    },
    ToggleMap,
    Quit,
}

/// Work the caller must perform after `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    SpawnJourneyQuery { id: u64, query: JourneyQuery },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::TopologyLoaded(topology) => {
            info!("Topology loaded: {} stations", topology.station_count());
            app.status_message = if topology.is_empty() {
                "No stations available".to_string()
            } else {
                format!("{} stations", topology.station_count())
            };
            app.topology = topology;
            Effect::None
        }
        Action::TopologyFailed(reason) => {
            warn!("Failed to fetch elements: {}", reason);
            app.status_message = "Station list unavailable".to_string();
            Effect::None
        }
        Action::SelectStation { field, station } => {
            debug!("{} = {}", field.label(), station);
            app.selection.set(field, station);
            app.field_errors.clear(field);
            Effect::None
        }
        Action::Submit => match app.selection.validate() {
            Ok(query) => {
                app.field_errors = Default::default();
                let id = app.next_query_id;
                app.next_query_id += 1;
                app.pending_query = Some(id);
                info!(
                    "Submitting journey query #{}: {} -> {}",
                    id, query.source_station, query.destination_station
                );
                Effect::SpawnJourneyQuery { id, query }
            }
            Err(errors) => {
                debug!("Submission blocked: {} field error(s)", errors.len());
                app.field_errors = errors;
                Effect::None
            }
        },
        Action::JourneyResolved {
            id,
            outcome,
            received_at,
        } => {
            if app.pending_query != Some(id) {
                debug!("Dropping stale journey result #{}", id);
                return Effect::None;
            }
            app.pending_query = None;
            app.result = Some(outcome.lines());
            app.result_received_at = Some(received_at);
            Effect::None
        }
        Action::ToggleMap => {
            app.map_visible = !app.map_visible;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outcome::RouteSummary;
    use crate::core::topology::Line;
    use crate::test_support::test_app;
    use serde_json::json;

    fn select_both(app: &mut App) {
        update(
            app,
            Action::SelectStation {
                field: Field::SourceStation,
                station: "Miyapur".into(),
            },
        );
        update(
            app,
            Action::SelectStation {
                field: Field::DestinationStation,
                station: "Ameerpet".into(),
            },
        );
    }

    fn route(distance: serde_json::Value) -> JourneyOutcome {
        JourneyOutcome::Route(RouteSummary::from_value(
            &json!({ "distance": distance, "time": "12 min", "cost": 20 }),
        ))
    }

    fn resolve(app: &mut App, id: u64, outcome: JourneyOutcome) -> Effect {
        update(
            app,
            Action::JourneyResolved {
                id,
                outcome,
                received_at: "10:00:00".into(),
            },
        )
    }

    #[test]
    fn test_submit_with_empty_fields_spawns_nothing() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.field_errors.len(), 2);
        assert!(!app.is_loading());
        assert!(app.result.is_none());
    }

    #[test]
    fn test_submit_with_one_empty_field_reports_one_error() {
        let mut app = test_app();
        update(
            &mut app,
            Action::SelectStation {
                field: Field::SourceStation,
                station: "Miyapur".into(),
            },
        );
        assert_eq!(update(&mut app, Action::Submit), Effect::None);
        assert_eq!(app.field_errors.len(), 1);
        assert_eq!(
            app.field_errors.get(Field::DestinationStation),
            Some("*Destination Station is required")
        );
    }

    #[test]
    fn test_selecting_clears_that_fields_error() {
        let mut app = test_app();
        update(&mut app, Action::Submit);
        update(
            &mut app,
            Action::SelectStation {
                field: Field::SourceStation,
                station: "Miyapur".into(),
            },
        );
        assert!(app.field_errors.get(Field::SourceStation).is_none());
        assert!(app.field_errors.get(Field::DestinationStation).is_some());
    }

    #[test]
    fn test_valid_submit_spawns_query() {
        let mut app = test_app();
        select_both(&mut app);
        let effect = update(&mut app, Action::Submit);
        assert_eq!(
            effect,
            Effect::SpawnJourneyQuery {
                id: 1,
                query: JourneyQuery {
                    source_station: "Miyapur".into(),
                    destination_station: "Ameerpet".into(),
                },
            }
        );
        assert!(app.is_loading());
        assert!(app.field_errors.is_empty());
        // Selections persist after submitting
        assert_eq!(app.selection.get(Field::SourceStation), Some("Miyapur"));
    }

    #[test]
    fn test_result_untouched_while_query_in_flight() {
        let mut app = test_app();
        select_both(&mut app);
        update(&mut app, Action::Submit);
        resolve(&mut app, 1, JourneyOutcome::Rejected("No path".into()));
        update(&mut app, Action::Submit);
        assert!(app.is_loading());
        assert_eq!(app.result, Some(vec!["Error : No path".to_string()]));
    }

    #[test]
    fn test_success_result_lines() {
        let mut app = test_app();
        select_both(&mut app);
        update(&mut app, Action::Submit);
        resolve(&mut app, 1, route(json!(5)));
        assert_eq!(
            app.result,
            Some(vec![
                "Distance: 5".to_string(),
                "Time: 12 min".to_string(),
                "Cost: 20".to_string(),
            ])
        );
        assert!(!app.is_loading());
        assert_eq!(app.result_received_at.as_deref(), Some("10:00:00"));
    }

    #[test]
    fn test_second_result_replaces_first() {
        let mut app = test_app();
        select_both(&mut app);
        update(&mut app, Action::Submit);
        resolve(&mut app, 1, route(json!(5)));
        update(&mut app, Action::Submit);
        resolve(&mut app, 2, route(json!(9)));
        let result = app.result.unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[0], "Distance: 9");
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut app = test_app();
        select_both(&mut app);
        update(&mut app, Action::Submit);
        update(&mut app, Action::Submit);
        resolve(&mut app, 1, route(json!(5)));
        assert!(app.result.is_none());
        assert!(app.is_loading());
        resolve(&mut app, 2, JourneyOutcome::Network("boom".into()));
        assert_eq!(app.result, Some(vec!["Error: boom".to_string()]));
    }

    #[test]
    fn test_toggle_map_flips_each_call() {
        let mut app = test_app();
        update(&mut app, Action::ToggleMap);
        assert!(app.map_visible);
        update(&mut app, Action::ToggleMap);
        assert!(!app.map_visible);
    }

    #[test]
    fn test_topology_loaded_replaces_wholesale() {
        let mut app = test_app();
        update(
            &mut app,
            Action::TopologyLoaded(LineTopology::new(vec!["A".into()], vec![], vec![])),
        );
        update(
            &mut app,
            Action::TopologyLoaded(LineTopology::new(vec![], vec!["B".into()], vec![])),
        );
        assert!(app.topology.stations(Line::Blue).is_empty());
        assert_eq!(app.topology.stations(Line::Red), ["B".to_string()]);
    }

    #[test]
    fn test_topology_failure_is_not_a_result() {
        let mut app = test_app();
        update(&mut app, Action::TopologyFailed("HTTP 500".into()));
        assert!(app.result.is_none());
        assert!(app.topology.is_empty());
        assert_eq!(app.status_message, "Station list unavailable");
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
