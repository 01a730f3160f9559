//! # Journey Form
//!
//! The two required station fields and their client-side validation.
//! A submission only turns into a `JourneyQuery` when both fields are filled;
//! otherwise it yields one error per empty field and nothing hits the network.
//!
//! Selections are not reset after a submission. Whatever the user picked
//! stays in the fields for the next query.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SourceStation,
    DestinationStation,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::SourceStation, Field::DestinationStation];

    pub fn label(&self) -> &'static str {
        match self {
            Field::SourceStation => "Source Station",
            Field::DestinationStation => "Destination Station",
        }
    }

    /// Message shown under the field when it is empty at submit time.
    pub fn required_message(&self) -> &'static str {
        match self {
            Field::SourceStation => "*Source Station is required",
            Field::DestinationStation => "*Destination Station is required",
        }
    }
}

/// What the user currently has selected in each field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JourneySelection {
    pub source_station: Option<String>,
    pub destination_station: Option<String>,
}

impl JourneySelection {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::SourceStation => self.source_station.as_deref(),
            Field::DestinationStation => self.destination_station.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, station: String) {
        let slot = match field {
            Field::SourceStation => &mut self.source_station,
            Field::DestinationStation => &mut self.destination_station,
        };
        *slot = Some(station);
    }

    /// Check both fields are present and non-empty.
    pub fn validate(&self) -> Result<JourneyQuery, FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            if self.get(field).is_none_or(str::is_empty) {
                errors.insert(field);
            }
        }

        match (&self.source_station, &self.destination_station) {
            (Some(source), Some(destination)) if errors.is_empty() => Ok(JourneyQuery {
                source_station: source.clone(),
                destination_station: destination.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// Per-field validation messages. At most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    source_station: Option<&'static str>,
    destination_station: Option<&'static str>,
}

impl FieldErrors {
    fn slot(&mut self, field: Field) -> &mut Option<&'static str> {
        match field {
            Field::SourceStation => &mut self.source_station,
            Field::DestinationStation => &mut self.destination_station,
        }
    }

    pub fn insert(&mut self, field: Field) {
        *self.slot(field) = Some(field.required_message());
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::SourceStation => self.source_station,
            Field::DestinationStation => self.destination_station,
        }
    }

    pub fn len(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A validated journey query, ready to be sent as the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyQuery {
    pub source_station: String,
    pub destination_station: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(source: Option<&str>, destination: Option<&str>) -> JourneySelection {
        JourneySelection {
            source_station: source.map(String::from),
            destination_station: destination.map(String::from),
        }
    }

    #[test]
    fn test_validate_both_filled() {
        let query = selection(Some("Miyapur"), Some("Ameerpet")).validate().unwrap();
        assert_eq!(query.source_station, "Miyapur");
        assert_eq!(query.destination_station, "Ameerpet");
    }

    #[test]
    fn test_validate_missing_source_only() {
        let errors = selection(None, Some("Ameerpet")).validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::SourceStation),
            Some("*Source Station is required")
        );
        assert_eq!(errors.get(Field::DestinationStation), None);
    }

    #[test]
    fn test_validate_missing_both() {
        let errors = selection(None, None).validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(Field::DestinationStation),
            Some("*Destination Station is required")
        );
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let errors = selection(Some("Miyapur"), Some("")).validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(Field::DestinationStation).is_some());
    }

    #[test]
    fn test_same_station_is_allowed_locally() {
        // The backend decides whether a zero-length trip is valid
        assert!(selection(Some("Ameerpet"), Some("Ameerpet")).validate().is_ok());
    }

    #[test]
    fn test_clear_removes_single_field_error() {
        let mut errors = selection(None, None).validate().unwrap_err();
        errors.clear(Field::SourceStation);
        assert_eq!(errors.len(), 1);
        assert!(errors.get(Field::SourceStation).is_none());
    }

    #[test]
    fn test_query_serializes_to_backend_field_names() {
        let query = JourneyQuery {
            source_station: "Miyapur".into(),
            destination_station: "Ameerpet".into(),
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "source_station": "Miyapur",
                "destination_station": "Ameerpet"
            })
        );
    }
}
