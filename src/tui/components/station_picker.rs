//! # Station Picker Component
//!
//! Overlay list for choosing a station, opened with Enter on a station field.
//! Stations are grouped under their line's header. Headers can't be selected.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `StationPickerState` lives in `TuiState`
//! - `StationPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};

use crate::core::form::Field;
use crate::core::topology::{Line, LineTopology, StationOption};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{centered_rect, line_color, truncate_str};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Row {
    Header(Line),
    Station(String),
}

/// Persistent state for the station picker overlay.
pub struct StationPickerState {
    pub field: Field,
    rows: Vec<Row>,
    /// Row index of the highlighted station, `None` if there are no stations.
    selected: Option<usize>,
    list_state: ListState,
}

impl StationPickerState {
    /// Build the picker for `field`, highlighting `current` if it is listed.
    pub fn new(field: Field, topology: &LineTopology, current: Option<&str>) -> Self {
        let rows: Vec<Row> = topology
            .options()
            .into_iter()
            .map(|option| match option {
                StationOption::Group(line) => Row::Header(line),
                StationOption::Station { name, .. } => Row::Station(name.to_string()),
            })
            .collect();

        let is_station = |row: &Row| matches!(row, Row::Station(_));
        let selected = current
            .and_then(|name| rows.iter().position(|row| *row == Row::Station(name.to_string())))
            .or_else(|| rows.iter().position(is_station));

        let mut list_state = ListState::default();
        list_state.select(selected);
        Self {
            field,
            rows,
            selected,
            list_state,
        }
    }

    pub fn selected_station(&self) -> Option<&str> {
        match self.rows.get(self.selected?)? {
            Row::Station(name) => Some(name),
            Row::Header(_) => None,
        }
    }

    fn move_selection(&mut self, forward: bool) {
        let Some(current) = self.selected else {
            return;
        };
        let next = if forward {
            (current + 1..self.rows.len()).find(|i| matches!(self.rows[*i], Row::Station(_)))
        } else {
            (0..current).rev().find(|i| matches!(self.rows[*i], Row::Station(_)))
        };
        if let Some(idx) = next {
            self.selected = Some(idx);
            self.list_state.select(Some(idx));
        }
    }
}

/// Events emitted by the station picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Select(String),
    Dismiss,
}

impl EventHandler for StationPickerState {
    type Event = PickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PickerEvent> {
        match event {
            TuiEvent::Escape => Some(PickerEvent::Dismiss),
            TuiEvent::CursorUp | TuiEvent::FocusPrev => {
                self.move_selection(false);
                None
            }
            TuiEvent::CursorDown | TuiEvent::FocusNext => {
                self.move_selection(true);
                None
            }
            TuiEvent::Submit => self
                .selected_station()
                .map(|name| PickerEvent::Select(name.to_string())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the station picker overlay.
pub struct StationPicker<'a> {
    state: &'a mut StationPickerState,
}

impl<'a> StationPicker<'a> {
    pub fn new(state: &'a mut StationPickerState) -> Self {
        Self { state }
    }
}

impl Component for StationPicker<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 70, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.state.field.label()))
            .title_alignment(Alignment::Left)
            .title_bottom(TextLine::from(" ↑↓ Move  Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        if self.state.selected.is_none() {
            let empty = Paragraph::new("No stations loaded.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let inner_width = overlay.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .state
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| match row {
                Row::Header(line) => ListItem::new(TextLine::from(Span::styled(
                    format!("── {} ──", line.label()),
                    Style::default()
                        .fg(line_color(*line))
                        .add_modifier(Modifier::BOLD),
                ))),
                Row::Station(name) => {
                    let style = if Some(i) == self.state.selected {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    let name = truncate_str(name, inner_width.saturating_sub(2));
                    ListItem::new(TextLine::from(Span::styled(format!("  {name}"), style)))
                }
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_topology;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_new_selects_first_station_not_header() {
        let picker = StationPickerState::new(Field::SourceStation, &sample_topology(), None);
        assert_eq!(picker.selected_station(), Some("Miyapur"));
    }

    #[test]
    fn test_new_highlights_current_selection() {
        let picker = StationPickerState::new(
            Field::DestinationStation,
            &sample_topology(),
            Some("Parade Ground"),
        );
        assert_eq!(picker.selected_station(), Some("Parade Ground"));
    }

    #[test]
    fn test_navigation_skips_headers() {
        let mut picker = StationPickerState::new(
            Field::SourceStation,
            &sample_topology(),
            Some("LB Nagar"),
        );
        picker.handle_event(&TuiEvent::CursorDown);
        // Jumps over the Red Line header
        assert_eq!(picker.selected_station(), Some("JNTU College"));
        picker.handle_event(&TuiEvent::CursorUp);
        assert_eq!(picker.selected_station(), Some("LB Nagar"));
    }

    #[test]
    fn test_navigation_stops_at_ends() {
        let mut picker = StationPickerState::new(Field::SourceStation, &sample_topology(), None);
        picker.handle_event(&TuiEvent::CursorUp);
        assert_eq!(picker.selected_station(), Some("Miyapur"));

        let mut picker = StationPickerState::new(
            Field::SourceStation,
            &sample_topology(),
            Some("MG Bus Station"),
        );
        picker.handle_event(&TuiEvent::CursorDown);
        assert_eq!(picker.selected_station(), Some("MG Bus Station"));
    }

    #[test]
    fn test_submit_and_dismiss() {
        let mut picker = StationPickerState::new(Field::SourceStation, &sample_topology(), None);
        assert_eq!(
            picker.handle_event(&TuiEvent::Submit),
            Some(PickerEvent::Select("Miyapur".into()))
        );
        assert_eq!(
            picker.handle_event(&TuiEvent::Escape),
            Some(PickerEvent::Dismiss)
        );
    }

    #[test]
    fn test_empty_topology_cannot_submit() {
        let mut picker =
            StationPickerState::new(Field::SourceStation, &LineTopology::default(), None);
        assert_eq!(picker.selected_station(), None);
        assert_eq!(picker.handle_event(&TuiEvent::Submit), None);
        assert_eq!(picker.handle_event(&TuiEvent::CursorDown), None);
    }

    #[test]
    fn test_render_shows_line_headers() {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = StationPickerState::new(Field::SourceStation, &sample_topology(), None);

        terminal
            .draw(|f| {
                let area = f.area();
                StationPicker::new(&mut state).render(f, area)
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Source Station"));
        assert!(text.contains("Blue Line"));
        assert!(text.contains("Green Line"));
        assert!(text.contains("Miyapur"));
    }

    #[test]
    fn test_render_empty() {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state =
            StationPickerState::new(Field::SourceStation, &LineTopology::default(), None);

        terminal
            .draw(|f| {
                let area = f.area();
                StationPicker::new(&mut state).render(f, area)
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("No stations loaded."));
    }
}
