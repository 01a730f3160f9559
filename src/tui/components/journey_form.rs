//! # JourneyForm Component
//!
//! The "Input" panel: two station fields, their validation messages and the
//! Calculate button. Stateless; the focused control is a prop from `TuiState`.
//!
//! ```text
//! ┌ Input ──────────────────────┐
//! │ Source Station:             │
//! │  [ Miyapur               ▾ ]│
//! │                             │
//! │ Destination Station:        │
//! │  [ ------ Select ------  ▾ ]│
//! │  *Destination Station is required
//! │                             │
//! │  [ Calculate ]              │
//! └─────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::form::{Field, FieldErrors, JourneySelection};
use crate::tui::component::Component;
use crate::tui::components::truncate_str;

const PLACEHOLDER: &str = "------ Select ------";

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Source,
    Destination,
    Calculate,
    MapToggle,
}

impl FormFocus {
    const ORDER: [FormFocus; 4] = [
        FormFocus::Source,
        FormFocus::Destination,
        FormFocus::Calculate,
        FormFocus::MapToggle,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// The station field this focus points at, if any.
    pub fn field(self) -> Option<Field> {
        match self {
            FormFocus::Source => Some(Field::SourceStation),
            FormFocus::Destination => Some(Field::DestinationStation),
            _ => None,
        }
    }
}

/// A push button, reversed when focused.
pub fn button(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    Span::styled(format!("[ {label} ]"), style)
}

pub struct JourneyForm<'a> {
    pub selection: &'a JourneySelection,
    pub errors: &'a FieldErrors,
    pub focus: FormFocus,
}

impl<'a> JourneyForm<'a> {
    pub fn new(selection: &'a JourneySelection, errors: &'a FieldErrors, focus: FormFocus) -> Self {
        Self {
            selection,
            errors,
            focus,
        }
    }

    fn field_lines(&self, field: Field, width: usize) -> Vec<Line<'static>> {
        let focused = self.focus.field() == Some(field);
        let mut lines = vec![Line::from(Span::styled(
            format!("{}:", field.label()),
            Style::default().fg(Color::White),
        ))];

        // "  [ " + value + " ▾ ]"
        let value_width = width.saturating_sub(9);
        let (value, value_style) = match self.selection.get(field) {
            Some(station) => (station, Style::default().fg(Color::White)),
            None => (PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        };
        let value = format!(
            "{:<w$}",
            truncate_str(value, value_width),
            w = value_width
        );
        let border_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("[ ", border_style),
            Span::styled(value, value_style),
            Span::styled(" ▾ ]", border_style),
        ]));

        if let Some(message) = self.errors.get(field) {
            lines.push(Line::from(Span::styled(
                format!("  {message}"),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::default());
        lines
    }
}

impl Component for JourneyForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Input ")
            .border_style(Style::default().fg(Color::Yellow));
        let inner_width = block.inner(area).width as usize;

        let mut lines = Vec::new();
        for field in Field::ALL {
            lines.extend(self.field_lines(field, inner_width));
        }
        lines.push(Line::from(vec![
            Span::raw("  "),
            button("Calculate", self.focus == FormFocus::Calculate),
        ]));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
