//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing backend origin and status
//! - `JourneyForm`: Source/destination fields, errors and the Calculate button
//! - `OutputPanel`: Result message lines of the last query
//! - `RouteMap`: Station map of every line, shown when toggled on
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `StationPicker`: Grouped station list overlay
//!
//! Components receive external data as props, never by reaching into `App`
//! directly:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! OutputPanel::new(app.result.as_deref(), None).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! OutputPanel::render(frame, area); // reads from global App
//! ```

pub mod journey_form;
pub mod output_panel;
pub mod route_map;
pub mod station_picker;
pub mod title_bar;

pub use journey_form::{FormFocus, JourneyForm};
pub use output_panel::OutputPanel;
pub use route_map::RouteMap;
pub use station_picker::{PickerEvent, StationPicker, StationPickerState};
pub use title_bar::TitleBar;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::topology::Line;

pub fn line_color(line: Line) -> Color {
    match line {
        Line::Blue => Color::Blue,
        Line::Red => Color::Red,
        Line::Green => Color::Green,
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
