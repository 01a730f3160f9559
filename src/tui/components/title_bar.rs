//! # TitleBar Component
//!
//! Top status bar. Purely presentational: every field is a prop.
//!
//! The title text changes based on state:
//!
//! 1. **Query in flight**: `"Metro Journey Planner (127.0.0.1:5000) | 42 stations | ⠙ Calculating..."`
//! 2. **Status message**: `"Metro Journey Planner (127.0.0.1:5000) | 42 stations"`
//! 3. **Default**: `"Metro Journey Planner (127.0.0.1:5000)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    /// Backend origin, shown without the scheme
    pub base_url: String,
    pub status_message: String,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(base_url: &str, status_message: &str, is_loading: bool, spinner_frame: usize) -> Self {
        Self {
            base_url: base_url.to_string(),
            status_message: status_message.to_string(),
            is_loading,
            spinner_frame,
        }
    }

    fn title_text(&self) -> String {
        let origin = self
            .base_url
            .trim_start_matches("http://")
            .trim_start_matches("https://");
        let mut text = format!("Metro Journey Planner ({origin})");
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.is_loading {
            let frame = SPINNER[self.spinner_frame % SPINNER.len()];
            text.push_str(&format!(" | {frame} Calculating..."));
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.title_text(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
