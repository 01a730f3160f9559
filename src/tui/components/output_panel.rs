//! # OutputPanel Component
//!
//! Shows the result message of the last completed journey query, one line
//! per entry. Nothing is shown before the first query resolves.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct OutputPanel<'a> {
    pub result: Option<&'a [String]>,
    /// When the result arrived, shown in the bottom border
    pub received_at: Option<&'a str>,
}

impl<'a> OutputPanel<'a> {
    pub fn new(result: Option<&'a [String]>, received_at: Option<&'a str>) -> Self {
        Self {
            result,
            received_at,
        }
    }
}

fn line_style(text: &str) -> Style {
    if text.starts_with("Error") {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }
}

impl Component for OutputPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = Block::bordered()
            .title(" Output ")
            .border_style(Style::default().fg(Color::Yellow));
        if let Some(at) = self.received_at {
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" updated {at} "),
                    Style::default().fg(Color::DarkGray),
                ))
                .right_aligned(),
            );
        }

        let lines: Vec<Line> = self
            .result
            .unwrap_or_default()
            .iter()
            .flat_map(|text| {
                [
                    Line::default(),
                    Line::from(Span::styled(text.as_str(), line_style(text))),
                ]
            })
            .collect();

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
