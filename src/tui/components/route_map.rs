//! # RouteMap Component
//!
//! Schematic map of the network: one column per line, stations top to bottom.
//! Taller than the screen on a real network, so it scrolls (PageUp/PageDown,
//! mouse wheel) inside a `ScrollView`.
//!
//! ```text
//!  Blue Line        Red Line         Green Line
//!  ● Miyapur        ● JNTU College   ● JBS Parade Ground
//!  │                │                │
//!  ● Ameerpet       ● Parade Ground  ● MG Bus Station
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::topology::{Line, LineTopology};
use crate::tui::component::Component;
use crate::tui::components::{line_color, truncate_str};

/// Rows scrolled per ScrollUp/ScrollDown event.
pub const SCROLL_STEP: u16 = 4;

pub struct RouteMap<'a> {
    pub topology: &'a LineTopology,
    pub scroll_state: &'a mut ScrollViewState,
}

impl<'a> RouteMap<'a> {
    pub fn new(topology: &'a LineTopology, scroll_state: &'a mut ScrollViewState) -> Self {
        Self {
            topology,
            scroll_state,
        }
    }

    /// Rows needed to draw the longest line: header plus station/connector pairs.
    pub fn content_height(topology: &LineTopology) -> u16 {
        let longest = Line::ALL
            .iter()
            .map(|line| topology.stations(*line).len())
            .max()
            .unwrap_or(0);
        (1 + longest.saturating_mul(2).saturating_sub(1)).min(u16::MAX as usize) as u16
    }

    fn column(line: Line, stations: &[String], width: usize) -> Paragraph<'static> {
        let color = line_color(line);
        let mut rows = vec![TextLine::from(Span::styled(
            line.label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ))];
        for (i, name) in stations.iter().enumerate() {
            if i > 0 {
                rows.push(TextLine::from(Span::styled("│", Style::default().fg(color))));
            }
            rows.push(TextLine::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::raw(truncate_str(name, width.saturating_sub(3))),
            ]));
        }
        Paragraph::new(rows)
    }
}

impl Component for RouteMap<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Route Map ")
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.topology.is_empty() {
            frame.render_widget(
                Paragraph::new("No stations loaded.").style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return;
        }

        // Leave one column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let content_height = Self::content_height(self.topology);

        // Keep the offset within bounds when the map shrinks or the window grows
        let max_y = content_height.saturating_sub(inner.height);
        let offset = self.scroll_state.offset();
        if offset.y > max_y {
            self.scroll_state.set_offset(Position { x: offset.x, y: max_y });
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .split(Rect::new(0, 0, content_width, content_height));
        for (line, column_area) in Line::ALL.into_iter().zip(columns.iter()) {
            let paragraph = Self::column(
                line,
                self.topology.stations(line),
                column_area.width as usize,
            );
            scroll_view.render_widget(paragraph, *column_area);
        }

        frame.render_stateful_widget(scroll_view, inner, self.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_topology;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_content_height() {
        // Blue has 3 stations: header + 3 stations + 2 connectors
        assert_eq!(RouteMap::content_height(&sample_topology()), 6);
        assert_eq!(RouteMap::content_height(&LineTopology::default()), 1);
    }

    #[test]
    fn test_render_all_lines() {
        let backend = TestBackend::new(90, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let topology = sample_topology();
        let mut scroll = ScrollViewState::default();

        terminal
            .draw(|f| {
                let area = f.area();
                RouteMap::new(&topology, &mut scroll).render(f, area)
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Route Map"));
        assert!(text.contains("Blue Line"));
        assert!(text.contains("Red Line"));
        assert!(text.contains("Green Line"));
        assert!(text.contains("LB Nagar"));
        assert!(text.contains("MG Bus Station"));
    }

    #[test]
    fn test_render_clamps_scroll_offset() {
        let backend = TestBackend::new(90, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let topology = sample_topology();
        let mut scroll = ScrollViewState::default();
        scroll.set_offset(Position { x: 0, y: 500 });

        terminal
            .draw(|f| {
                let area = f.area();
                RouteMap::new(&topology, &mut scroll).render(f, area)
            })
            .unwrap();

        // Content fits in the viewport, so there is nothing to scroll
        assert_eq!(scroll.offset().y, 0);
    }
}
