use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::journey_form::button;
use crate::tui::components::{FormFocus, JourneyForm, OutputPanel, RouteMap, StationPicker, TitleBar};
use crate::tui::TuiState;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const HELP_TEXT: &str = "Tab/↑↓ Move  Enter Select  m Map  q Quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min, Percentage};

    let map_constraint = if app.map_visible { Percentage(50) } else { Length(0) };
    let [title_area, body_area, toggle_area, map_area] =
        Layout::vertical([Length(1), Min(12), Length(1), map_constraint]).areas(frame.area());
    let [form_area, output_area] =
        Layout::horizontal([Percentage(42), Percentage(58)]).areas(body_area);

    TitleBar::new(
        &app.base_url,
        &app.status_message,
        app.is_loading(),
        spinner_frame,
    )
    .render(frame, title_area);

    JourneyForm::new(&app.selection, &app.field_errors, tui.focus).render(frame, form_area);

    OutputPanel::new(app.result.as_deref(), app.result_received_at.as_deref())
        .render(frame, output_area);

    draw_toggle_row(frame, toggle_area, app.map_visible, tui.focus == FormFocus::MapToggle);

    if app.map_visible {
        RouteMap::new(&app.topology, &mut tui.map_scroll).render(frame, map_area);
    }

    // Overlay goes last so it sits on top
    if let Some(picker) = tui.picker.as_mut() {
        let area = frame.area();
        StationPicker::new(picker).render(frame, area);
    }
}

fn draw_toggle_row(frame: &mut Frame, area: Rect, map_visible: bool, focused: bool) {
    let label = if map_visible { "Hide Map" } else { "Show Map" };
    let line = Line::from(vec![
        Span::raw(" "),
        button(label, focused),
        Span::raw("   "),
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(line, area);
}
