//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Background Work
//!
//! Network calls run as tokio tasks and report back over an mpsc channel as
//! `Action`s. The event loop is the only writer of `App`, so no locking is
//! needed. Every task is owned by a `TaskScope`; dropping the scope (on exit)
//! aborts whatever is still in flight, so no result lands after teardown.
//!
//! ## Redraw Strategy
//!
//! - **Query in flight**: draws every ~80ms to animate the spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on events or background results.

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tokio::task::{AbortHandle, JoinHandle};
use tui_scrollview::ScrollViewState;

use crate::backend::{HttpBackend, JourneyBackend};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::form::JourneyQuery;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::route_map::SCROLL_STEP;
use crate::tui::components::{FormFocus, PickerEvent, StationPickerState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: FormFocus,
    /// Station picker overlay (None = hidden)
    pub picker: Option<StationPickerState>,
    pub map_scroll: ScrollViewState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: FormFocus::default(),
            picker: None,
            map_scroll: ScrollViewState::default(),
        }
    }

    /// Open the station picker for the focused field, if a field is focused.
    pub fn open_picker(&mut self, app: &App) {
        if let Some(field) = self.focus.field() {
            self.picker = Some(StationPickerState::new(
                field,
                &app.topology,
                app.selection.get(field),
            ));
        }
    }
}

/// Owns the abort handles of every background task started by the TUI.
///
/// Dropping the scope aborts everything still running.
#[derive(Default)]
pub struct TaskScope {
    topology: Option<AbortHandle>,
    journey: Option<AbortHandle>,
}

impl TaskScope {
    pub fn set_topology(&mut self, handle: AbortHandle) {
        if let Some(previous) = self.topology.replace(handle) {
            previous.abort();
        }
    }

    /// Track a new journey query, aborting the one it supersedes.
    pub fn set_journey(&mut self, handle: AbortHandle) {
        if let Some(previous) = self.journey.replace(handle) {
            if !previous.is_finished() {
                debug!("Aborting superseded journey query");
            }
            previous.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for handle in [self.topology.take(), self.journey.take()].into_iter().flatten() {
            handle.abort();
        }
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.abort_all();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Route one terminal event through the picker or the form.
///
/// Returns the effect the caller must carry out.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }
    if matches!(event, TuiEvent::Resize) {
        return Effect::None;
    }

    // When the picker is open, route all events to it
    if let Some(picker) = tui.picker.as_mut() {
        let field = picker.field;
        return match picker.handle_event(&event) {
            Some(PickerEvent::Select(station)) => {
                tui.picker = None;
                update(app, Action::SelectStation { field, station })
            }
            Some(PickerEvent::Dismiss) => {
                tui.picker = None;
                Effect::None
            }
            None => Effect::None,
        };
    }

    match event {
        TuiEvent::Escape | TuiEvent::InputChar('q') => update(app, Action::Quit),
        TuiEvent::FocusNext | TuiEvent::CursorDown => {
            tui.focus = tui.focus.next();
            Effect::None
        }
        TuiEvent::FocusPrev | TuiEvent::CursorUp => {
            tui.focus = tui.focus.prev();
            Effect::None
        }
        TuiEvent::InputChar('m') => update(app, Action::ToggleMap),
        TuiEvent::ScrollUp | TuiEvent::ScrollDown if app.map_visible => {
            for _ in 0..SCROLL_STEP {
                if matches!(event, TuiEvent::ScrollUp) {
                    tui.map_scroll.scroll_up();
                } else {
                    tui.map_scroll.scroll_down();
                }
            }
            Effect::None
        }
        TuiEvent::Submit => match tui.focus {
            FormFocus::Source | FormFocus::Destination => {
                tui.open_picker(app);
                Effect::None
            }
            FormFocus::Calculate => update(app, Action::Submit),
            FormFocus::MapToggle => update(app, Action::ToggleMap),
        },
        _ => Effect::None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn JourneyBackend> = Arc::new(HttpBackend::new(config.base_url.clone()));
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut scope = TaskScope::default();

    // Fetch the station list once, at startup
    scope.set_topology(spawn_topology_fetch(backend.clone(), tx.clone()).abort_handle());

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match dispatch(&mut app, &mut tui, event) {
                Effect::Quit => break 'main,
                Effect::SpawnJourneyQuery { id, query } => {
                    let handle = spawn_journey_query(backend.clone(), id, query, tx.clone());
                    scope.set_journey(handle.abort_handle());
                }
                Effect::None => {}
            }
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                break 'main;
            }
        }
    }

    // Nothing may report back once the UI is gone
    scope.abort_all();

    ratatui::restore();
    Ok(())
}

/// Fetch the station taxonomy in the background.
///
/// Failure is reported as `TopologyFailed`, which only logs. The topology
/// stays empty.
pub fn spawn_topology_fetch(
    backend: Arc<dyn JourneyBackend>,
    tx: mpsc::Sender<Action>,
) -> JoinHandle<()> {
    info!("Spawning topology fetch");
    tokio::spawn(async move {
        let action = match backend.fetch_topology().await {
            Ok(topology) => Action::TopologyLoaded(topology),
            Err(e) => Action::TopologyFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send topology result: receiver dropped");
        }
    })
}

/// Run one journey query in the background and report its outcome.
pub fn spawn_journey_query(
    backend: Arc<dyn JourneyBackend>,
    id: u64,
    query: JourneyQuery,
    tx: mpsc::Sender<Action>,
) -> JoinHandle<()> {
    info!(
        "Spawning journey query #{}: {} -> {}",
        id, query.source_station, query.destination_station
    );
    tokio::spawn(async move {
        let request_start = std::time::Instant::now();
        let outcome = backend.plan_journey(&query).await;
        debug!(
            "Journey query #{} took {}ms",
            id,
            request_start.elapsed().as_millis()
        );
        let received_at = chrono::Local::now().format("%H:%M:%S").to_string();
        if tx
            .send(Action::JourneyResolved {
                id,
                outcome,
                received_at,
            })
            .is_err()
        {
            warn!("Failed to send journey result #{}: receiver dropped", id);
        }
    })
}
