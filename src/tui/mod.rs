//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screens,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm Event → TuiEvent → screen handler → MenuEvent / DialogEvent
//!                                                    │
//!                                          Action ◀──┘
//!                                            │
//!                                   update() → Effect
//! ```
//!
//! Nothing animates, so the loop only redraws after an event arrived.

pub mod component;
pub mod components;
mod event;
pub mod ui;

pub use event::TuiEvent;

use log::{debug, error, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DialogEvent, ExitDialogState, MainMenuState, MenuEvent, PlaceholderEvent, PlaceholderState,
};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core state)
pub struct TuiState {
    // Persistent component states, one per screen
    pub main_menu: MainMenuState,
    pub settings: PlaceholderState,
    pub game: PlaceholderState,
    pub exit_dialog: ExitDialogState,
    pub icons: bool,
}

impl TuiState {
    pub fn new(icons: bool) -> Self {
        Self {
            main_menu: MainMenuState::new(),
            settings: PlaceholderState::new(),
            game: PlaceholderState::new(),
            exit_dialog: ExitDialogState::new(),
            icons,
        }
    }

    /// Fresh presentation state for a screen that just came on display.
    fn reset_screen(&mut self, route: Route) {
        match route {
            Route::MainMenu => self.main_menu = MainMenuState::new(),
            Route::Settings => self.settings = PlaceholderState::new(),
            Route::Game => self.game = PlaceholderState::new(),
        }
    }
}

/// Route one terminal event to whatever is on top and return the action it asks for.
pub fn dispatch(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::ForceQuit);
    }

    // The dialog is modal: it gets every event while shown
    if app.exit_dialog_visible() {
        return tui.exit_dialog.handle_event(event).map(|dialog_event| match dialog_event {
            DialogEvent::Confirm => Action::ConfirmExit,
            DialogEvent::Dismiss => Action::DismissExit,
        });
    }

    if matches!(event, TuiEvent::Back) {
        return Some(Action::NavigateBack);
    }

    match app.current_screen() {
        Route::MainMenu => tui.main_menu.handle_event(event).map(|menu_event| match menu_event {
            MenuEvent::StartGame => Action::Navigate(Route::Game),
            MenuEvent::OpenSettings => Action::Navigate(Route::Settings),
            MenuEvent::Exit => Action::RequestExit,
        }),
        Route::Settings => tui
            .settings
            .handle_event(event)
            .map(|PlaceholderEvent::Back| Action::NavigateBack),
        Route::Game => tui
            .game
            .handle_event(event)
            .map(|PlaceholderEvent::Back| Action::NavigateBack),
    }
}

/// Apply an action and keep presentation state in step with what changed.
pub fn apply(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let depth_before = app.nav.depth();
    let screen_before = app.current_screen();
    let dialog_before = app.exit_dialog_visible();

    let effect = update(app, action);

    if app.nav.depth() != depth_before || app.current_screen() != screen_before {
        tui.reset_screen(app.current_screen());
    }
    if app.exit_dialog_visible() && !dialog_before {
        tui.exit_dialog = ExitDialogState::new();
    }
    effect
}

struct TerminalModeGuard {
    mouse: bool,
}

impl TerminalModeGuard {
    fn new(mouse: bool) -> std::io::Result<Self> {
        if mouse {
            execute!(stdout(), EnableMouseCapture)?;
            info!("Mouse capture enabled");
        }
        Ok(Self { mouse })
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        if self.mouse {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
    }
}

/// Take over the terminal and run until the user leaves.
///
/// Fails with the underlying I/O error when there is no terminal to take over.
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(config.icons);

    let mut terminal = ratatui::try_init().inspect_err(|e| {
        ratatui::restore();
        error!("Cannot take over the terminal: {}", e);
    })?;
    let result = event_loop(&mut terminal, &mut app, &mut tui, config.mouse);
    ratatui::restore();

    info!("Shutting down on {}", app.current_screen());
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    mouse: bool,
) -> std::io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new(mouse)?;
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = dispatch(app, tui, &event) else {
                continue;
            };
            debug!("{:?} -> {:?}", event, action);
            if apply(app, tui, action) == Effect::Quit {
                return Ok(());
            }
        }
    }
}
