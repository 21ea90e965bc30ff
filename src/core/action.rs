//! # Actions
//!
//! Everything that can happen in the shell becomes an `Action`.
//! User taps "Настройки"? That's `Action::Navigate(Route::Settings)`.
//! User taps "Назад в меню"? That's `Action::NavigateBack`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the adapter what to do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::route::Route;
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Push a screen onto the back stack.
    Navigate(Route),
    /// Pop the back stack (the "Назад в меню" button or the platform back key).
    NavigateBack,
    /// "Выход" was tapped on the main menu.
    RequestExit,
    /// "Да" in the exit dialog.
    ConfirmExit,
    /// "Нет" in the exit dialog, or a dismiss request (Esc, click outside).
    DismissExit,
    /// Ctrl+C: leave without asking.
    ForceQuit,
}

/// What the adapter must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} on {}", action, app.current_screen());

    match action {
        Action::Navigate(route) => {
            if app.exit_dialog_visible() {
                debug!("Navigate({}) ignored: exit dialog is open", route);
                return Effect::None;
            }
            app.nav.navigate(route);
            Effect::None
        }
        Action::NavigateBack => {
            if app.exit_dialog_visible() {
                // Back while the dialog is up is a dismiss request.
                app.nav.current_entry_mut().exit_dialog_visible = false;
                return Effect::None;
            }
            if !app.nav.pop_back_stack() && app.current_screen() == Route::MainMenu {
                // Back on the root menu asks before leaving.
                app.nav.current_entry_mut().exit_dialog_visible = true;
            }
            Effect::None
        }
        Action::RequestExit => {
            if app.current_screen() == Route::MainMenu {
                app.nav.current_entry_mut().exit_dialog_visible = true;
            } else {
                debug!("RequestExit ignored on {}", app.current_screen());
            }
            Effect::None
        }
        Action::ConfirmExit => {
            if !app.exit_dialog_visible() {
                debug!("ConfirmExit ignored: no dialog shown");
                return Effect::None;
            }
            info!("Exit confirmed");
            app.nav.current_entry_mut().exit_dialog_visible = false;
            app.should_quit = true;
            Effect::Quit
        }
        Action::DismissExit => {
            app.nav.current_entry_mut().exit_dialog_visible = false;
            Effect::None
        }
        Action::ForceQuit => {
            info!("Force quit");
            app.should_quit = true;
            Effect::Quit
        }
    }
}
