//! # Navigation Host
//!
//! A back stack of screen entries. The top entry is the screen on display.
//!
//! ```text
//! navigate(Game)         pop_back_stack()
//! [main_menu]  ──────▶  [main_menu, game]  ──────▶  [main_menu]
//! ```
//!
//! Screen-local state lives inside its entry, so it is created when the
//! entry is pushed and dropped when the entry is popped. Navigating forward
//! also resets the state of the screen being left: the old screen is no
//! longer on display and has nothing to remember.

use log::debug;

use crate::core::route::Route;

/// One screen on the back stack, together with its local UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStackEntry {
    pub route: Route,
    /// True only while the exit confirmation dialog is shown on this screen.
    pub exit_dialog_visible: bool,
}

impl BackStackEntry {
    fn new(route: Route) -> Self {
        Self {
            route,
            exit_dialog_visible: false,
        }
    }

    fn reset_local_state(&mut self) {
        self.exit_dialog_visible = false;
    }
}

#[derive(Debug, Clone)]
pub struct NavController {
    start_destination: Route,
    // Never empty: the start destination cannot be popped.
    entries: Vec<BackStackEntry>,
}

impl NavController {
    pub fn new(start_destination: Route) -> Self {
        Self {
            start_destination,
            entries: vec![BackStackEntry::new(start_destination)],
        }
    }

    pub fn start_destination(&self) -> Route {
        self.start_destination
    }

    pub fn current(&self) -> Route {
        self.current_entry().route
    }

    pub fn current_entry(&self) -> &BackStackEntry {
        // The stack always holds at least the start destination.
        &self.entries[self.entries.len() - 1]
    }

    pub fn current_entry_mut(&mut self) -> &mut BackStackEntry {
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn can_pop(&self) -> bool {
        self.entries.len() > 1
    }

    /// Routes from bottom to top.
    pub fn routes(&self) -> Vec<Route> {
        self.entries.iter().map(|entry| entry.route).collect()
    }

    /// Push `route` on top of the stack.
    pub fn navigate(&mut self, route: Route) {
        self.current_entry_mut().reset_local_state();
        self.entries.push(BackStackEntry::new(route));
        debug!("navigate -> {} (stack: {:?})", route, self.routes());
    }

    /// Pop the top entry. Returns `false` if only the start destination is left.
    pub fn pop_back_stack(&mut self) -> bool {
        if !self.can_pop() {
            debug!("pop_back_stack ignored: already at {}", self.current());
            return false;
        }
        let popped = self.entries.pop();
        debug!(
            "pop_back_stack: {:?} -> {}",
            popped.map(|entry| entry.route),
            self.current()
        );
        true
    }
}

impl Default for NavController {
    fn default() -> Self {
        Self::new(Route::MainMenu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_start_destination() {
        let nav = NavController::new(Route::MainMenu);
        assert_eq!(nav.current(), Route::MainMenu);
        assert_eq!(nav.depth(), 1);
        assert!(!nav.can_pop());
    }

    #[test]
    fn test_navigate_pushes() {
        let mut nav = NavController::default();
        nav.navigate(Route::Settings);
        assert_eq!(nav.current(), Route::Settings);
        assert_eq!(nav.routes(), vec![Route::MainMenu, Route::Settings]);
    }

    #[test]
    fn test_pop_returns_to_previous() {
        let mut nav = NavController::default();
        nav.navigate(Route::Game);
        assert!(nav.pop_back_stack());
        assert_eq!(nav.current(), Route::MainMenu);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_pop_at_root_is_refused() {
        let mut nav = NavController::default();
        assert!(!nav.pop_back_stack());
        assert_eq!(nav.current(), Route::MainMenu);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_same_route_pushes_again() {
        let mut nav = NavController::default();
        nav.navigate(Route::Game);
        nav.navigate(Route::Game);
        assert_eq!(nav.depth(), 3);
        assert!(nav.pop_back_stack());
        assert_eq!(nav.current(), Route::Game);
    }

    #[test]
    fn test_navigate_resets_state_of_screen_left_behind() {
        let mut nav = NavController::default();
        nav.current_entry_mut().exit_dialog_visible = true;
        nav.navigate(Route::Settings);
        assert!(!nav.current_entry().exit_dialog_visible);
        nav.pop_back_stack();
        assert!(!nav.current_entry().exit_dialog_visible);
    }

    #[test]
    fn test_custom_start_destination() {
        let mut nav = NavController::new(Route::Game);
        assert_eq!(nav.start_destination(), Route::Game);
        assert_eq!(nav.current(), Route::Game);
        assert!(!nav.pop_back_stack());
    }
}
