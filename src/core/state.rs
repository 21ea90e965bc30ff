//! # Application State
//!
//! Core state for the shell. No TUI types here; focus and layout caches live
//! in the `tui` module.
//!
//! ```text
//! App
//! ├── nav: NavController      // back stack, top = visible screen
//! ├── title: String           // text shown by GameTitle
//! └── should_quit: bool       // set once the user confirms exit
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::navigation::NavController;
use crate::core::route::Route;

pub const DEFAULT_TITLE: &str = "О моем перерождении в приложение-пазл в новом мире \
    в качестве курсовой работы о мобильной разработке";

pub struct App {
    pub nav: NavController,
    pub title: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(start_destination: Route) -> Self {
        Self {
            nav: NavController::new(start_destination),
            title: DEFAULT_TITLE.to_string(),
            should_quit: false,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.start_screen);
        app.title = config.title.clone();
        app
    }

    pub fn current_screen(&self) -> Route {
        self.nav.current()
    }

    pub fn exit_dialog_visible(&self) -> bool {
        self.nav.current_entry().exit_dialog_visible
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Route::MainMenu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.current_screen(), Route::MainMenu);
        assert!(!app.exit_dialog_visible());
        assert!(!app.should_quit);
        assert_eq!(app.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_app_from_config() {
        let config = ResolvedConfig {
            start_screen: Route::Settings,
            title: "Custom".to_string(),
            ..ResolvedConfig::default()
        };
        let app = App::from_config(&config);
        assert_eq!(app.current_screen(), Route::Settings);
        assert_eq!(app.title, "Custom");
    }
}
