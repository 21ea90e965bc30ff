//! # TUI Components
//!
//! Every screen and widget the shell draws.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `GameButton`: the shared button style
//! - `GameTitle`: the title plate on the main menu
//!
//! ### Stateful Components (Event-Driven)
//!
//! Screens keep a small persistent state in `TuiState` (focus, where their
//! buttons were drawn) and are wrapped in a transient renderer each frame:
//! - `MainMenuState` / `MainMenuScreen`
//! - `PlaceholderState` / `SettingsScreen`, `GameScreen`
//! - `ExitDialogState` / `ExitConfirmationDialog`
//!
//! Event handlers never touch core state. They emit a small event enum
//! (`MenuEvent`, `PlaceholderEvent`, `DialogEvent`) and the event loop maps
//! it to a core `Action`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── game_button.rs   (Shared button + column layout)
//! ├── game_title.rs    (Title plate)
//! ├── main_menu.rs     (Start / Settings / Exit)
//! ├── placeholder.rs   (Heading + text + back button)
//! ├── settings.rs      (Settings placeholder)
//! ├── game.rs          (Game placeholder)
//! └── exit_dialog.rs   (Exit confirmation overlay)
//! ```

pub mod exit_dialog;
pub mod game;
pub mod game_button;
pub mod game_title;
pub mod main_menu;
pub mod placeholder;
pub mod settings;

pub use exit_dialog::{DialogEvent, ExitConfirmationDialog, ExitDialogState};
pub use game::GameScreen;
pub use game_button::GameButton;
pub use game_title::GameTitle;
pub use main_menu::{MainMenuScreen, MainMenuState, MenuEvent};
pub use placeholder::{PlaceholderEvent, PlaceholderState};
pub use settings::SettingsScreen;
