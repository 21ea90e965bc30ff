//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::buffer::Buffer;

use crate::core::route::Route;
use crate::core::state::App;

/// Creates a test App sitting on the main menu.
pub fn test_app() -> App {
    App::new(Route::MainMenu)
}

/// All symbols of a rendered buffer, row by row.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
