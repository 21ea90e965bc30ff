//! Puzzles: a menu shell for a puzzle game, drawn in the terminal.
//!
//! `core` owns which screen is shown and the exit dialog flag; `tui` draws
//! it with ratatui and turns key presses and clicks into core actions.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
