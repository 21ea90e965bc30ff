//! # Core Application Logic
//!
//! Which screen is shown, what the back stack holds, and whether the exit
//! dialog is up. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Route (screen keys)  │
//!                    │  • NavController        │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. No terminal.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: The `Route` enum: the three screen keys
//! - [`navigation`]: The back stack
//! - [`state`]: The `App` struct: all application state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Config file loading and resolution

pub mod action;
pub mod config;
pub mod navigation;
pub mod route;
pub mod state;
