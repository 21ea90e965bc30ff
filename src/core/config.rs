//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.puzzles/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The log file and level are themselves config, so loading and resolving
//! run before any logger exists. Their messages go to a `PendingLog` that
//! `main` replays once logging is up.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::route::Route;
use crate::core::state::DEFAULT_TITLE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PuzzlesConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_screen: Option<Route>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub mouse: Option<bool>,
    pub icons: Option<bool>,
    pub title: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "puzzles.log";

pub const ENV_START_SCREEN: &str = "PUZZLES_START_SCREEN";
pub const ENV_LOG_LEVEL: &str = "PUZZLES_LOG";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_screen: Route,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub mouse: bool,
    pub icons: bool,
    pub title: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_from(
            &PuzzlesConfig::default(),
            &CliOverrides::default(),
            |_| None,
            &mut PendingLog::default(),
        )
    }
}

/// Values taken from command-line flags. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub start_screen: Option<Route>,
    pub no_mouse: bool,
}

// ============================================================================
// Pending Log
// ============================================================================

/// Log records held back until a logger is installed.
#[derive(Debug, Default)]
pub struct PendingLog {
    pub records: Vec<(Level, String)>,
}

impl PendingLog {
    pub fn push(&mut self, level: Level, message: impl Into<String>) {
        self.records.push((level, message.into()));
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message.as_str())
    }

    /// Emit every held record through the installed logger.
    pub fn replay(self) {
        for (level, message) in self.records {
            log::log!(level, "{}", message);
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.puzzles/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".puzzles").join("config.toml"))
}

/// Load config from `~/.puzzles/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PuzzlesConfig::default()`.
pub fn load_config(pending: &mut PendingLog) -> Result<PuzzlesConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            pending.push(
                Level::Warn,
                "Could not determine home directory, using default config",
            );
            return Ok(PuzzlesConfig::default());
        }
    };

    if !path.exists() {
        pending.push(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(&path, pending);
        return Ok(PuzzlesConfig::default());
    }

    load_config_from(&path, pending)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(
    path: &Path,
    pending: &mut PendingLog,
) -> Result<PuzzlesConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PuzzlesConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    pending.push(Level::Info, format!("Loaded config from {}", path.display()));
    pending.push(Level::Debug, format!("Config: {:?}", config));
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Puzzles Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_screen = "main_menu"   # "main_menu", "settings" or "game" (PUZZLES_START_SCREEN)
# log_level = "info"           # "off", "error", "warn", "info", "debug", "trace" (PUZZLES_LOG)
# log_file = "puzzles.log"

# [ui]
# mouse = true                 # Click buttons with the mouse
# icons = true                 # Show icons on main menu buttons
# title = "My puzzle game"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, pending: &mut PendingLog) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            pending.push(Level::Warn, format!("Failed to create config directory: {e}"));
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        pending.push(Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &PuzzlesConfig,
    cli: &CliOverrides,
    pending: &mut PendingLog,
) -> ResolvedConfig {
    resolve_from(config, cli, |key| std::env::var(key).ok(), pending)
}

fn resolve_from(
    config: &PuzzlesConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
    pending: &mut PendingLog,
) -> ResolvedConfig {
    // Start screen: CLI → env → config → default
    let env_start = env(ENV_START_SCREEN).and_then(|value| match value.parse::<Route>() {
        Ok(route) => Some(route),
        Err(e) => {
            pending.push(Level::Warn, format!("Ignoring {ENV_START_SCREEN}: {e}"));
            None
        }
    });
    let start_screen = cli
        .start_screen
        .or(env_start)
        .or(config.general.start_screen)
        .unwrap_or_default();

    // Log level: env → config → default
    let log_level = env(ENV_LOG_LEVEL)
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| match level.parse::<LevelFilter>() {
            Ok(filter) => Some(filter),
            Err(_) => {
                pending.push(
                    Level::Warn,
                    format!("Unknown log level {level:?}, using {DEFAULT_LOG_LEVEL}"),
                );
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .general
        .log_file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Mouse: --no-mouse wins over config
    let mouse = !cli.no_mouse && config.ui.mouse.unwrap_or(true);

    ResolvedConfig {
        start_screen,
        log_level,
        log_file: PathBuf::from(log_file),
        mouse,
        icons: config.ui.icons.unwrap_or(true),
        title: config
            .ui
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn resolve_quiet(
        config: &PuzzlesConfig,
        cli: &CliOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> ResolvedConfig {
        resolve_from(config, cli, env, &mut PendingLog::default())
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_quiet(&PuzzlesConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.start_screen, Route::MainMenu);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert!(resolved.mouse);
        assert!(resolved.icons);
        assert_eq!(resolved.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PuzzlesConfig {
            general: GeneralConfig {
                start_screen: Some(Route::Settings),
                log_level: Some("debug".to_string()),
                log_file: Some("/tmp/p.log".to_string()),
            },
            ui: UiConfig {
                mouse: Some(false),
                icons: Some(false),
                title: Some("Пазл".to_string()),
            },
        };
        let resolved = resolve_quiet(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.start_screen, Route::Settings);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/p.log"));
        assert!(!resolved.mouse);
        assert!(!resolved.icons);
        assert_eq!(resolved.title, "Пазл");
    }

    #[test]
    fn test_env_overrides_config() {
        let config = PuzzlesConfig {
            general: GeneralConfig {
                start_screen: Some(Route::Settings),
                log_level: Some("warn".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            ENV_START_SCREEN => Some("game".to_string()),
            ENV_LOG_LEVEL => Some("trace".to_string()),
            _ => None,
        };
        let mut pending = PendingLog::default();
        let resolved = resolve_from(&config, &CliOverrides::default(), env, &mut pending);
        assert_eq!(resolved.start_screen, Route::Game);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
        assert_eq!(pending.warnings().count(), 0);
    }

    #[test]
    fn test_cli_start_screen_wins() {
        let env = |key: &str| (key == ENV_START_SCREEN).then(|| "game".to_string());
        let cli = CliOverrides {
            start_screen: Some(Route::Settings),
            no_mouse: true,
        };
        let resolved = resolve_quiet(&PuzzlesConfig::default(), &cli, env);
        assert_eq!(resolved.start_screen, Route::Settings);
        assert!(!resolved.mouse);
    }

    #[test]
    fn test_bad_env_start_screen_falls_through() {
        let config = PuzzlesConfig {
            general: GeneralConfig {
                start_screen: Some(Route::Game),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == ENV_START_SCREEN).then(|| "nowhere".to_string());
        let mut pending = PendingLog::default();
        let resolved = resolve_from(&config, &CliOverrides::default(), env, &mut pending);
        assert_eq!(resolved.start_screen, Route::Game);

        let warnings: Vec<&str> = pending.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains(ENV_START_SCREEN));
        assert!(warnings[0].contains("nowhere"));
    }

    #[test]
    fn test_bad_log_level_uses_default() {
        let config = PuzzlesConfig {
            general: GeneralConfig {
                log_level: Some("loud".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut pending = PendingLog::default();
        let resolved = resolve_from(&config, &CliOverrides::default(), no_env, &mut pending);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert!(pending.warnings().any(|w| w.contains("\"loud\"")));
    }

    #[test]
    fn test_bad_env_log_level_is_reported() {
        let env = |key: &str| (key == ENV_LOG_LEVEL).then(|| "chatty".to_string());
        let mut pending = PendingLog::default();
        let resolved =
            resolve_from(&PuzzlesConfig::default(), &CliOverrides::default(), env, &mut pending);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);

        let warnings: Vec<&str> = pending.warnings().collect();
        assert_eq!(warnings, vec!["Unknown log level \"chatty\", using INFO"]);
    }

    #[test]
    fn test_pending_log_keeps_order_and_levels() {
        let mut pending = PendingLog::default();
        pending.push(Level::Info, "loaded");
        pending.push(Level::Warn, "odd value");
        pending.push(Level::Debug, "details");
        assert_eq!(pending.records.len(), 3);
        assert_eq!(pending.records[1], (Level::Warn, "odd value".to_string()));
        assert_eq!(pending.warnings().collect::<Vec<_>>(), vec!["odd value"]);
        // Replaying with no logger installed is a no-op
        pending.replay();
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
start_screen = "settings"
log_level = "debug"

[ui]
mouse = false
title = "Головоломки"
"#;
        let config: PuzzlesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.start_screen, Some(Route::Settings));
        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert_eq!(config.ui.mouse, Some(false));
        assert!(config.ui.icons.is_none());
        assert_eq!(config.ui.title.as_deref(), Some("Головоломки"));
    }

    #[test]
    fn test_unknown_start_screen_is_parse_error() {
        let result: Result<PuzzlesConfig, _> =
            toml::from_str("[general]\nstart_screen = \"shop\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: PuzzlesConfig = toml::from_str("[ui]\nicons = false\n").unwrap();
        assert_eq!(config.ui.icons, Some(false));
        assert!(config.general.start_screen.is_none());
    }

    #[test]
    fn test_generated_default_is_all_comments() {
        let config: PuzzlesConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.general.start_screen.is_none());
        assert!(config.ui.mouse.is_none());
    }

    #[test]
    fn test_load_missing_explicit_path_is_io_error() {
        let path = std::env::temp_dir().join("puzzles-missing-config-for-test.toml");
        let mut pending = PendingLog::default();
        let err = load_config_from(&path, &mut pending).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("config I/O error"));
        assert!(pending.records.is_empty());
    }

    #[test]
    fn test_load_explicit_path_records_info() {
        let path = std::env::temp_dir().join("puzzles-explicit-config-for-test.toml");
        fs::write(&path, "[ui]\nicons = false\n").unwrap();
        let mut pending = PendingLog::default();
        let config = load_config_from(&path, &mut pending).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.ui.icons, Some(false));
        assert_eq!(pending.records[0].0, Level::Info);
        assert!(pending.records[0].1.starts_with("Loaded config from"));
        assert_eq!(pending.warnings().count(), 0);
    }
}
