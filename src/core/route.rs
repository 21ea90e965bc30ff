//! # Routes
//!
//! The fixed set of screens the navigation host knows about. Each route has a
//! stable string key, which is what the back stack, the config file and the
//! CLI all speak.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    #[value(name = "main_menu")]
    MainMenu,
    #[value(name = "settings")]
    Settings,
    #[value(name = "game")]
    Game,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::MainMenu, Route::Settings, Route::Game];

    pub fn key(self) -> &'static str {
        match self {
            Route::MainMenu => "main_menu",
            Route::Settings => "settings",
            Route::Game => "game",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    Unknown(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Unknown(key) => write!(f, "unknown screen key: {key:?}"),
        }
    }
}

impl std::error::Error for RouteError {}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.key() == s.trim())
            .ok_or_else(|| RouteError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_screen_names() {
        assert_eq!(Route::MainMenu.key(), "main_menu");
        assert_eq!(Route::Settings.key(), "settings");
        assert_eq!(Route::Game.key(), "game");
    }

    #[test]
    fn test_parse_every_key() {
        for route in Route::ALL {
            assert_eq!(route.key().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn test_parse_unknown_key_fails() {
        let err = "leaderboard".parse::<Route>().unwrap_err();
        assert_eq!(err, RouteError::Unknown("leaderboard".to_string()));
        assert!(err.to_string().contains("leaderboard"));
    }

    #[test]
    fn test_display_is_key() {
        assert_eq!(Route::Settings.to_string(), "settings");
    }

    #[test]
    fn test_default_is_main_menu() {
        assert_eq!(Route::default(), Route::MainMenu);
    }

    #[test]
    fn test_deserializes_from_toml_key() {
        #[derive(Deserialize)]
        struct Wrapper {
            screen: Route,
        }
        let parsed: Wrapper = toml::from_str("screen = \"game\"").unwrap();
        assert_eq!(parsed.screen, Route::Game);
    }
}
