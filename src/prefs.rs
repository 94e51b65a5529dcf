//! Cosmetic display preferences.
//!
//! Theme and accent color are two independent key-value preferences
//! with no interaction with the core data model. An unknown stored
//! value falls back to the default rather than failing the load.

use crate::error::Error;
use crate::storage::{KeyValueStore, ACCENT_KEY, THEME_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccentColor {
    #[default]
    Blue,
    Green,
    Orange,
    Pink,
    Purple,
}

impl AccentColor {
    pub fn as_str(self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Green => "green",
            AccentColor::Orange => "orange",
            AccentColor::Pink => "pink",
            AccentColor::Purple => "purple",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "blue" => Some(AccentColor::Blue),
            "green" => Some(AccentColor::Green),
            "orange" => Some(AccentColor::Orange),
            "pink" => Some(AccentColor::Pink),
            "purple" => Some(AccentColor::Purple),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub accent: AccentColor,
}

impl Preferences {
    /// Load both preferences, defaulting anything absent or
    /// unrecognized.
    pub fn load<S: KeyValueStore>(store: &S) -> Result<Self, Error> {
        let theme = store
            .get(THEME_KEY)?
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        let accent = store
            .get(ACCENT_KEY)?
            .and_then(|raw| AccentColor::parse(&raw))
            .unwrap_or_default();
        Ok(Preferences { theme, accent })
    }
}
