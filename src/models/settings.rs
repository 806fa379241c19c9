//! Ledger display settings
//!
//! The currency prefix and colour theme travel with the ledger data itself,
//! so they are exported, imported, and kept across a clear.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a theme name outside the permitted set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown theme '{}' (expected light or dark)", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// Currency and theme preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Prefix placed before every formatted amount
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub theme: Theme,
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Render an amount with the currency prefix and two decimals
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency, "$");
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_format_currency() {
        let mut settings = Settings::default();
        assert_eq!(settings.format_currency(Money::from_cents(250000)), "$2500.00");

        settings.currency = "€".into();
        assert_eq!(settings.format_currency(Money::from_cents(-6000)), "€-60.00");
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(UnknownTheme("sepia".to_string()))
        );
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency": "£"}"#).unwrap();
        assert_eq!(settings.currency, "£");
        assert_eq!(settings.theme, Theme::Light);

        let settings: Settings = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(settings.currency, "$");
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn test_unknown_theme_fails_to_deserialize() {
        assert!(serde_json::from_str::<Settings>(r#"{"theme": "neon"}"#).is_err());
    }
}
