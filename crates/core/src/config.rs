//! Board configuration
//!
//! Configure the board using environment variables:
//!
//! - `MATCH3_WIDTH` / `MATCH3_HEIGHT`: grid size (default 8x8)
//! - `MATCH3_BORDER`: empty cells framed around the board (default 1)
//! - `MATCH3_MOVE_MS`: swap animation duration (default 500)
//! - `MATCH3_EASING`: linear, easeOut, easeIn, quadratic, smoothStep, smootherStep
//! - `MATCH3_PALETTE`: comma-separated color names (default: all eight normal colors)
//! - `MATCH3_STRICT_PALETTE`: 1/true to fail on unresolved palette entries, 0/false otherwise
//! - `MATCH3_SEED`: fill seed (default 1)
//! - `MATCH3_LOG_PATH`: write tracing output to this file

use crate::error::ConfigError;
use crate::swap::MotionSettings;
use crate::types::{
    Easing, PieceColor, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_BORDER_SIZE,
    DEFAULT_MOVE_MS,
};

/// Initial parameters for a board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    pub border_size: u16,
    pub move_duration_ms: u32,
    pub easing: Easing,
    /// Color names, resolved when the board is filled
    pub palette: Vec<String>,
    pub strict_palette: bool,
    pub seed: u32,
    pub log_path: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            border_size: DEFAULT_BORDER_SIZE,
            move_duration_ms: DEFAULT_MOVE_MS,
            easing: Easing::default(),
            palette: PieceColor::NORMAL
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
            strict_palette: false,
            seed: 1,
            log_path: None,
        }
    }
}

impl BoardConfig {
    /// Create from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create from an arbitrary variable lookup (unset variables keep defaults).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let mut config = Self::default();

        if let Some(v) = get("MATCH3_WIDTH") {
            config.width = parse_var("MATCH3_WIDTH", v)?;
        }
        if let Some(v) = get("MATCH3_HEIGHT") {
            config.height = parse_var("MATCH3_HEIGHT", v)?;
        }
        if let Some(v) = get("MATCH3_BORDER") {
            config.border_size = parse_var("MATCH3_BORDER", v)?;
        }
        if let Some(v) = get("MATCH3_MOVE_MS") {
            config.move_duration_ms = parse_var("MATCH3_MOVE_MS", v)?;
        }
        if let Some(v) = get("MATCH3_EASING") {
            config.easing = Easing::from_str(&v).ok_or(ConfigError::Parse {
                var: "MATCH3_EASING",
                value: v,
            })?;
        }
        if let Some(v) = get("MATCH3_PALETTE") {
            config.palette = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(v) = get("MATCH3_STRICT_PALETTE") {
            config.strict_palette = parse_flag("MATCH3_STRICT_PALETTE", v)?;
        }
        if let Some(v) = get("MATCH3_SEED") {
            config.seed = parse_var("MATCH3_SEED", v)?;
        }
        config.log_path = get("MATCH3_LOG_PATH");

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::Validation(format!(
                "board must be at least 1x1 (got {}x{})",
                self.width, self.height
            )));
        }
        if self.move_duration_ms == 0 {
            return Err(ConfigError::Validation(
                "move duration must be > 0".into(),
            ));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::Validation("palette must not be empty".into()));
        }
        Ok(())
    }

    pub fn motion(&self) -> MotionSettings {
        MotionSettings {
            duration_ms: self.move_duration_ms,
            easing: self.easing,
        }
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Parse { var, value })
}

fn parse_flag(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(ConfigError::Parse { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = BoardConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.palette.len(), 8);
    }

    #[test]
    fn reads_every_variable() {
        let config = BoardConfig::from_lookup(lookup(&[
            ("MATCH3_WIDTH", "5"),
            ("MATCH3_HEIGHT", " 7 "),
            ("MATCH3_BORDER", "2"),
            ("MATCH3_MOVE_MS", "250"),
            ("MATCH3_EASING", "easeIn"),
            ("MATCH3_PALETTE", "red, green,,blue"),
            ("MATCH3_STRICT_PALETTE", "TRUE"),
            ("MATCH3_SEED", "99"),
            ("MATCH3_LOG_PATH", "/tmp/match3.log"),
        ]))
        .unwrap();

        assert_eq!(config.width, 5);
        assert_eq!(config.height, 7);
        assert_eq!(config.border_size, 2);
        assert_eq!(config.move_duration_ms, 250);
        assert_eq!(config.easing, Easing::EaseIn);
        assert_eq!(config.palette, vec!["red", "green", "blue"]);
        assert!(config.strict_palette);
        assert_eq!(config.seed, 99);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/match3.log"));
    }

    #[test]
    fn unparseable_number_is_an_error() {
        let err = BoardConfig::from_lookup(lookup(&[("MATCH3_WIDTH", "wide")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Parse {
                var: "MATCH3_WIDTH",
                value: "wide".to_string()
            }
        );
    }

    #[test]
    fn unknown_easing_is_an_error() {
        assert!(BoardConfig::from_lookup(lookup(&[("MATCH3_EASING", "bounce")])).is_err());
    }

    #[test]
    fn non_positive_dimensions_fail_validation() {
        let err = BoardConfig::from_lookup(lookup(&[("MATCH3_HEIGHT", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        let err = BoardConfig::from_lookup(lookup(&[("MATCH3_WIDTH", "-3")])).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn strict_palette_flag_is_parsed() {
        for (raw, expected) in [("1", true), ("True", true), ("0", false), ("FALSE", false)] {
            let config =
                BoardConfig::from_lookup(lookup(&[("MATCH3_STRICT_PALETTE", raw)])).unwrap();
            assert_eq!(config.strict_palette, expected, "{raw}");
        }
        for raw in ["yes", "on", "tru"] {
            let err =
                BoardConfig::from_lookup(lookup(&[("MATCH3_STRICT_PALETTE", raw)])).unwrap_err();
            assert_eq!(
                err,
                ConfigError::Parse {
                    var: "MATCH3_STRICT_PALETTE",
                    value: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = BoardConfig::from_lookup(lookup(&[("MATCH3_WIDTH", "  ")])).unwrap();
        assert_eq!(config.width, DEFAULT_BOARD_WIDTH);
    }
}
