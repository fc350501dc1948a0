use crate::types::Coord;

/// Errors raised by the board engine.
///
/// `InvalidDimension`, `UnresolvedColor` and `EmptyPalette` are fatal at setup.
/// `OutOfBounds` and `NotAdjacent` are recovered locally by the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height}: both must be > 0")]
    InvalidDimension { width: i32, height: i32 },

    #[error("cell ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("cells {from} and {to} are not adjacent")]
    NotAdjacent { from: Coord, to: Coord },

    #[error("palette entry '{0}' does not name a fillable color")]
    UnresolvedColor(String),

    #[error("palette has no fillable colors")]
    EmptyPalette,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse {var}={value:?}")]
    Parse { var: &'static str, value: String },

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::NotAdjacent {
            from: Coord::new(0, 0),
            to: Coord::new(2, 0),
        };
        assert_eq!(err.to_string(), "cells (0, 0) and (2, 0) are not adjacent");

        let err = BoardError::InvalidDimension {
            width: 0,
            height: 4,
        };
        assert_eq!(
            err.to_string(),
            "invalid board dimensions 0x4: both must be > 0"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Parse {
            var: "MATCH3_WIDTH",
            value: "wide".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse MATCH3_WIDTH=\"wide\"");
    }
}
