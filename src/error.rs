use std::path::PathBuf;

/// Reasons the engine rejects a move attempt.
///
/// Rejections are a normal part of play (clicking a full column, clicking
/// after the game ended) and are handled by silently ignoring the attempt;
/// the engine logs the reason at debug level and leaves all state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range")]
    InvalidColumn { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when building a set of game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("board must have at least one column")]
    NoColumns,

    #[error("board must have at least one row")]
    NoRows,

    #[error("winning run length must be at least 2, got {0}")]
    ConnectTooShort(usize),

    #[error("a run of {connect} cannot fit on a {columns}x{rows} board")]
    ConnectTooLong {
        connect: usize,
        columns: usize,
        rows: usize,
    },

    #[error("turn duration must be at least one second")]
    ZeroTurnDuration,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::InvalidColumn { column: 9 }.to_string(),
            "column 9 is out of range"
        );
        assert_eq!(
            MoveError::ColumnFull { column: 3 }.to_string(),
            "column 3 is full"
        );
        assert_eq!(MoveError::GameOver.to_string(), "the game is already over");
    }

    #[test]
    fn test_rules_error_display() {
        let err = RulesError::ConnectTooLong {
            connect: 9,
            columns: 7,
            rows: 6,
        };
        assert_eq!(err.to_string(), "a run of 9 cannot fit on a 7x6 board");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ui.tick_rate_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ui.tick_rate_ms must be > 0"
        );
    }
}
