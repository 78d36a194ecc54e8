use std::path::PathBuf;

/// Reasons a candidate board is refused by [`Engine::init`](crate::game::Engine::init).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    #[error("invalid magnitudes")]
    InvalidMagnitudes,

    #[error("invalid data")]
    InvalidData,
}

/// Reasons a move is refused by [`Engine::play`](crate::game::Engine::play).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("out of range")]
    OutOfRange,

    #[error("column is full")]
    ColumnFull,

    #[error("not your turn")]
    NotYourTurn,

    #[error("no board has been initialized")]
    NoBoard,
}

/// Errors that can occur when parsing a move such as `R3` or `Y0`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("empty move")]
    Empty,

    #[error("unknown token '{0}' (expected R or Y)")]
    UnknownToken(char),

    #[error("invalid column in move '{0}'")]
    InvalidColumn(String),
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
    fn test_init_error_display() {
        assert_eq!(InitError::InvalidMagnitudes.to_string(), "invalid magnitudes");
        assert_eq!(InitError::InvalidData.to_string(), "invalid data");
    }

    #[test]
    fn test_play_error_display() {
        assert_eq!(PlayError::OutOfRange.to_string(), "out of range");
        assert_eq!(PlayError::ColumnFull.to_string(), "column is full");
        assert_eq!(PlayError::NotYourTurn.to_string(), "not your turn");
    }

    #[test]
    fn test_move_parse_error_display() {
        let err = MoveParseError::UnknownToken('X');
        assert_eq!(err.to_string(), "unknown token 'X' (expected R or Y)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rules.min_run must be >= 3".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: rules.min_run must be >= 3"
        );
    }
}
