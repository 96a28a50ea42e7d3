use thiserror::Error;

/// Why a strip could not be mounted on a piece of markup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MountError {
    /// No element carries the scroll region class.
    #[error("no `.{class}` element inside container `{container}`")]
    MissingNav {
        container: String,
        class: &'static str,
    },
}

/// Errors from loading a [`StripConfig`](crate::StripConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid strip config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("`{field}` must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f32,
    },
}
