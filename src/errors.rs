use thiserror::Error;

/// Error type for estimate, configuration and storage failures.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("Unknown category `{0}`. Expected woodworking, laser or print3d.")]
    InvalidCategory(String),
    #[error("Unknown field `{0}`. Expected materials, hours or rate.")]
    InvalidField(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for EstimateError {
    fn from(err: std::io::Error) -> Self {
        EstimateError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for EstimateError {
    fn from(err: serde_json::Error) -> Self {
        EstimateError::Config(err.to_string())
    }
}

/// Errors that abort the shell itself rather than a single command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] EstimateError),
    #[error("Terminal error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Command failed: {0}")]
    Command(String),
}
