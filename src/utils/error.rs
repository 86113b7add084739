use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrettyError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Invalid configuration value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PrettyError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        PrettyError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PrettyError::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, PrettyError>;
