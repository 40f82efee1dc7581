use thiserror::Error;

/// Top-level error type for the social graph console.
#[derive(Error, Debug)]
pub enum SocialError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, SocialError>;
