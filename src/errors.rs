// src/errors.rs

use thiserror::Error;

pub type MostradorResult<T> = Result<T, MostradorError>;

#[derive(Debug, Error)]
pub enum MostradorError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MostradorError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        MostradorError::Config(msg.into())
    }

    pub fn logger_error(msg: impl Into<String>) -> Self {
        MostradorError::Logger(msg.into())
    }
}
