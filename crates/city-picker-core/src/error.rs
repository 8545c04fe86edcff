// crates/city-picker-core/src/error.rs
use thiserror::Error;

/// Errors raised by the I/O and configuration surfaces of the picker.
///
/// Search and touch tracking are total and never produce one of these.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, PickerError>;
