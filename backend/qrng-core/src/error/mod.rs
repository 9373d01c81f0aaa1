pub mod config;
pub mod password;
pub mod qrng;
pub mod request;

use thiserror::Error;

/// Umbrella error for a full generation run.
///
/// Each stage of the pipeline keeps its own error type; this enum only
/// forwards them so callers can match on the stage that failed.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Request(#[from] request::RequestError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Qrng(#[from] qrng::QrngError),

    #[error(transparent)]
    Password(#[from] password::PasswordError),
}
