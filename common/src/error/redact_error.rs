//! Errors raised when a redacted secret is about to leave the process.

use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RedactError {
    /// An [`ApiKey`](crate::ApiKey) was handed to a serializer. The key
    /// only ever travels on the outbound request header, so any
    /// serialization attempt is a leak in the making and is refused.
    #[error("Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}
