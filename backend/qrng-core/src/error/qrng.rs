use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum QrngError {
    /// Transport-level failure: DNS, refused connection, timeout.
    #[error("QRNG Transport Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("QRNG URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// Non-200 response. The body text is carried verbatim so the cause
    /// ("Invalid API key", quota exceeded, ...) reaches the log.
    #[error("QRNG API Error: HTTP {status} - {body} {location}")]
    Api {
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for QrngError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        QrngError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for QrngError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        QrngError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
