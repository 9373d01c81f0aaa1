use common::ErrorLocation;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    /// Length field was non-numeric or outside 0-255.
    ///
    /// Raised before any config read or network call is made.
    #[error("Request Length Error: {input:?} is not a number between 0 and 255 {location}")]
    InvalidLength {
        input: String,
        location: ErrorLocation,
    },
}
