use common::ErrorLocation;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    /// The API returned fewer bytes than the requested password length.
    ///
    /// The original tool indexed past the end of the buffer in this case;
    /// here it is a named error instead of an out-of-bounds fault.
    #[error(
        "Password Buffer Error: requested {requested} characters but only {available} quantum bytes available {location}"
    )]
    BufferTooShort {
        requested: usize,
        available: usize,
        location: ErrorLocation,
    },
}
