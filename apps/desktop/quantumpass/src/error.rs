use common::ErrorLocation;

use qrng_core::error::CoreError;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur in Tauri commands.
///
/// These are serialized for IPC; the frontend shows the static
/// [`user_message`](QuantumpassError::user_message) wording while the full
/// structured detail goes to the log.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum QuantumpassError {
    /// Error from this app's own wiring (logger, state actor, ...)
    #[error("Quantumpass Error: {message} {location}")]
    App {
        message: String,
        location: ErrorLocation,
    },

    /// Length field rejected before any I/O
    #[error("Invalid Length Error: {message} {location}")]
    InvalidLength {
        message: String,
        location: ErrorLocation,
    },

    /// Config file missing, unreadable, malformed, or key empty
    #[error("Configuration Error: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },

    /// QRNG API rejection, transport failure, or short response
    #[error("Fetch Error: {message} {location}")]
    Fetch {
        message: String,
        location: ErrorLocation,
    },
}

impl QuantumpassError {
    /// Map a pipeline error onto the app-boundary taxonomy.
    ///
    /// Short-response failures land in `Fetch` alongside API errors: from
    /// the user's point of view both mean "the quantum source did not
    /// deliver".
    #[track_caller]
    pub fn from_core(error: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = error.to_string();

        match error {
            CoreError::Request(_) => QuantumpassError::InvalidLength { message, location },
            CoreError::Config(_) => QuantumpassError::Configuration { message, location },
            CoreError::Qrng(_) | CoreError::Password(_) => {
                QuantumpassError::Fetch { message, location }
            }
        }
    }

    /// The static wording shown in place of the password text.
    ///
    /// Deliberately lossy: configuration and fetch failures are worded
    /// almost identically (both point at the API key), matching the
    /// established behavior. The specific cause is preserved in the log,
    /// not on screen.
    pub fn user_message(&self) -> &'static str {
        match self {
            QuantumpassError::InvalidLength { .. } => {
                "Invalid length. Please enter a number between 0 and 255."
            }
            QuantumpassError::Configuration { .. } => "Add API key to config.json",
            QuantumpassError::Fetch { .. } => {
                "Error fetching quantum numbers: Add API key to config.json"
            }
            QuantumpassError::App { .. } => "Something went wrong. Check the log file.",
        }
    }
}
