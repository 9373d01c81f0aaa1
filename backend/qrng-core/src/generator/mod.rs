//! The generation pipeline, independent of any UI framework.
//!
//! A button press in the shell becomes one [`generate`] call: validate the
//! form input, load the config, fetch quantum bytes, format the password.
//! Each call is an independent, sequential run - no state survives between
//! invocations.

use crate::config::QuantumPassConfig;
use crate::error::CoreError;
use crate::error::request::RequestError;
use crate::password::{self, PasswordOptions};
use crate::qrng::QrngClient;
use crate::{QRNG_BLOCK_SIZE, QRNG_DATA_TYPE};

use common::ErrorLocation;

use std::panic::Location;
use std::path::Path;

use log::{debug, info};

/// The raw form state handed over by the presentation layer.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Length field as typed by the user; validated here, not in the UI.
    pub length: String,
    pub start_uppercase: bool,
    pub include_special: bool,
    pub include_numbers: bool,
}

impl GenerateRequest {
    fn options(&self) -> PasswordOptions {
        PasswordOptions {
            start_uppercase: self.start_uppercase,
            include_special: self.include_special,
            include_numbers: self.include_numbers,
        }
    }
}

/// Parse the length field, accepting only integers in 0-255.
///
/// Runs before any config read or network call; "256", "-1" and non-numeric
/// input never reach the API.
#[track_caller]
pub fn parse_length(input: &str) -> Result<u8, RequestError> {
    input.parse::<u8>().map_err(|_| RequestError::InvalidLength {
        input: input.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Run the three-stage pipeline once.
///
/// The config is re-read on every call so a key edit takes effect on the
/// next button press without restarting the app. A requested length of 0
/// still performs the fetch and yields the empty string.
pub async fn generate(
    config_path: &Path,
    client: &QrngClient,
    request: &GenerateRequest,
) -> Result<String, CoreError> {
    let length = parse_length(&request.length)?;
    debug!("Generation requested: length={length}, options={:?}", request.options());

    let config = QuantumPassConfig::load(config_path)?;

    let bytes = client
        .fetch_bytes(config.api_key(), length, QRNG_DATA_TYPE, QRNG_BLOCK_SIZE)
        .await?;

    let password = password::format_password(&bytes, length as usize, &request.options())?;

    info!("Generated a {length}-character password");
    Ok(password)
}
