use crate::error::QuantumpassError;
use crate::state::{AppState, StateCommand};

use qrng_core::QRNG_API_BASE_URL;
use qrng_core::generator::{self, GenerateRequest};
use qrng_core::qrng::QrngClient;

use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;

use log::{debug, error, info};
use tauri::{AppHandle, Manager, State, command as TauriCommand};

const CONFIG_FILE_NAME: &str = "config.json";

/// Where to look for config.json.
///
/// Prefers the per-user app config directory; falls back to the working
/// directory, where the original tool kept its file.
fn resolve_config_path(app: &AppHandle) -> PathBuf {
    if let Ok(dir) = app.path().app_config_dir() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from(CONFIG_FILE_NAME)
}

/// Generate a password from quantum random bytes.
///
/// Takes the raw form state (length text plus the three toggles), runs the
/// validate → load config → fetch → format pipeline, stores the result for
/// the copy action, and returns it for display.
///
/// Async so the network call never blocks the UI thread; the window stays
/// responsive while the fetch is in flight.
///
/// # Returns
///
/// * `Ok(String)` - the generated password
/// * `Err(QuantumpassError)` - validation, configuration, or fetch failure;
///   the frontend shows `user_message()`-style wording for these
#[TauriCommand]
pub async fn generate_password(
    app: AppHandle,
    state: State<'_, AppState>,
    length: String,
    start_uppercase: bool,
    include_special: bool,
    include_numbers: bool,
) -> Result<String, QuantumpassError> {
    debug!(
        "Generate requested: length={length:?}, upper={start_uppercase}, \
         special={include_special}, numbers={include_numbers}"
    );

    let client = QrngClient::new(QRNG_API_BASE_URL).map_err(|e| {
        error!("Failed to construct QRNG client: {e}");
        QuantumpassError::App {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    let request = GenerateRequest {
        length,
        start_uppercase,
        include_special,
        include_numbers,
    };

    let config_path = resolve_config_path(&app);
    debug!("Using config at {}", config_path.display());

    let password = generator::generate(&config_path, &client, &request)
        .await
        .map_err(|e| {
            error!("Generation failed: {e}");
            QuantumpassError::from_core(e)
        })?;

    state
        .update(StateCommand::SetPassword(password.clone()))
        .await
        .map_err(|e| {
            error!("Failed to store password in state: {e}");
            QuantumpassError::App {
                message: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

    info!("Password generated and stored for the copy action");

    Ok(password)
}

/// Fetch the last generated password for the copy-to-clipboard action.
///
/// # Returns
///
/// * `Ok(Some(String))` - a password has been generated this session
/// * `Ok(None)` - nothing generated yet
#[TauriCommand]
pub async fn last_password(
    state: State<'_, AppState>,
) -> Result<Option<String>, QuantumpassError> {
    debug!("Last password requested");

    Ok(state.get_password().await)
}
