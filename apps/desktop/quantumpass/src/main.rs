// Prevents additional console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use quantumpass::commands;
use quantumpass::error::QuantumpassError;
use quantumpass::icon;
use quantumpass::logger::initialize as LoggerInitialize;
use quantumpass::state::AppState;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::path::Path;

use log::{info, warn};
use tauri::Manager;

const ICON_FILE_NAME: &str = "icon.ico";

fn main() {
    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            commands::generate::generate_password,
            commands::generate::last_password,
        ])
        .setup(|app| {
            // Get app data directory for logs
            let log_dir = app
                .path()
                .app_log_dir()
                .map_err(|e| QuantumpassError::App {
                    message: format!("Failed to get log directory: {e}"),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            create_dir_all(&log_dir).map_err(|e| QuantumpassError::App {
                message: format!("Failed to create log directory: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

            // Initialize logger FIRST
            LoggerInitialize(&log_dir)?;

            info!("quantumpass starting");
            info!("Log directory: {}", log_dir.display());

            // Initialize AppState after the Tauri runtime is running
            app.manage(AppState::default());

            // Best-effort window icon: attempt, log, continue
            if let Some(bytes) = icon::load(Path::new(ICON_FILE_NAME)) {
                match tauri::image::Image::from_bytes(&bytes) {
                    Ok(image) => {
                        if let Some(window) = app.get_webview_window("main") {
                            if let Err(e) = window.set_icon(image) {
                                warn!("Failed to set window icon: {e}");
                            }
                        }
                    }
                    Err(e) => warn!("Failed to decode icon: {e}"),
                }
            }

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
