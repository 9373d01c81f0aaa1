//! Best-effort application icon loading.

use std::path::Path;

use log::{info, warn};

/// Read an icon file, returning `None` on any failure.
///
/// The icon is cosmetic: a missing or unreadable file logs a warning and
/// the application continues without one.
pub fn load(path: &Path) -> Option<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => {
            info!("Loaded icon from {} ({} bytes)", path.display(), bytes.len());
            Some(bytes)
        }
        Err(e) => {
            warn!("Failed to load icon {}: {e}", path.display());
            None
        }
    }
}
