//! Cross-layer types for quantumpass.
//!
//! This crate contains pure data structures shared between the backend
//! pipeline and the desktop shell. Nothing in here performs I/O - these are
//! just values that can be passed between layers.
//!
//! ## Architecture
//!
//! - **common** (this crate): shared value types
//! - **qrng-core**: the generation pipeline operating on these types
//! - **quantumpass**: the desktop application wiring everything together

pub mod api_key;
pub mod error;
pub mod http_status;

pub use api_key::ApiKey;
pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;

#[cfg(test)]
mod tests;
