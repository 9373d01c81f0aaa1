pub mod config;
pub mod error;
pub mod generator;
pub mod password;
pub mod qrng;

#[cfg(test)]
mod tests;

pub const QRNG_API_HOSTNAME: &str = "api.quantumnumbers.anu.edu.au";
pub const QRNG_API_BASE_URL: &str = const_format::concatcp!("https://", QRNG_API_HOSTNAME);

/// Data type tag sent on every request. The formatter consumes single bytes,
/// so the API is always asked for uint8 values.
pub const QRNG_DATA_TYPE: &str = "uint8";

/// Server-side batching hint, opaque to this program.
pub const QRNG_BLOCK_SIZE: u32 = 100;
