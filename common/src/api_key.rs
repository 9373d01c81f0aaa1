//! Secret API-key wrapper with redacted Debug/Display output.

use crate::{ErrorLocation, RedactError};

use std::fmt;
use std::panic::Location;

use serde::de::{Deserialize, Deserializer};
use serde::ser::Error;
use zeroize::Zeroize;

/// The ANU QRNG API key.
///
/// Never exposes its value through `Debug`, `Display`, or `Serialize`; the
/// backing string is zeroized when the key is dropped. Deserialization is
/// allowed because the key is read from the user's config file.
#[derive(Clone)]
pub struct ApiKey {
    inner: String,
}

impl ApiKey {
    pub fn new(key: String) -> Self {
        Self { inner: key }
    }

    /// The raw key value.
    ///
    /// # Security Note
    /// Only call this when placing the key on the outbound `x-api-key` header.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Key length in bytes (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for ApiKey {
    /// The empty key. Present so a config file without an `api_key` field
    /// deserializes and then fails validation, mirroring the original tool.
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey([REDACTED])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED API KEY]")
    }
}

impl Drop for ApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(ApiKey::new)
    }
}

// Prevent accidental serialization through IPC or config writes
impl serde::Serialize for ApiKey {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from("ApiKey cannot be serialized - use expose() explicitly"),
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
