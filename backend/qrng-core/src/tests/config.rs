// Unit tests for the config loader
// Fixtures are written with tempfile so every test owns its own file.

use crate::config::QuantumPassConfig;
use crate::error::config::ConfigError;

use std::io::Write;

use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// **VALUE**: Verifies a well-formed config file yields the API key.
///
/// **BUG THIS CATCHES**: A renamed serde field (`apiKey` vs `api_key`)
/// silently deserializing to the empty key.
#[test]
fn given_valid_config_when_loaded_then_returns_api_key() {
    // GIVEN: A config file with a key
    let file = write_config(r#"{"api_key": "test-key-123"}"#);

    // WHEN: Loading
    let config = QuantumPassConfig::load(file.path()).unwrap();

    // THEN: The key round-trips
    assert_eq!(config.api_key().expose(), "test-key-123");
}

/// **VALUE**: Verifies unknown fields are ignored rather than rejected.
///
/// **WHY THIS MATTERS**: Users hand-edit this file; an extra field must not
/// brick generation.
#[test]
fn given_extra_fields_when_loaded_then_they_are_ignored() {
    let file = write_config(r#"{"api_key": "k", "comment": "my personal key"}"#);

    let config = QuantumPassConfig::load(file.path()).unwrap();

    assert_eq!(config.api_key().expose(), "k");
}

/// **VALUE**: Verifies a missing file surfaces as ReadError.
///
/// **WHY THIS MATTERS**: This is the most common first-run failure; it must
/// map cleanly to the "add API key" message in the shell.
///
/// **BUG THIS CATCHES**: A loader that silently falls back to a default
/// (empty) config and then fails later at the API with a confusing 401.
#[test]
fn given_missing_file_when_loaded_then_returns_read_error() {
    let result = QuantumPassConfig::load(std::path::Path::new("/nonexistent/config.json"));

    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

/// **VALUE**: Verifies malformed JSON surfaces as ParseError.
///
/// **BUG THIS CATCHES**: The loader swallowing parse failures and returning
/// an empty config.
#[test]
fn given_malformed_json_when_loaded_then_returns_parse_error() {
    let file = write_config("{not json");

    let result = QuantumPassConfig::load(file.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies an empty api_key value fails validation.
///
/// **WHY THIS MATTERS**: An empty key would pass the file read and JSON
/// parse, then waste a network round-trip to be told the key is invalid.
#[test]
fn given_empty_api_key_when_loaded_then_returns_missing_key_error() {
    let file = write_config(r#"{"api_key": ""}"#);

    let result = QuantumPassConfig::load(file.path());

    assert!(matches!(result, Err(ConfigError::MissingApiKey { .. })));
}

/// **VALUE**: Verifies an absent api_key field behaves like an empty one.
///
/// **WHY THIS MATTERS**: Matches the original's unmarshal semantics where a
/// missing field left the key as the zero value and failed the same check.
#[test]
fn given_absent_api_key_field_when_loaded_then_returns_missing_key_error() {
    let file = write_config("{}");

    let result = QuantumPassConfig::load(file.path());

    assert!(matches!(result, Err(ConfigError::MissingApiKey { .. })));
}
