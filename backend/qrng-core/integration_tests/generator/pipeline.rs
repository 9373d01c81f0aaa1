use qrng_core::error::CoreError;
use qrng_core::generator::{GenerateRequest, generate};
use qrng_core::qrng::QrngClient;

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use wiremock::matchers::{header, method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn request(length: &str) -> GenerateRequest {
    GenerateRequest {
        length: length.to_string(),
        start_uppercase: false,
        include_special: false,
        include_numbers: true,
    }
}

/// **VALUE**: End-to-end happy path - config on disk, mocked API, known
/// bytes in, known password out.
///
/// **WHY THIS MATTERS**: This is the exact sequence a button press runs.
/// The mock asserts the configured key and the parsed length actually reach
/// the wire, and the known buffer [98, 1, 55] pins the output to "8Bd".
///
/// **BUG THIS CATCHES**: Any wiring slip between the stages - wrong key
/// source, length not forwarded, formatter fed the wrong slice.
#[tokio::test]
async fn given_valid_setup_when_generating_then_returns_expected_password() {
    // GIVEN: A config file and a mock API returning known bytes
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("x-api-key", "pipeline-key"))
        .and(query_param("length", "3"))
        .and(query_param("type", "uint8"))
        .and(query_param("size", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![98, 1, 55]))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_file(r#"{"api_key": "pipeline-key"}"#);
    let client = QrngClient::new(&server.uri()).unwrap();

    // WHEN: Running the pipeline
    let password = generate(config.path(), &client, &request("3")).await.unwrap();

    // THEN: The worked-example password
    assert_eq!(password, "8Bd");
}

/// **VALUE**: Verifies invalid length input is rejected before any config
/// read or network call.
///
/// **WHY THIS MATTERS**: Validation-first ordering is a boundary contract:
/// a length of 256 must never consume API quota. The mock's `expect(0)`
/// turns any stray request into a test failure.
///
/// **BUG THIS CATCHES**: A reordered pipeline that loads the config or
/// fetches before validating.
#[tokio::test]
async fn given_invalid_length_when_generating_then_no_request_is_made() {
    // GIVEN: A mock API expecting zero requests
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_file(r#"{"api_key": "unused"}"#);
    let client = QrngClient::new(&server.uri()).unwrap();

    // WHEN: Generating with out-of-range input
    for input in ["256", "-1", "abc"] {
        let result = generate(config.path(), &client, &request(input)).await;

        // THEN: Request-stage error, nothing on the wire
        assert!(matches!(result, Err(CoreError::Request(_))), "input {input:?}");
    }
}

/// **VALUE**: Verifies a missing config file fails the pipeline at the
/// config stage, after validation but before the fetch.
#[tokio::test]
async fn given_missing_config_when_generating_then_returns_config_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = QrngClient::new(&server.uri()).unwrap();
    let result = generate(Path::new("/nonexistent/config.json"), &client, &request("8")).await;

    assert!(matches!(result, Err(CoreError::Config(_))));
}

/// **VALUE**: Verifies an API rejection propagates as a QRNG-stage error.
#[tokio::test]
async fn given_rejected_key_when_generating_then_returns_qrng_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let config = config_file(r#"{"api_key": "bad-key"}"#);
    let client = QrngClient::new(&server.uri()).unwrap();

    let result = generate(config.path(), &client, &request("8")).await;

    match result {
        Err(CoreError::Qrng(e)) => assert!(e.to_string().contains("Invalid API key")),
        other => panic!("expected Qrng error, got {other:?}"),
    }
}

/// **VALUE**: Verifies a response shorter than the requested length becomes
/// the named buffer error rather than a panic.
///
/// **WHY THIS MATTERS**: Nothing in the HTTP layer guarantees the byte
/// count; this is the unpredictable-failure case the pipeline must turn
/// into a clean error.
#[tokio::test]
async fn given_short_response_when_generating_then_returns_password_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1, 2, 3]))
        .mount(&server)
        .await;

    let config = config_file(r#"{"api_key": "k"}"#);
    let client = QrngClient::new(&server.uri()).unwrap();

    let result = generate(config.path(), &client, &request("10")).await;

    assert!(matches!(result, Err(CoreError::Password(_))));
}

/// **VALUE**: Verifies a zero-length request still performs the fetch and
/// yields the empty string.
///
/// **WHY THIS MATTERS**: Length 0 is valid input; the established behavior
/// is one (wasted) API call and an empty password, not an error.
#[tokio::test]
async fn given_zero_length_when_generating_then_returns_empty_password() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("length", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(Vec::<u8>::new()))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_file(r#"{"api_key": "k"}"#);
    let client = QrngClient::new(&server.uri()).unwrap();

    let password = generate(config.path(), &client, &request("0")).await.unwrap();

    assert_eq!(password, "");
}
