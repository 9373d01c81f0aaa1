use qrng_core::error::qrng::QrngError;
use qrng_core::qrng::QrngClient;

use common::ApiKey;

use wiremock::matchers::{header, method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_key() -> ApiKey {
    ApiKey::new(String::from("test-key"))
}

/// **VALUE**: Verifies a 200 response body is returned verbatim, and that
/// the request carries the key header and all three query parameters.
///
/// **WHY THIS MATTERS**: The fetcher's whole contract is "one GET, raw
/// bytes back". If the query parameters or the `x-api-key` header are
/// dropped, the real API returns 401/400 and generation never works.
///
/// **BUG THIS CATCHES**: Renamed query keys (`len` vs `length`), a missing
/// header, or any response parsing that alters the bytes.
#[tokio::test]
async fn given_ok_response_when_fetching_then_returns_body_bytes_verbatim() {
    // GIVEN: A mock QRNG endpoint expecting a fully-formed request
    let server = MockServer::start().await;
    let body: Vec<u8> = vec![98, 1, 55, 0, 255];

    Mock::given(method("GET"))
        .and(header("x-api-key", "test-key"))
        .and(query_param("length", "5"))
        .and(query_param("type", "uint8"))
        .and(query_param("size", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Fetching 5 bytes
    let client = QrngClient::new(&server.uri()).unwrap();
    let bytes = client
        .fetch_bytes(&test_key(), 5, "uint8", 100)
        .await
        .unwrap();

    // THEN: The body comes back untouched
    assert_eq!(bytes, body);
}

/// **VALUE**: Verifies a non-200 response becomes an API error whose
/// message contains the response body text.
///
/// **WHY THIS MATTERS**: The ANU API explains rejections in the body
/// ("Invalid API key"). That text must survive into the error Display so
/// the log shows the real cause even though the UI shows a generic message.
///
/// **BUG THIS CATCHES**: An error path that keeps only the status code and
/// drops the body, leaving nothing to debug with.
#[tokio::test]
async fn given_forbidden_response_when_fetching_then_api_error_carries_body() {
    // GIVEN: The API rejecting the key
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    // WHEN: Fetching
    let client = QrngClient::new(&server.uri()).unwrap();
    let result = client.fetch_bytes(&test_key(), 8, "uint8", 100).await;

    // THEN: Api error with status and body preserved
    match &result {
        Err(QrngError::Api { status, body, .. }) => {
            assert_eq!(status.0, 403);
            assert!(status.is_client_error());
            assert_eq!(body, "Invalid API key");
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    // AND: The Display output contains the body text
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Invalid API key"));
    assert!(message.contains("403"));
}

/// **VALUE**: Verifies transport failures (nothing listening) surface as a
/// transport error, not a panic or a hang.
///
/// **BUG THIS CATCHES**: An `unwrap()` on `send()`, which would crash the
/// shell whenever the machine is offline.
#[tokio::test]
async fn given_unreachable_server_when_fetching_then_returns_http_error() {
    // GIVEN: A port with no listener
    let client = QrngClient::new("http://127.0.0.1:9").unwrap();

    // WHEN: Fetching
    let result = client.fetch_bytes(&test_key(), 4, "uint8", 100).await;

    // THEN: Transport error
    assert!(matches!(result, Err(QrngError::Http { .. })));
}

/// **VALUE**: Verifies a malformed base URL is rejected at client
/// construction.
///
/// **BUG THIS CATCHES**: URL validation deferred to request time, where it
/// would be misreported as a network failure.
#[test]
fn given_malformed_base_url_when_constructing_client_then_returns_url_error() {
    let result = QrngClient::new("not-a-url");

    assert!(matches!(result, Err(QrngError::UrlParse { .. })));
}

/// **VALUE**: Verifies the fetcher performs no count check: a short body is
/// returned as-is.
///
/// **WHY THIS MATTERS**: The bounds check deliberately lives in the
/// formatter, which turns the shortfall into a named error. The fetcher
/// must stay a verbatim pipe or that error would be duplicated or masked.
#[tokio::test]
async fn given_short_body_when_fetching_then_returns_short_body_unchecked() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1, 2]))
        .mount(&server)
        .await;

    let client = QrngClient::new(&server.uri()).unwrap();
    let bytes = client
        .fetch_bytes(&test_key(), 10, "uint8", 100)
        .await
        .unwrap();

    assert_eq!(bytes, vec![1, 2]);
}
