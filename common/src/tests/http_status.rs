// Unit tests for HTTP status categorization

use crate::HttpStatusCode;

/// **VALUE**: Verifies the three categories partition the interesting codes.
///
/// **WHY THIS MATTERS**: The fetcher decides between "API rejected us" and
/// "server broke" based on these ranges; a wrong boundary would misreport
/// a bad key as a server outage.
///
/// **BUG THIS CATCHES**: Off-by-one on the 400/500/600 range edges.
#[test]
fn given_status_codes_when_categorized_then_ranges_are_exact() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());

    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(403).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(599).is_server_error());
    assert!(!HttpStatusCode(600).is_server_error());
}

/// **VALUE**: Verifies Display renders the bare numeric code.
///
/// **BUG THIS CATCHES**: Error messages embedding `HttpStatusCode(403)`
/// instead of `403`.
#[test]
fn given_status_code_when_displayed_then_shows_number() {
    assert_eq!(HttpStatusCode::from(403).to_string(), "403");
}
