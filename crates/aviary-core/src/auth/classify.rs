//! Status-code classification for login responses.

use super::types::{LoginOutcome, LoginResponse, Outcome};

/// Classifies an HTTP status code and raw response body into a [`LoginOutcome`].
///
/// Pure: no I/O, no state, deterministic. First match wins:
/// 2xx bodies are decoded (decode failure is a contract violation, reported
/// as `PathError`, not a server error), 4xx is `PathError`, 5xx is
/// `ServerError`, and anything else (3xx the transport left unhandled,
/// out-of-range codes) is `NetworkFailure`.
pub fn classify(status: u16, body: &[u8]) -> LoginOutcome {
    match status {
        0..300 => decode_body(body),
        400..500 => Outcome::PathError,
        500..600 => Outcome::ServerError,
        _ => Outcome::NetworkFailure,
    }
}

fn decode_body(body: &[u8]) -> LoginOutcome {
    match serde_json::from_slice::<LoginResponse>(body) {
        Ok(response) => Outcome::Success(response),
        Err(_) => Outcome::PathError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL_BODY: &[u8] =
        br#"{"data":{"accessToken":"abc","refreshToken":"def"},"message":"ok","result":"SUCCESS"}"#;

    /// Test: 2xx with a well-formed body is `Success` with the input fields.
    #[test]
    fn test_2xx_well_formed_body_is_success() {
        for status in [200, 201, 204, 299] {
            match classify(status, CANONICAL_BODY) {
                Outcome::Success(response) => {
                    assert_eq!(response.data.access_token, "abc");
                    assert_eq!(response.data.refresh_token.as_deref(), Some("def"));
                    assert_eq!(response.message, "ok");
                    assert_eq!(response.result, "SUCCESS");
                }
                other => panic!("expected Success for status {status}, got {other:?}"),
            }
        }
    }

    /// Test: 2xx with a body missing `accessToken` is `PathError`.
    #[test]
    fn test_2xx_missing_access_token_is_path_error() {
        let body = br#"{"data":{"refreshToken":"def"},"message":"ok","result":"SUCCESS"}"#;
        assert_eq!(classify(200, body), Outcome::PathError);
    }

    /// Test: 2xx with a malformed or empty body is `PathError`.
    #[test]
    fn test_2xx_undecodable_body_is_path_error() {
        assert_eq!(classify(200, b""), Outcome::PathError);
        assert_eq!(classify(200, b"not json"), Outcome::PathError);
        assert_eq!(classify(200, br#"{"message":"ok"}"#), Outcome::PathError);
    }

    /// Test: every 4xx is `PathError`, regardless of body content.
    #[test]
    fn test_4xx_is_path_error() {
        for status in 400..500 {
            assert_eq!(classify(status, CANONICAL_BODY), Outcome::PathError);
            assert_eq!(classify(status, b""), Outcome::PathError);
        }
    }

    /// Test: every 5xx is `ServerError`.
    #[test]
    fn test_5xx_is_server_error() {
        for status in 500..600 {
            assert_eq!(classify(status, b""), Outcome::ServerError);
        }
    }

    /// Test: 3xx and out-of-range codes fall through to `NetworkFailure`.
    #[test]
    fn test_unhandled_status_is_network_failure() {
        for status in [300, 301, 308, 399, 600, 999] {
            assert_eq!(classify(status, CANONICAL_BODY), Outcome::NetworkFailure);
        }
    }

    /// Test: 404 with any body is `PathError`.
    #[test]
    fn test_404_any_body_is_path_error() {
        assert_eq!(classify(404, b"<html>not found</html>"), Outcome::PathError);
    }
}
