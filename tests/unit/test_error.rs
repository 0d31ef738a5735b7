use reqwest::StatusCode;
use std::time::Duration;
use storefront_client::error::AppError;

#[test]
fn test_app_error_display_api_is_backend_message() {
    let error = AppError::api(StatusCode::UNAUTHORIZED, "Invalid credentials");
    assert_eq!(error.to_string(), "Invalid credentials");
    assert_eq!(error.status(), Some(StatusCode::UNAUTHORIZED));
}

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
    assert_eq!(error.status(), None);
}

#[test]
fn test_app_error_display_timeout() {
    let error = AppError::Timeout(Duration::from_secs(5));
    assert_eq!(error.to_string(), "request timed out after 5000ms");
    assert!(error.is_timeout());
}

#[test]
fn test_app_error_display_deserialization() {
    let error = AppError::Deserialization("expected value".to_string());
    assert_eq!(error.to_string(), "deserialization error: expected value");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("price must be positive".to_string());
    assert_eq!(error.to_string(), "invalid input: price must be positive");
}

#[test]
fn test_app_error_display_invalid_response() {
    let error = AppError::InvalidResponse("missing uuid".to_string());
    assert_eq!(error.to_string(), "invalid response: missing uuid");
}

// reqwest::Error cannot be constructed directly; the Network variant is
// covered by the integration tests

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("disk full");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
    assert!(std::error::Error::source(&AppError::Io(std::io::Error::other("x"))).is_some());
}
