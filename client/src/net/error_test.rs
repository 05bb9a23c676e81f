use super::*;

#[test]
fn error_body_message_prefers_message_key() {
    assert_eq!(
        error_body_message(r#"{"message":"Invalid credentials","error":"ignored"}"#),
        Some("Invalid credentials".to_owned())
    );
}

#[test]
fn error_body_message_falls_back_to_error_key() {
    assert_eq!(
        error_body_message(r#"{"error":"Email already registered"}"#),
        Some("Email already registered".to_owned())
    );
}

#[test]
fn error_body_message_ignores_blank_and_non_json_bodies() {
    assert_eq!(error_body_message(r#"{"message":"   "}"#), None);
    assert_eq!(error_body_message("<html>502 Bad Gateway</html>"), None);
    assert_eq!(error_body_message(""), None);
}

#[test]
fn network_errors_are_not_rejections() {
    assert!(!ApiError::Network("offline".to_owned()).is_rejection());
    assert!(ApiError::Auth { status: 401, message: "x".to_owned() }.is_rejection());
    assert!(ApiError::Decode("bad json".to_owned()).is_rejection());
}

#[test]
fn user_message_passes_backend_text_through() {
    let err = ApiError::Validation { status: 409, message: "Username taken".to_owned() };
    assert_eq!(err.user_message(), "Username taken");
    assert!(ApiError::Network("dns".to_owned()).user_message().starts_with("Unable to reach"));
}

#[test]
fn display_includes_status() {
    let err = ApiError::Auth { status: 401, message: "Invalid credentials".to_owned() };
    assert_eq!(err.to_string(), "unauthorized (401): Invalid credentials");
}
