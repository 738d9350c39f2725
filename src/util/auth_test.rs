use super::*;

#[test]
fn validate_login_input_trims_fields() {
    assert_eq!(
        validate_login_input("  ann@example.com ", " secret "),
        Ok(("ann@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("ann@example.com", "   "), Err("Enter both email and password."));
}

#[test]
fn login_error_message_surfaces_backend_message() {
    let err = ApiError::Status { status: 401, message: "Incorrect Password".to_owned() };
    assert_eq!(login_error_message(&err), "Incorrect Password");
}

#[test]
fn login_error_message_for_transport_failure() {
    let err = ApiError::Transport("Failed to fetch".to_owned());
    assert_eq!(login_error_message(&err), "Unable to reach the server. Try again later.");
    assert_eq!(login_error_message(&ApiError::Decode("eof".to_owned())), "Unexpected response from the server.");
}
