use super::*;

#[test]
fn endpoints_format_expected_paths() {
    let base = "http://127.0.0.1:5000";
    assert_eq!(login_endpoint(base), "http://127.0.0.1:5000/login");
    assert_eq!(user_endpoint(base, 42), "http://127.0.0.1:5000/api/user/42");
    assert_eq!(translations_endpoint(base), "http://127.0.0.1:5000/api/translations");
}

#[test]
fn translations_lang_stays_a_single_query_value() {
    assert_eq!(translations_query("fr"), [("lang", "fr")]);
    assert_eq!(translations_query("en&x=1"), [("lang", "en&x=1")]);
}

#[test]
fn http_backend_trims_trailing_slash() {
    assert_eq!(HttpBackend::new("https://api.test//").base_url(), "https://api.test");
}

#[test]
fn status_error_prefers_backend_message() {
    assert_eq!(
        status_error(401, r#"{"message":"Incorrect Password"}"#),
        ApiError::Status { status: 401, message: "Incorrect Password".to_owned() }
    );
    assert_eq!(
        status_error(400, r#"{"msg":"Invalid or expired token"}"#),
        ApiError::Status { status: 400, message: "Invalid or expired token".to_owned() }
    );
}

#[test]
fn status_error_falls_back_on_unparseable_body() {
    assert_eq!(
        status_error(502, "<html>Bad Gateway</html>"),
        ApiError::Status { status: 502, message: "request failed".to_owned() }
    );
}

#[test]
fn api_error_display_includes_status() {
    let err = ApiError::Status { status: 404, message: "User not found".to_owned() };
    assert_eq!(err.to_string(), "request failed with status 404: User not found");
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn http_backend_is_unavailable_natively() {
    let backend = HttpBackend::new("http://127.0.0.1:5000");
    assert_eq!(backend.fetch_translations("en").await, Err(ApiError::Unavailable));
    assert_eq!(backend.login("a@b.com", "pw").await, Err(ApiError::Unavailable));
}
