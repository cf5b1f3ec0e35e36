use super::*;

#[test]
fn unauthorized_and_forbidden_are_auth_errors() {
    assert_eq!(
        ApiError::from_status(401, r#"{"detail":"Invalid credentials"}"#),
        ApiError::Auth("Invalid credentials".to_owned())
    );
    assert_eq!(
        ApiError::from_status(403, r#"{"detail":"Admin access required"}"#),
        ApiError::Auth("Admin access required".to_owned())
    );
}

#[test]
fn not_found_uses_detail() {
    assert_eq!(
        ApiError::from_status(404, r#"{"detail":"Salary slip not found"}"#),
        ApiError::NotFound("Salary slip not found".to_owned())
    );
}

#[test]
fn duplicate_signup_is_validation() {
    assert_eq!(
        ApiError::from_status(400, r#"{"detail":"User already exists"}"#),
        ApiError::Validation("User already exists".to_owned())
    );
}

#[test]
fn list_detail_falls_back_to_default_message() {
    let body = r#"{"detail":[{"loc":["body","amount"],"msg":"field required"}]}"#;
    assert_eq!(ApiError::from_status(422, body), ApiError::Validation("Invalid request".to_owned()));
}

#[test]
fn non_json_body_falls_back_to_default_message() {
    assert_eq!(ApiError::from_status(401, "<html>nope</html>"), ApiError::Auth("Not authorized".to_owned()));
    assert_eq!(ApiError::from_status(404, ""), ApiError::NotFound("Not found".to_owned()));
}

#[test]
fn five_hundreds_are_server_errors() {
    assert_eq!(
        ApiError::from_status(500, r#"{"detail":"boom"}"#),
        ApiError::Server { status: 500, message: "boom".to_owned() }
    );
    assert_eq!(
        ApiError::from_status(502, ""),
        ApiError::Server { status: 502, message: "Something went wrong".to_owned() }
    );
}

#[test]
fn display_shows_detail_for_user_facing_classes() {
    assert_eq!(ApiError::Auth("Invalid credentials".to_owned()).to_string(), "Invalid credentials");
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
}

#[test]
fn kind_labels_each_class() {
    assert_eq!(ApiError::Validation(String::new()).kind(), "validation");
    assert_eq!(ApiError::Decode(String::new()).kind(), "decode");
    assert_eq!(ApiError::Server { status: 500, message: String::new() }.kind(), "server");
}
