use super::*;
use crate::state::session::MemorySessionStorage;

fn client() -> (ApiClient<MemorySessionStorage>, SessionStore<MemorySessionStorage>) {
    let store = SessionStore::new(MemorySessionStorage::default());
    (ApiClient::new(ApiConfig::new("http://api.test/"), store.clone()), store)
}

// =============================================================
// Public endpoints
// =============================================================

#[test]
fn login_request_is_unauthenticated_post() {
    let (api, store) = client();
    store.set_session("stale", Role::Admin, "old@x.com");
    let req = api.login_request("a@b.com", "x");
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.url, "http://api.test/auth/login");
    assert_eq!(req.bearer, None);
    assert_eq!(req.body, Some(json!({"email": "a@b.com", "password": "x"})));
}

#[test]
fn signup_request_sends_lowercase_role() {
    let (api, _) = client();
    let req = api.signup_request("e@x.com", "pw", Role::Employee);
    assert_eq!(req.url, "http://api.test/auth/signup");
    assert_eq!(req.authorization(), None);
    assert_eq!(req.body, Some(json!({"email": "e@x.com", "password": "pw", "role": "employee"})));
}

// =============================================================
// Bearer handling
// =============================================================

#[test]
fn authenticated_requests_carry_current_token() {
    let (api, store) = client();
    store.set_session("T", Role::Employee, "a@b.com");
    for req in [api.list_salary_slips_request(), api.list_expenses_request(), api.list_employees_request()] {
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.authorization().as_deref(), Some("Bearer T"));
        assert!(req.body.is_none());
    }
}

#[test]
fn token_is_read_at_call_time() {
    let (api, store) = client();
    store.set_session("first", Role::Employee, "a@b.com");
    assert_eq!(api.list_expenses_request().bearer.as_deref(), Some("first"));
    store.set_session("second", Role::Employee, "a@b.com");
    assert_eq!(api.list_expenses_request().bearer.as_deref(), Some("second"));
}

#[test]
fn missing_session_sends_without_authorization() {
    let (api, _) = client();
    let req = api.list_salary_slips_request();
    assert_eq!(req.url, "http://api.test/salary-slip");
    assert_eq!(req.bearer, None);
    assert_eq!(req.authorization(), None);
}

#[test]
fn cleared_session_drops_authorization() {
    let (api, store) = client();
    store.set_session("T", Role::Employee, "a@b.com");
    store.clear_session();
    assert_eq!(api.list_expenses_request().authorization(), None);
}

// =============================================================
// Paths
// =============================================================

#[test]
fn endpoint_paths_match_backend() {
    let (api, _) = client();
    assert_eq!(api.list_employees_request().url, "http://api.test/admin/employees");
    assert_eq!(api.list_expenses_request().url, "http://api.test/expense");
    assert_eq!(api.salary_slip_pdf_request(42).url, "http://api.test/salary-slip/42/pdf");
}

// =============================================================
// Create calls
// =============================================================

#[test]
fn admin_creates_slip_with_exact_body_and_bearer() {
    let (api, store) = client();
    store.set_session("T", Role::Admin, "boss@x.com");
    let req = api.create_salary_slip_request(5, "2025-03", 50000.0).unwrap();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.url, "http://api.test/salary-slip");
    assert_eq!(req.authorization().as_deref(), Some("Bearer T"));
    assert_eq!(req.body, Some(json!({"user_id": 5, "month": "2025-03", "amount": 50000.0})));
}

#[test]
fn create_slip_rejects_bad_fields_before_dispatch() {
    let (api, store) = client();
    store.set_session("T", Role::Admin, "boss@x.com");
    assert!(matches!(api.create_salary_slip_request(0, "2025-03", 1.0), Err(ApiError::Validation(_))));
    assert!(matches!(api.create_salary_slip_request(5, "", 1.0), Err(ApiError::Validation(_))));
    assert!(matches!(api.create_salary_slip_request(5, "2025-03", 0.0), Err(ApiError::Validation(_))));
    assert!(matches!(api.create_salary_slip_request(5, "2025-03", f64::NAN), Err(ApiError::Validation(_))));
}

#[test]
fn create_expense_request_body() {
    let (api, store) = client();
    store.set_session("T", Role::Employee, "a@b.com");
    let req = api.create_expense_request("Taxi", 12.5).unwrap();
    assert_eq!(req.url, "http://api.test/expense");
    assert_eq!(req.authorization().as_deref(), Some("Bearer T"));
    assert_eq!(req.body, Some(json!({"description": "Taxi", "amount": 12.5})));
}

#[test]
fn create_expense_rejects_blank_description() {
    let (api, _) = client();
    assert!(matches!(api.create_expense_request("  ", 5.0), Err(ApiError::Validation(_))));
}

#[test]
fn method_names() {
    assert_eq!(HttpMethod::Get.as_str(), "GET");
    assert_eq!(HttpMethod::Post.as_str(), "POST");
}
