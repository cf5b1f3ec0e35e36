use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"employee\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

#[test]
fn role_parse_accepts_known_values_only() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse(" employee "), Some(Role::Employee));
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse("admin2"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_as_str_matches_parse() {
    for role in [Role::Employee, Role::Admin] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn login_response_deserializes() {
    let body: LoginResponse =
        serde_json::from_str(r#"{"access_token":"T","role":"employee"}"#).unwrap();
    assert_eq!(body, LoginResponse { access_token: "T".to_owned(), role: Role::Employee });
}

#[test]
fn login_response_rejects_unknown_role() {
    let result = serde_json::from_str::<LoginResponse>(r#"{"access_token":"T","role":"root"}"#);
    assert!(result.is_err());
}

#[test]
fn employee_summary_ignores_extra_backend_fields() {
    let rows: Vec<EmployeeSummary> = serde_json::from_str(
        r#"[{"id":3,"email":"e@x.com","role":"employee","password":"$2b$12$hash"}]"#,
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 3);
    assert_eq!(rows[0].email, "e@x.com");
    assert_eq!(rows[0].role, Role::Employee);
}

#[test]
fn salary_slip_accepts_integer_amount() {
    let slip: SalarySlip =
        serde_json::from_str(r#"{"id":1,"user_id":5,"month":"2025-03","amount":50000}"#).unwrap();
    assert_eq!(slip.month, "2025-03");
    assert!((slip.amount - 50000.0).abs() < f64::EPSILON);
}

#[test]
fn ack_tolerates_missing_msg() {
    let ack: ApiAck = serde_json::from_str("{}").unwrap();
    assert!(ack.msg.is_none());
    let ack: ApiAck = serde_json::from_str(r#"{"msg":"Salary slip created"}"#).unwrap();
    assert_eq!(ack.msg.as_deref(), Some("Salary slip created"));
}

// =============================================================
// Create payloads
// =============================================================

#[test]
fn new_salary_slip_serializes_exact_body() {
    let slip = NewSalarySlip::new(5, "2025-03", 50000.0).unwrap();
    assert_eq!(
        serde_json::to_value(&slip).unwrap(),
        serde_json::json!({"user_id": 5, "month": "2025-03", "amount": 50000.0})
    );
}

#[test]
fn new_salary_slip_trims_month() {
    let slip = NewSalarySlip::new(1, "  March 2025 ", 10.0).unwrap();
    assert_eq!(slip.month(), "March 2025");
}

#[test]
fn new_salary_slip_rejects_missing_fields() {
    assert!(matches!(NewSalarySlip::new(0, "2025-03", 1.0), Err(ApiError::Validation(_))));
    assert!(matches!(NewSalarySlip::new(-2, "2025-03", 1.0), Err(ApiError::Validation(_))));
    assert!(matches!(NewSalarySlip::new(5, "   ", 1.0), Err(ApiError::Validation(_))));
    assert!(matches!(NewSalarySlip::new(5, "2025-03", 0.0), Err(ApiError::Validation(_))));
    assert!(matches!(NewSalarySlip::new(5, "2025-03", f64::NAN), Err(ApiError::Validation(_))));
    assert!(matches!(
        NewSalarySlip::new(5, "2025-03", f64::INFINITY),
        Err(ApiError::Validation(_))
    ));
}

#[test]
fn new_expense_rejects_blank_description_and_zero_amount() {
    assert!(matches!(NewExpense::new("", 10.0), Err(ApiError::Validation(_))));
    assert!(matches!(NewExpense::new("Taxi", 0.0), Err(ApiError::Validation(_))));
    assert!(matches!(NewExpense::new("Taxi", f64::NAN), Err(ApiError::Validation(_))));
}

#[test]
fn new_expense_serializes_body() {
    let expense = NewExpense::new(" Taxi ", 12.5).unwrap();
    assert_eq!(
        serde_json::to_value(&expense).unwrap(),
        serde_json::json!({"description": "Taxi", "amount": 12.5})
    );
}
