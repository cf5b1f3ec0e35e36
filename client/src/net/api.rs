//! REST client for the payroll backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with a network error since the backend
//! is only reached from the browser.
//!
//! DESIGN
//! ======
//! Each operation is split into a pure request builder (`*_request`) and a
//! dispatch step. Builders read the session store at call time to attach the
//! bearer token, and run client-side validation before anything touches the
//! network. No call retries; one request is outstanding per call.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`ApiError`] for the page to surface as a toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::json;

use super::error::ApiError;
use super::types::{ApiAck, EmployeeSummary, Expense, LoginResponse, NewExpense, NewSalarySlip, Role, SalarySlip};
use crate::config::ApiConfig;
use crate::state::session::{BrowserSessionStorage, SessionStorage, SessionStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully prepared request, ready for the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Bearer token, when the endpoint is authenticated and a session exists.
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// `Authorization` header value, if any.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Authenticated access to the payroll backend.
#[derive(Clone, Debug)]
pub struct ApiClient<S = BrowserSessionStorage> {
    config: ApiConfig,
    session: SessionStore<S>,
}

impl<S: SessionStorage> ApiClient<S> {
    pub fn new(config: ApiConfig, session: SessionStore<S>) -> Self {
        Self { config, session }
    }

    fn public(&self, method: HttpMethod, path: &str, body: Option<serde_json::Value>) -> ApiRequest {
        ApiRequest { method, url: self.config.url(path), bearer: None, body }
    }

    fn authed(&self, method: HttpMethod, path: &str, body: Option<serde_json::Value>) -> ApiRequest {
        let bearer = self.session.get_session().map(|s| s.token);
        ApiRequest { method, url: self.config.url(path), bearer, body }
    }

    // =========================================================================
    // REQUEST BUILDERS
    // =========================================================================

    pub fn login_request(&self, email: &str, password: &str) -> ApiRequest {
        self.public(HttpMethod::Post, "/auth/login", Some(json!({ "email": email, "password": password })))
    }

    pub fn signup_request(&self, email: &str, password: &str, role: Role) -> ApiRequest {
        self.public(
            HttpMethod::Post,
            "/auth/signup",
            Some(json!({ "email": email, "password": password, "role": role })),
        )
    }

    pub fn list_employees_request(&self) -> ApiRequest {
        self.authed(HttpMethod::Get, "/admin/employees", None)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a non-positive user id, a blank
    /// month, or a zero/NaN amount.
    pub fn create_salary_slip_request(&self, user_id: i64, month: &str, amount: f64) -> Result<ApiRequest, ApiError> {
        let slip = NewSalarySlip::new(user_id, month, amount)?;
        let body = serde_json::to_value(&slip).map_err(|e| ApiError::Validation(e.to_string()))?;
        Ok(self.authed(HttpMethod::Post, "/salary-slip", Some(body)))
    }

    pub fn list_salary_slips_request(&self) -> ApiRequest {
        self.authed(HttpMethod::Get, "/salary-slip", None)
    }

    pub fn salary_slip_pdf_request(&self, slip_id: i64) -> ApiRequest {
        self.authed(HttpMethod::Get, &format!("/salary-slip/{slip_id}/pdf"), None)
    }

    pub fn list_expenses_request(&self) -> ApiRequest {
        self.authed(HttpMethod::Get, "/expense", None)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank description or a
    /// zero/NaN amount.
    pub fn create_expense_request(&self, description: &str, amount: f64) -> Result<ApiRequest, ApiError> {
        let expense = NewExpense::new(description, amount)?;
        let body = serde_json::to_value(&expense).map_err(|e| ApiError::Validation(e.to_string()))?;
        Ok(self.authed(HttpMethod::Post, "/expense", Some(body)))
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] for bad credentials, plus transport failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        send_json(self.login_request(email, password)).await
    }

    /// `POST /auth/signup`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] for a duplicate email or malformed input.
    pub async fn signup(&self, email: &str, password: &str, role: Role) -> Result<ApiAck, ApiError> {
        send_json(self.signup_request(email, password, role)).await
    }

    /// `GET /admin/employees` (admin only).
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] when the caller is not an admin.
    pub async fn list_employees(&self) -> Result<Vec<EmployeeSummary>, ApiError> {
        send_json(self.list_employees_request()).await
    }

    /// `POST /salary-slip` (admin only). Validated before dispatch.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] for bad fields, without a network call.
    pub async fn create_salary_slip(&self, user_id: i64, month: &str, amount: f64) -> Result<ApiAck, ApiError> {
        send_json(self.create_salary_slip_request(user_id, month, amount)?).await
    }

    /// `GET /salary-slip`, scoped by the backend to the caller.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] without a valid session.
    pub async fn list_salary_slips(&self) -> Result<Vec<SalarySlip>, ApiError> {
        send_json(self.list_salary_slips_request()).await
    }

    /// `GET /salary-slip/{id}/pdf` as raw bytes.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] for an unknown or foreign slip,
    /// [`ApiError::Auth`] without a valid session.
    pub async fn download_salary_slip_pdf(&self, slip_id: i64) -> Result<Vec<u8>, ApiError> {
        send_bytes(self.salary_slip_pdf_request(slip_id)).await
    }

    /// `GET /expense`, scoped to the signed-in employee.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] without a valid session.
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        send_json(self.list_expenses_request()).await
    }

    /// `POST /expense`. Validated before dispatch.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] for bad fields, without a network call.
    pub async fn create_expense(&self, description: &str, amount: f64) -> Result<ApiAck, ApiError> {
        send_json(self.create_expense_request(description, amount)?).await
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
async fn dispatch(request: &ApiRequest) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let mut builder = match request.method {
        HttpMethod::Get => Request::get(&request.url),
        HttpMethod::Post => Request::post(&request.url),
    };
    if let Some(auth) = request.authorization() {
        builder = builder.header("Authorization", &auth);
    }
    let sent = match &request.body {
        Some(body) => {
            builder
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }
    Ok(resp)
}

async fn send_json<T: DeserializeOwned>(request: ApiRequest) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = match dispatch(&request).await {
            Ok(resp) => resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string())),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            log_failure(&request, e);
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable(&request))
    }
}

async fn send_bytes(request: ApiRequest) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = match dispatch(&request).await {
            Ok(resp) => resp.binary().await.map_err(|e| ApiError::Decode(e.to_string())),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            log_failure(&request, e);
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable(&request))
    }
}

#[cfg(feature = "hydrate")]
fn log_failure(request: &ApiRequest, error: &ApiError) {
    leptos::logging::warn!(
        "api {} {} failed: kind={} {}",
        request.method.as_str(),
        request.url,
        error.kind(),
        error
    );
}

#[cfg(not(feature = "hydrate"))]
fn unavailable(request: &ApiRequest) -> ApiError {
    let _ = request;
    ApiError::Network("not available on server".to_owned())
}
