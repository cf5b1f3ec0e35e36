//! Wire DTOs for the payroll backend.
//!
//! DESIGN
//! ======
//! Response types mirror backend JSON rows. Unknown fields are ignored so the
//! client keeps working when the backend returns more than it needs (the
//! employee listing, for example, returns full user rows).
//!
//! Create payloads (`NewSalarySlip`, `NewExpense`) can only be built through
//! their validating constructors, so a payload that reaches the transport has
//! already passed the client-side checks.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Access class of an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Admin,
}

impl Role {
    /// Wire/storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Admin => "admin",
        }
    }

    /// Parse a stored role string. Anything unknown is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "employee" => Some(Self::Employee),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Human label shown in the navbar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Admin => "Administrator",
        }
    }
}

/// Body of a successful `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: Role,
}

/// Acknowledgement body returned by signup and create endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiAck {
    #[serde(default)]
    pub msg: Option<String>,
}

/// Read-only employee row from `GET /admin/employees`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

/// One month's pay issued to an employee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalarySlip {
    pub id: i64,
    pub month: String,
    pub amount: f64,
}

/// An expense submitted by the signed-in employee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: f64,
}

/// Validated `POST /salary-slip` payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewSalarySlip {
    user_id: i64,
    month: String,
    amount: f64,
}

impl NewSalarySlip {
    /// Build a payload, rejecting a non-positive user id, a blank month, or
    /// a zero/NaN/infinite amount.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] naming the first offending field.
    pub fn new(user_id: i64, month: &str, amount: f64) -> Result<Self, ApiError> {
        if user_id <= 0 {
            return Err(ApiError::Validation("Select an employee".to_owned()));
        }
        let month = month.trim();
        if month.is_empty() {
            return Err(ApiError::Validation("Month is required".to_owned()));
        }
        check_amount(amount)?;
        Ok(Self { user_id, month: month.to_owned(), amount })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Validated `POST /expense` payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    description: String,
    amount: f64,
}

impl NewExpense {
    /// Build a payload, rejecting a blank description or a zero/NaN/infinite
    /// amount.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] naming the first offending field.
    pub fn new(description: &str, amount: f64) -> Result<Self, ApiError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ApiError::Validation("Description is required".to_owned()));
        }
        check_amount(amount)?;
        Ok(Self { description: description.to_owned(), amount })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

fn check_amount(amount: f64) -> Result<(), ApiError> {
    if !amount.is_finite() || amount == 0.0 {
        return Err(ApiError::Validation("Amount must be a non-zero number".to_owned()));
    }
    Ok(())
}
