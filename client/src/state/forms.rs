//! Draft state for the login, salary-slip, and expense forms.
//!
//! DESIGN
//! ======
//! Inputs are kept as raw strings exactly as typed. `parse` turns a draft into
//! typed values and catches the avoidable round trips (blank fields, text in a
//! number box); the backend remains the authority on what is valid.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::Role;

pub const FILL_ALL_FIELDS: &str = "Please fill all fields";
pub const AMOUNT_NOT_NUMBER: &str = "Amount must be a number";
pub const EMPLOYEE_NOT_SELECTED: &str = "Select an employee";

/// Login / signup form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Role requested at signup. Ignored for login.
    pub role: Role,
    pub signup: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self { email: String::new(), password: String::new(), role: Role::Employee, signup: false }
    }
}

impl LoginForm {
    /// Trimmed email and the password as typed.
    ///
    /// # Errors
    ///
    /// Returns [`FILL_ALL_FIELDS`] when either is blank.
    pub fn parse(&self) -> Result<(String, String), &'static str> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(FILL_ALL_FIELDS);
        }
        Ok((email.to_owned(), self.password.clone()))
    }

    /// Flip between login and signup, keeping what was typed.
    pub fn toggle_mode(&mut self) {
        self.signup = !self.signup;
    }

    pub fn submit_label(&self, busy: bool) -> &'static str {
        match (busy, self.signup) {
            (true, _) => "Please wait...",
            (false, true) => "Create Account",
            (false, false) => "Login",
        }
    }
}

/// Admin "create salary slip" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlipForm {
    pub user_id: String,
    pub month: String,
    pub amount: String,
}

impl SlipForm {
    /// # Errors
    ///
    /// Returns a user-facing message when a field is blank or unparseable.
    pub fn parse(&self) -> Result<(i64, String, f64), &'static str> {
        let user_id = self.user_id.trim();
        let month = self.month.trim();
        let amount = self.amount.trim();
        if user_id.is_empty() || month.is_empty() || amount.is_empty() {
            return Err(FILL_ALL_FIELDS);
        }
        let user_id = user_id.parse::<i64>().map_err(|_| EMPLOYEE_NOT_SELECTED)?;
        let amount = parse_amount(amount)?;
        Ok((user_id, month.to_owned(), amount))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Employee "submit expense" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
}

impl ExpenseForm {
    /// # Errors
    ///
    /// Returns a user-facing message when a field is blank or unparseable.
    pub fn parse(&self) -> Result<(String, f64), &'static str> {
        let description = self.description.trim();
        let amount = self.amount.trim();
        if description.is_empty() || amount.is_empty() {
            return Err(FILL_ALL_FIELDS);
        }
        Ok((description.to_owned(), parse_amount(amount)?))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn parse_amount(raw: &str) -> Result<f64, &'static str> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AMOUNT_NOT_NUMBER),
    }
}
