//! Admin page data: the employee roster.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::EmployeeSummary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminState {
    pub employees: Vec<EmployeeSummary>,
    pub loading: bool,
}

impl Default for AdminState {
    fn default() -> Self {
        Self { employees: Vec::new(), loading: true }
    }
}

impl AdminState {
    /// Label for the employee select, e.g. `e@x.com (ID: 3)`.
    pub fn option_label(employee: &EmployeeSummary) -> String {
        format!("{} (ID: {})", employee.email, employee.id)
    }

    pub fn find(&self, id: i64) -> Option<&EmployeeSummary> {
        self.employees.iter().find(|e| e.id == id)
    }
}
