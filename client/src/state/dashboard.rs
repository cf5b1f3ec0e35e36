//! Employee dashboard data: salary slips, expenses, and derived totals.
//!
//! DESIGN
//! ======
//! Slips and expenses load independently and may finish in either order, so
//! each list tracks its own loading flag. The page holds a transient copy for
//! the lifetime of one mount; nothing here outlives navigation.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{Expense, SalarySlip};

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub slips: Vec<SalarySlip>,
    pub expenses: Vec<Expense>,
    pub slips_loading: bool,
    pub expenses_loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self { slips: Vec::new(), expenses: Vec::new(), slips_loading: true, expenses_loading: true }
    }
}

impl DashboardState {
    pub fn total_salary(&self) -> f64 {
        self.slips.iter().map(|s| s.amount).sum()
    }

    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub fn net_balance(&self) -> f64 {
        self.total_salary() - self.total_expenses()
    }

    /// `(month, amount)` pairs for the salary chart.
    pub fn salary_series(&self) -> Vec<(String, f64)> {
        self.slips.iter().map(|s| (s.month.clone(), s.amount)).collect()
    }

    /// `(description, amount)` pairs for the expense chart.
    pub fn expense_series(&self) -> Vec<(String, f64)> {
        self.expenses.iter().map(|e| (e.description.clone(), e.amount)).collect()
    }
}
