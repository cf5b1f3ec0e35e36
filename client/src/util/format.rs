//! Display formatting for money and downloads.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

pub const CURRENCY_SYMBOL: &str = "₹";

/// `₹ 50000` for whole amounts, `₹ 12.50` otherwise.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{CURRENCY_SYMBOL} {amount:.0}")
    } else {
        format!("{CURRENCY_SYMBOL} {amount:.2}")
    }
}

/// File name offered when saving a salary slip PDF.
pub fn pdf_file_name(slip_id: i64) -> String {
    format!("salary_slip_{slip_id}.pdf")
}
