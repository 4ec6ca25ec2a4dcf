//! Display formatting shared by every view: INR currency with Indian digit
//! grouping and day/short-month/year dates.

use time::Date;
use time::macros::format_description;

/// Format a rupee amount with the Indian grouping scheme and no fractional
/// digits, e.g. `₹12,50,00,000`.
pub fn format_inr(amount: i64) -> String {
    let grouped = group_indian(&amount.unsigned_abs().to_string());
    if amount < 0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Format a rupee amount in crores with one decimal, e.g. `₹12.5Cr`.
pub fn format_crore(amount: i64) -> String {
    format!("₹{:.1}Cr", amount as f64 / 10_000_000.0)
}

/// Format a date as `28 Nov 2024`.
pub fn format_date(date: Date) -> String {
    let format = format_description!("[day padding:none] [month repr:short] [year]");
    date.format(&format).unwrap_or_else(|_| date.to_string())
}

// Indian grouping: the last three digits form one group, everything above
// groups in twos.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut parts: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        parts.push(&head[i - 2..i]);
        i -= 2;
    }
    parts.push(&head[..i]);
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}
