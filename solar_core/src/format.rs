//! # Display Formatting
//!
//! The single source of formatting for result values. Both the on-screen
//! summary and the downloadable report go through these helpers, which is
//! what guarantees the two never disagree field-for-field.
//!
//! - kW values: 2 decimal places
//! - money values: whole rupees with thousands separators and the fixed
//!   `Rs.` prefix

/// Fixed currency prefix for all money values
pub const CURRENCY_PREFIX: &str = "Rs.";

/// Format a kW value to 2 decimal places, e.g. `1.39`.
pub fn format_kw(kw: f64) -> String {
    format!("{:.2}", kw)
}

/// Format a money value with the currency prefix, e.g. `Rs. 69,695`.
pub fn format_money(amount: i64) -> String {
    format!("{} {}", CURRENCY_PREFIX, group_thousands(amount))
}

/// Insert thousands separators into an integer, e.g. `1234567` -> `1,234,567`.
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kw() {
        assert_eq!(format_kw(1.38888), "1.39");
        assert_eq!(format_kw(2.0), "2.00");
        assert_eq!(format_kw(0.005), "0.01");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(69695), "69,695");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-4695), "-4,695");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(65000), "Rs. 65,000");
        assert_eq!(format_money(15), "Rs. 15");
    }
}
