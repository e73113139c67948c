//! Display formatting for terminal output
//!
//! Formatting helpers shared by the report renderers. Currency is rendered
//! US-style with thousands separators and no cents (display only; all
//! computation stays in cents).

use crate::models::Money;

/// Format a money amount as whole dollars with thousands separators
/// (e.g. "$12,345"). Rounds to the nearest dollar.
pub fn format_usd(amount: Money) -> String {
    let dollars = amount.dollars_rounded();
    if dollars < 0 {
        format!("-${}", group_thousands(dollars.unsigned_abs()))
    } else {
        format!("${}", group_thousands(dollars.unsigned_abs()))
    }
}

/// Format a percentage with one decimal place (e.g. "42.9%")
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let chunk = n % 1000;
        n /= 1000;
        if n == 0 {
            groups.push(chunk.to_string());
            break;
        }
        groups.push(format!("{:03}", chunk));
    }
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(Money::from_cents(0)), "$0");
        assert_eq!(format_usd(Money::from_cents(99_949)), "$999");
        assert_eq!(format_usd(Money::from_cents(99_950)), "$1,000");
        assert_eq!(format_usd(Money::from_dollars(1_234_567)), "$1,234,567");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(42.857), "42.9%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(100.0), "100.0%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
        assert_eq!(format_bar(100.0, 100.0, 4), "████");
        assert_eq!(format_bar(50.0, 100.0, 4), "██░░");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(3), "───");
    }
}
