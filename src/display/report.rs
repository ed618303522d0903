//! Report formatting utilities for terminal output

use crate::models::Money;

/// Format a net position with color hints: red when owing, green when owed
pub fn format_net_colored(amount: Money, symbol: &str) -> String {
    let text = amount.format_with_symbol(symbol);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text)
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", text)
    } else {
        text
    }
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_net_colored() {
        assert!(format_net_colored(Money::from_cents(-500), "$").contains("\x1b[31m-$5.00"));
        assert!(format_net_colored(Money::from_cents(500), "$").contains("\x1b[32m$5.00"));
        assert_eq!(format_net_colored(Money::zero(), "$"), "$0.00");
    }

    #[test]
    fn test_format_header() {
        assert_eq!(format_header("Hi", 6), "  Hi");
        assert_eq!(format_header("Too long", 4), "Too long");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello World", 8), "Hello...");
        assert_eq!(truncate("Zoë Müller-Schmidt", 6), "Zoë...");
        assert_eq!(truncate("Hello", 2), "..");
    }

    #[test]
    fn test_separators() {
        assert_eq!(separator(3), "───");
        assert_eq!(double_separator(2), "══");
    }
}
