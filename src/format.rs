//! Display Formatting
//!
//! Price and description formatting shared by cards, the details dialog,
//! and the cart.

/// Card descriptions longer than this are cut with an ellipsis
pub const DESCRIPTION_LIMIT: usize = 110;

/// Format an amount with two decimal places. Non-finite input renders as
/// zero rather than propagating NaN into the UI.
pub fn currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    format!("{:.2}", amount)
}

/// Truncate `text` to `limit` characters, appending an ellipsis only when
/// something was actually cut.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let cut: String = text.chars().take(limit).collect();
        format!("{}…", cut)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_two_decimals() {
        assert_eq!(currency(5.75), "5.75");
        assert_eq!(currency(3.0), "3.00");
        assert_eq!(currency(0.0), "0.00");
    }

    #[test]
    fn test_currency_non_finite_is_zero() {
        assert_eq!(currency(f64::NAN), "0.00");
        assert_eq!(currency(f64::INFINITY), "0.00");
    }

    #[test]
    fn test_truncate_over_limit() {
        let text = "a".repeat(111);
        let shown = truncate(&text, DESCRIPTION_LIMIT);
        assert_eq!(shown.chars().count(), 111); // 110 chars + ellipsis
        assert!(shown.ends_with('…'));
    }

    #[test]
    fn test_truncate_exact_limit_unchanged() {
        let text = "b".repeat(110);
        assert_eq!(truncate(&text, DESCRIPTION_LIMIT), text);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "🌱".repeat(111);
        let shown = truncate(&text, DESCRIPTION_LIMIT);
        assert_eq!(shown.chars().count(), 111);
        assert!(shown.ends_with('…'));
    }
}
