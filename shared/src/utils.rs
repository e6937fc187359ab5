//! # Shared Utility Functions
//!
//! Display helpers used when rendering catalog tables.
//!
//! - [`truncate_text`] - Shorten a cell to `max_chars`, ending with `...`
//! - [`short_id`] - First and last characters of an opaque identifier
//! - [`format_price`] - Two-decimal price rendering
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_price, truncate_text};
//!
//! assert_eq!(format_price(12.5), "12.50");
//! assert_eq!(truncate_text("Breathable linen shirt", 10), "Breatha...");
//! ```

/// Shorten `text` to at most `max_chars` characters, replacing the tail with `...`.
///
/// Counts characters rather than bytes so product names with accents are
/// never split mid-codepoint.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_text;
///
/// assert_eq!(truncate_text("short", 10), "short");
/// assert_eq!(truncate_text("Áo sơ mi linen", 8), "Áo sơ...");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }

    let head: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", head)
}

/// Show the first `prefix_len` and last `suffix_len` characters of an id.
///
/// Ids shorter than `prefix_len + suffix_len` are returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::short_id;
///
/// assert_eq!(short_id("65f1c2a9e4b0d3f7a8c91234", 4, 4), "65f1...1234");
/// assert_eq!(short_id("abc", 4, 4), "abc");
/// ```
pub fn short_id(id: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= prefix_len + suffix_len {
        return id.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// Render a price with two decimals.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Linen shirt", 20), "Linen shirt");
        assert_eq!(truncate_text("Linen shirt", 8), "Linen...");
        assert_eq!(truncate_text("Linen shirt", 2), "Li");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("65f1c2a9e4b0d3f7a8c91234", 4, 4), "65f1...1234");
        assert_eq!(short_id("65f1c2a9e4b0d3f7a8c91234", 2, 3), "65...234");
        assert_eq!(short_id("abcdefgh", 4, 4), "abcdefgh");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(19.999), "20.00");
    }
}
