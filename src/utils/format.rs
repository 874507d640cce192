//! Number and text formatting for summary lines.

/// Formats a number with comma separators for thousands.
///
/// # Examples
///
/// ```
/// use aws_credentials_tools::utils::format::format_number;
///
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// `"1 key"`, `"2 keys"`, `"1,500 keys"`.
///
/// ```
/// use aws_credentials_tools::utils::format::count_label;
///
/// assert_eq!(count_label(1, "user", "users"), "1 user");
/// assert_eq!(count_label(0, "user", "users"), "0 users");
/// ```
pub fn count_label(n: usize, singular: &str, plural: &str) -> String {
    let noun = if n == 1 { singular } else { plural };
    format!("{} {}", format_number(n), noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(12), "12");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(123_456), "123,456");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(1, "key", "keys"), "1 key");
        assert_eq!(count_label(2, "key", "keys"), "2 keys");
        assert_eq!(count_label(1500, "key", "keys"), "1,500 keys");
    }
}
