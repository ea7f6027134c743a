//! Number formatting for rendered prices.

/// Format `value` with a fixed number of decimals and comma thousands
/// separators, e.g. `28000.0` with one decimal is `28,000.0`.
#[must_use]
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_part() {
        assert_eq!(group_thousands(28_000.0, 1), "28,000.0");
        assert_eq!(group_thousands(1_234_567.891, 0), "1,234,568");
        assert_eq!(group_thousands(999.96, 1), "1,000.0");
    }

    #[test]
    fn small_values_are_not_grouped() {
        assert_eq!(group_thousands(180.0, 1), "180.0");
        assert_eq!(group_thousands(0.1, 1), "0.1");
        assert_eq!(group_thousands(0.0, 0), "0");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(group_thousands(-12_345.6, 1), "-12,345.6");
        assert_eq!(group_thousands(-0.01, 1), "0.0");
    }
}
