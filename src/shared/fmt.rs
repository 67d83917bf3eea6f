//! Display formatting for market capitalization and monetary amounts.

/// Bucket a market cap into B/M/K suffixes with two-decimal precision.
///
/// Values below one thousand render with no suffix and no forced decimals
/// (`750.0` → `"$750"`).
///
/// Precondition: `value` is non-negative. Negative input is a caller bug;
/// it is debug-asserted rather than corrected.
pub fn format_market_cap(value: f64) -> String {
    debug_assert!(value >= 0.0, "market cap must be non-negative");

    if value >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("${:.2}K", value / 1e3)
    } else {
        format!("${}", value)
    }
}

/// Format a USD amount with two decimals and thousands separators.
pub fn format_usd(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(format!("{:.2}", amount.abs())))
}

/// Insert comma separators into the integer part of a formatted number.
fn group_thousands(formatted: String) -> String {
    let (integer, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_cap_billions() {
        assert_eq!(format_market_cap(2_500_000_000.0), "$2.50B");
        assert_eq!(format_market_cap(1e9), "$1.00B");
    }

    #[test]
    fn test_market_cap_millions() {
        assert_eq!(format_market_cap(1_200_000.0), "$1.20M");
        assert_eq!(format_market_cap(999_999_999.0), "$1000.00M");
    }

    #[test]
    fn test_market_cap_thousands() {
        assert_eq!(format_market_cap(1_000.0), "$1.00K");
        assert_eq!(format_market_cap(45_500.0), "$45.50K");
    }

    #[test]
    fn test_market_cap_below_thousand_no_suffix() {
        assert_eq!(format_market_cap(750.0), "$750");
        assert_eq!(format_market_cap(0.0), "$0");
        assert_eq!(format_market_cap(999.0), "$999");
    }

    #[test]
    fn test_market_cap_bucket_edges() {
        assert_eq!(format_market_cap(1e3), "$1.00K");
        assert_eq!(format_market_cap(1e6), "$1.00M");
        assert_eq!(format_market_cap(1e9), "$1.00B");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_usd(-50.0), "-$50.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1".to_string()), "1");
        assert_eq!(group_thousands("123".to_string()), "123");
        assert_eq!(group_thousands("1234".to_string()), "1,234");
        assert_eq!(group_thousands("1234567.89".to_string()), "1,234,567.89");
    }
}
