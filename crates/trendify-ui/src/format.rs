//! Price, discount, date and order-id formatting.

use chrono::{DateTime, NaiveDate, Utc};
use trendify_commerce::{Currency, Money};

/// Format a price with its symbol and locale digit grouping.
///
/// Rupees use Indian grouping (`₹1,29,900`); other currencies group by
/// thousands. Paise/cents are shown only when non-zero.
pub fn format_currency(amount: Money) -> String {
    let sign = if amount.amount_minor < 0 { "-" } else { "" };
    let major = amount.major().unsigned_abs().to_string();
    let grouped = match amount.currency {
        Currency::INR => group_indian(&major),
        _ => group_thousands(&major),
    };

    let minor = amount.minor_remainder();
    if minor == 0 {
        format!("{}{}{}", amount.currency.symbol(), sign, grouped)
    } else {
        format!("{}{}{}.{:02}", amount.currency.symbol(), sign, grouped, minor)
    }
}

/// `1234567` → `12,34,567`: the last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// `1234567` → `1,234,567`.
fn group_thousands(digits: &str) -> String {
    let mut groups: Vec<&str> = Vec::new();
    let mut end = digits.len();
    while end > 0 {
        let start = end.saturating_sub(3);
        groups.push(&digits[start..end]);
        end = start;
    }
    groups.reverse();
    groups.join(",")
}

/// Percentage saved going from `original` to `sale`, rounded to a whole number.
///
/// Returns 0 when the original price isn't positive.
pub fn format_discount(original: Money, sale: Money) -> i64 {
    if original.amount_minor <= 0 {
        return 0;
    }
    let saved = (original.amount_minor - sale.amount_minor) as f64;
    (saved / original.amount_minor as f64 * 100.0).round() as i64
}

/// Long-form date, e.g. `19 October 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Order reference: `TRD` followed by the last eight digits of the Unix
/// millisecond timestamp.
pub fn generate_order_id(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().unsigned_abs().to_string();
    let start = millis.len().saturating_sub(8);
    format!("TRD{}", &millis[start..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_indian_grouping() {
        let inr = |n| format_currency(Money::from_major(n, Currency::INR));
        assert_eq!(inr(0), "\u{20b9}0");
        assert_eq!(inr(499), "\u{20b9}499");
        assert_eq!(inr(1299), "\u{20b9}1,299");
        assert_eq!(inr(129_900), "\u{20b9}1,29,900");
        assert_eq!(inr(12_345_678), "\u{20b9}1,23,45,678");
    }

    #[test]
    fn test_minor_units_and_sign() {
        assert_eq!(
            format_currency(Money::new(49_950, Currency::INR)),
            "\u{20b9}499.50"
        );
        assert_eq!(format_currency(Money::new(-1_000, Currency::INR)), "\u{20b9}-10");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(
            format_currency(Money::new(123_456_789, Currency::USD)),
            "$1,234,567.89"
        );
        assert_eq!(format_currency(Money::from_major(999, Currency::EUR)), "\u{20ac}999");
    }

    #[test]
    fn test_format_discount() {
        let inr = |n| Money::from_major(n, Currency::INR);
        assert_eq!(format_discount(inr(699), inr(499)), 29);
        assert_eq!(format_discount(inr(1299), inr(899)), 31);
        assert_eq!(format_discount(inr(499), inr(299)), 40);
        assert_eq!(format_discount(inr(0), inr(10)), 0);
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 9).unwrap();
        assert_eq!(format_date(date), "9 October 2026");
    }

    #[test]
    fn test_generate_order_id() {
        let now = Utc.timestamp_millis_opt(1_760_870_123_456).unwrap();
        assert_eq!(generate_order_id(now), "TRD70123456");
    }
}
