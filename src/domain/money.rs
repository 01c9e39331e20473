use rust_decimal::{Decimal, RoundingStrategy};

/// Text shown in place of an amount that could not be computed.
pub const NOT_A_NUMBER: &str = "NaN";

/// Formats an amount as US dollars, e.g. `$1,234.50` or `-$12.00`.
///
/// Rounds half away from zero to cents. The underlying value is left untouched.
pub fn format_usd(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // A negative amount keeps its sign even when it rounds to zero cents.
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}

pub fn format_usd_or_nan(value: Option<Decimal>) -> String {
    value.map(format_usd).unwrap_or_else(|| NOT_A_NUMBER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(dec!(0)), "$0.00");
        assert_eq!(format_usd(dec!(50)), "$50.00");
        assert_eq!(format_usd(dec!(999.999)), "$1,000.00");
        assert_eq!(format_usd(dec!(104000)), "$104,000.00");
        assert_eq!(format_usd(dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn test_format_usd_rounds_half_away_from_zero() {
        assert_eq!(format_usd(dec!(0.125)), "$0.13");
        assert_eq!(format_usd(dec!(-0.125)), "-$0.13");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(dec!(-1234.5)), "-$1,234.50");
        assert_eq!(format_usd(dec!(-0.001)), "-$0.00");
    }

    #[test]
    fn test_format_missing_value() {
        assert_eq!(format_usd_or_nan(None), "NaN");
        assert_eq!(format_usd_or_nan(Some(dec!(2))), "$2.00");
    }
}
