//! Numeric and display formatting for rates and amounts.

use crate::core::rates::CurrencyRate;

/// Formats `value` with exactly `decimals` fractional digits and comma
/// separated thousands, e.g. `1,234,567.89`.
pub fn format_amount(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    // -0.00 prints without a sign
    if value.is_sign_negative() && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Formats with the default two decimals.
pub fn format_money(value: f64) -> String {
    format_amount(value, 2)
}

/// `"<currency> (<country>)"`, verbatim.
pub fn display_name(rate: &CurrencyRate) -> String {
    format!("{} ({})", rate.currency, rate.country)
}
