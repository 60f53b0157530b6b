//! Home currency to foreign currency conversion.

use crate::core::rates::CurrencyRate;

/// Converts `amount_home` CZK into units of `target.code`.
///
/// The feed quotes how many CZK buy `target.amount` units, so the conversion
/// divides by the quoted rate and scales by the lot size. `target.rate` must be
/// positive, which holds for every rate produced by the parser. The amount is
/// not validated; callers reject non-positive input themselves.
pub fn convert(amount_home: f64, target: &CurrencyRate) -> f64 {
    (amount_home / target.rate) * target.amount
}
