//! Exchange rate records produced from a daily fixing feed.

use crate::core::convert::convert;
use crate::core::format::display_name;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

/// Currency every rate in the feed is quoted in.
pub const HOME_CURRENCY: &str = "CZK";

/// Date label of a fixing, kept verbatim from the feed header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixingDate(String);

impl FixingDate {
    pub fn new(label: impl Into<String>) -> Self {
        FixingDate(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FixingDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the feed: `rate` CZK buys `amount` units of `code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub country: String,
    pub currency: String,
    pub amount: f64,
    pub code: String,
    pub rate: f64,
}

impl CurrencyRate {
    /// Home currency cost of exactly one unit of `code`.
    pub fn unit_rate(&self) -> f64 {
        self.rate / self.amount
    }
}

/// A single parsed fixing snapshot. Rates keep the order of the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRatesData {
    pub date: FixingDate,
    pub sequence_number: u64,
    pub rates: Vec<CurrencyRate>,
}

/// Entry for a currency picker, see [`ExchangeRatesData::currency_options`].
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyOption {
    pub code: String,
    pub name: String,
    pub rate: f64,
    pub amount: f64,
}

/// Outcome of converting a home currency amount into a foreign currency.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub from_amount: f64,
    pub to_amount: f64,
    pub from_currency: String,
    pub to_currency: String,
    /// Unit rate, CZK per one unit of `to_currency`.
    pub rate: f64,
    pub date: FixingDate,
}

impl ExchangeRatesData {
    /// Builds a code keyed view of the snapshot. When a code appears more than
    /// once the later row wins.
    pub fn rates_by_code(&self) -> HashMap<&str, &CurrencyRate> {
        self.rates
            .iter()
            .map(|rate| (rate.code.as_str(), rate))
            .collect()
    }

    pub fn find(&self, code: &str) -> Option<&CurrencyRate> {
        self.rates.iter().rev().find(|rate| rate.code == code)
    }

    pub fn sorted_by_code(&self) -> Vec<&CurrencyRate> {
        let mut sorted: Vec<&CurrencyRate> = self.rates.iter().collect();
        sorted.sort_by(|a, b| a.code.cmp(&b.code));
        sorted
    }

    pub fn currency_options(&self) -> Vec<CurrencyOption> {
        self.sorted_by_code()
            .into_iter()
            .map(|rate| CurrencyOption {
                code: rate.code.clone(),
                name: display_name(rate),
                rate: rate.rate,
                amount: rate.amount,
            })
            .collect()
    }

    /// Converts `amount` CZK into `code`. Returns `None` if the snapshot has no
    /// rate for `code`. The amount is not validated here.
    pub fn convert_to(&self, amount: f64, code: &str) -> Option<ConversionResult> {
        let target = self.find(code)?;
        Some(ConversionResult {
            from_amount: amount,
            to_amount: convert(amount, target),
            from_currency: HOME_CURRENCY.to_string(),
            to_currency: target.code.clone(),
            rate: target.unit_rate(),
            date: self.date.clone(),
        })
    }
}
