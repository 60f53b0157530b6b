//! Core business logic abstractions

pub mod config;
pub mod convert;
pub mod format;
pub mod log;
pub mod parser;
pub mod rates;
pub mod source;

// Re-export main types for cleaner imports
pub use convert::convert;
pub use format::{display_name, format_amount, format_money};
pub use parser::{FormatError, ParsedFeed, SkipReason, SkippedRow, parse, parse_with_report};
pub use rates::{
    ConversionResult, CurrencyOption, CurrencyRate, ExchangeRatesData, FixingDate, HOME_CURRENCY,
};
pub use source::{RatesSource, fetch_rates};
