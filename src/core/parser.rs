//! Parser for the CNB daily fixing text format.
//!
//! ```text
//! 03.Jan.2024 #1
//! Country|Currency|Amount|Code|Rate
//! Australia|dollar|1|AUD|15.123
//! ```
//!
//! The first line carries the date label and the sequence number, the second
//! line is a column header and every following line is one rate. Rows that do
//! not look like a rate are skipped; only a broken header fails the parse.

use crate::core::rates::{CurrencyRate, ExchangeRatesData, FixingDate};
use std::fmt::Display;
use thiserror::Error;
use tracing::{debug, warn};

const FIELD_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid CNB data format: insufficient lines")]
    InsufficientLines,
    #[error("Invalid CNB data format: could not parse date and sequence")]
    InvalidHeader(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    FieldCount(usize),
    InvalidNumber,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::FieldCount(n) => write!(f, "expected {FIELD_COUNT} fields, found {n}"),
            SkipReason::InvalidNumber => write!(f, "invalid numbers"),
        }
    }
}

/// A data line that was left out of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line_number: usize,
    pub line: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFeed {
    pub data: ExchangeRatesData,
    pub skipped: Vec<SkippedRow>,
}

/// Parses a feed body, logging every skipped row as a warning.
pub fn parse(text: &str) -> Result<ExchangeRatesData, FormatError> {
    let ParsedFeed { data, skipped } = parse_with_report(text)?;
    for row in &skipped {
        warn!(
            line_number = row.line_number,
            reason = %row.reason,
            "Skipping invalid line: {}",
            row.line
        );
    }
    Ok(data)
}

/// Parses a feed body and returns the skipped rows alongside the snapshot.
pub fn parse_with_report(text: &str) -> Result<ParsedFeed, FormatError> {
    let lines: Vec<&str> = text.trim().split('\n').collect();
    if lines.len() < 3 {
        return Err(FormatError::InsufficientLines);
    }

    let (date, sequence_number) = parse_header(lines[0].trim())?;

    // lines[1] is the column header
    let (rates, skipped) = lines.iter().enumerate().skip(2).fold(
        (Vec::new(), Vec::new()),
        |(mut rates, mut skipped), (index, raw)| {
            let line = raw.trim();
            if !line.is_empty() {
                match parse_row(line) {
                    Ok(rate) => rates.push(rate),
                    Err(reason) => skipped.push(SkippedRow {
                        line_number: index + 1,
                        line: line.to_string(),
                        reason,
                    }),
                }
            }
            (rates, skipped)
        },
    );

    debug!(
        date = %date,
        sequence_number,
        rates = rates.len(),
        skipped = skipped.len(),
        "Parsed exchange rate feed"
    );

    Ok(ParsedFeed {
        data: ExchangeRatesData {
            date,
            sequence_number,
            rates,
        },
        skipped,
    })
}

/// Splits `<date> #<digits>` into its parts. The date is everything up to the
/// whitespace run in front of the final `#`.
fn parse_header(line: &str) -> Result<(FixingDate, u64), FormatError> {
    let invalid = || FormatError::InvalidHeader(line.to_string());

    let (head, digits) = line.rsplit_once('#').ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if !head.ends_with(char::is_whitespace) {
        return Err(invalid());
    }
    let date = head.trim_end();
    if date.is_empty() {
        return Err(invalid());
    }
    let sequence_number = digits.parse::<u64>().map_err(|_| invalid())?;

    Ok((FixingDate::new(date), sequence_number))
}

fn parse_row(line: &str) -> Result<CurrencyRate, SkipReason> {
    let fields: Vec<&str> = line.split('|').collect();
    let [country, currency, amount, code, rate] = fields.as_slice() else {
        return Err(SkipReason::FieldCount(fields.len()));
    };

    let amount = parse_positive(amount).ok_or(SkipReason::InvalidNumber)?;
    let rate = parse_positive(rate).ok_or(SkipReason::InvalidNumber)?;

    Ok(CurrencyRate {
        country: country.trim().to_string(),
        currency: currency.trim().to_string(),
        amount,
        code: code.trim().to_string(),
        rate,
    })
}

fn parse_positive(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}
