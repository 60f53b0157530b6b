use super::ui;
use crate::core::{ConversionResult, ExchangeRatesData, format_amount, format_money};
use anyhow::{Result, anyhow};
use thiserror::Error;
use tracing::debug;

/// User supplied amount that cannot be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please enter a valid amount greater than 0")]
pub struct InvalidAmount;

pub fn validate_amount(amount: f64) -> Result<f64, InvalidAmount> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(InvalidAmount)
    }
}

pub fn parse_amount(input: &str) -> Result<f64, InvalidAmount> {
    let amount = input.trim().parse::<f64>().map_err(|_| InvalidAmount)?;
    validate_amount(amount)
}

impl ConversionResult {
    pub fn display(&self) -> String {
        let to_amount = format_money(self.to_amount);
        let mut output = format!(
            "{}\n\n",
            ui::style_text(
                &format!("{to_amount} {}", self.to_currency),
                ui::StyleType::Value
            )
        );
        output.push_str(&format!(
            "{} {} = {to_amount} {}\n",
            format_money(self.from_amount),
            self.from_currency,
            self.to_currency
        ));
        output.push_str(&format!(
            "1 {} = {} {}  {}",
            self.to_currency,
            format_amount(self.rate, 4),
            self.from_currency,
            ui::style_text(self.date.as_str(), ui::StyleType::Subtle)
        ));
        output
    }
}

/// Builds what the `convert` command prints. An unknown currency is an error,
/// an unusable amount only produces a message.
pub fn conversion_output(
    data: &ExchangeRatesData,
    amount: Result<f64, InvalidAmount>,
    currency: &str,
) -> Result<String> {
    if data.rates.is_empty() {
        return Ok(ui::style_text(
            "No exchange rates available for conversion",
            ui::StyleType::Subtle,
        ));
    }

    let amount = match amount {
        Ok(amount) => amount,
        Err(e) => return Ok(ui::style_text(&e.to_string(), ui::StyleType::Error)),
    };

    let code = currency.trim().to_uppercase();
    let result = data.convert_to(amount, &code).ok_or_else(|| {
        anyhow!(
            "Currency {} not found in fixing {}",
            code,
            data.date.as_str()
        )
    })?;
    debug!(?result, "Converted amount");

    Ok(result.display())
}

pub fn run(
    data: &ExchangeRatesData,
    amount: Result<f64, InvalidAmount>,
    currency: &str,
) -> Result<()> {
    println!("{}", conversion_output(data, amount, currency)?);
    Ok(())
}
