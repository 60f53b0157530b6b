use super::ui;
use crate::core::{CurrencyOption, ExchangeRatesData};

pub fn render(options: &[CurrencyOption]) -> String {
    if options.is_empty() {
        return ui::style_text("No exchange rates available", ui::StyleType::Subtle);
    }
    options
        .iter()
        .map(|option| {
            format!(
                "{} - {}",
                ui::style_text(&option.code, ui::StyleType::Label),
                option.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run(data: &ExchangeRatesData) {
    println!("{}", render(&data.currency_options()));
}
