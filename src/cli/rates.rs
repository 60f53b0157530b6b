use super::ui;
use crate::core::{ExchangeRatesData, HOME_CURRENCY, format_amount, format_money};
use anyhow::Result;
use comfy_table::{Cell, CellAlignment};

impl ExchangeRatesData {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell("Country"),
            ui::header_cell("Rate"),
            ui::header_cell("Per Unit"),
        ]);

        let sorted = self.sorted_by_code();
        for rate in &sorted {
            let mut quoted = format!("{} {HOME_CURRENCY}", format_money(rate.rate));
            if rate.amount != 1.0 {
                quoted.push_str(&format!(" per {}", rate.amount));
            }
            let per_unit = format!("{} {HOME_CURRENCY}", format_amount(rate.unit_rate(), 4));

            table.add_row(vec![
                Cell::new(format!("{} {}", rate.currency, rate.code)),
                Cell::new(&rate.country),
                ui::amount_cell(quoted),
                ui::amount_cell(per_unit),
            ]);
        }

        if sorted.is_empty() {
            table.add_row(vec![
                Cell::new("No exchange rates available").set_alignment(CellAlignment::Center),
            ]);
        }

        let mut output = format!(
            "{}\n",
            ui::style_text("Current Exchange Rates", ui::StyleType::Title)
        );
        output.push_str(&format!(
            "Last updated: {} (#{})\n",
            ui::style_text(self.date.as_str(), ui::StyleType::Label),
            self.sequence_number
        ));
        output.push_str(&ui::style_text(
            &format!("Rates shown as {HOME_CURRENCY} per 1 unit of foreign currency"),
            ui::StyleType::Subtle,
        ));
        output.push_str("\n\n");
        output.push_str(&table.to_string());
        output
    }
}

pub fn run(data: &ExchangeRatesData, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(data)?);
    } else {
        println!("{}", data.display_as_table());
    }
    Ok(())
}
