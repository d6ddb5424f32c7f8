//! Output formatting utilities

use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use indicatif::ProgressBar;
use rust_decimal::Decimal;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format a monetary amount as dollars with thousands separators
pub fn format_money(amount: Decimal) -> String {
    let negative = amount.is_sign_negative();
    let rendered = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    format!(
        "{}${}.{}",
        if negative { "-" } else { "" },
        int_grouped,
        frac_part
    )
}

/// Format a timestamp for table display
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %d, %Y %H:%M").to_string()
}

/// Show a spinner for the simulated processing delay
///
/// The delay only exists so the demo feels like it talks to a payment
/// backend; when output is piped there is no spinner and no wait.
pub fn processing(message: &str, delay_ms: u64) {
    if !atty::is(atty::Stream::Stdout) {
        return;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    thread::sleep(Duration::from_millis(delay_ms));
    spinner.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(125_075, 2)), "$1,250.75");
        assert_eq!(format_money(Decimal::new(50, 2)), "$0.50");
        assert_eq!(format_money(Decimal::new(-284_763, 2)), "-$2,847.63");
        assert_eq!(format_money(Decimal::new(100_000_000, 2)), "$1,000,000.00");
        assert_eq!(format_money(Decimal::ZERO), "$0.00");
    }
}
