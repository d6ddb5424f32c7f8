//! History command - unified activity feed for a user

use anyhow::{bail, Result};
use colored::Colorize;
use paywallet_core::services::{Direction, HistoryFilter};

use super::{get_context, resolve_user};
use crate::output;

pub fn run(user: &str, filter: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user = resolve_user(&ctx, user)?;
    let Some(filter) = HistoryFilter::parse(filter) else {
        bail!("Unknown filter '{}' (use all, transfers, or wallet)", filter);
    };

    let entries = ctx.history_service.entries(user.id, filter)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Transaction History for".bold(),
        format!("@{}", user.username).bold()
    );
    println!(
        "Current balance: {}",
        output::format_money(user.wallet_balance)
    );
    println!();

    if entries.is_empty() {
        output::info("No transactions yet");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Date", "Description", "Amount", "Status"]);
    for entry in &entries {
        let amount = match entry.direction {
            Direction::Incoming => format!("+{}", output::format_money(entry.amount))
                .green()
                .to_string(),
            Direction::Outgoing => format!("-{}", output::format_money(entry.amount))
                .red()
                .to_string(),
        };
        table.add_row(vec![
            output::format_date(entry.created_at),
            entry.description.clone(),
            amount,
            entry.status.clone(),
        ]);
    }
    println!("{}", table);

    Ok(())
}
