//! Send command - transfer money to another user

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use super::{get_context, parse_amount, resolve_user};
use crate::output;

pub fn run(
    from: &str,
    to: &str,
    amount: &str,
    message: Option<String>,
    yes: bool,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let sender = resolve_user(&ctx, from)?;
    let receiver = resolve_user(&ctx, to)?;
    let amount = parse_amount(amount)?;

    if !yes && !json {
        println!(
            "\n{} will be sent from @{} to {} (@{})",
            output::format_money(amount).bold(),
            sender.username,
            receiver.display_name,
            receiver.username
        );
        println!("{}\n", "Fee: Free".dimmed());

        if !Confirm::new()
            .with_prompt("Send money?")
            .default(true)
            .interact()?
        {
            println!("{}\n", "Cancelled".dimmed());
            return Ok(());
        }
    }

    output::processing("Sending...", 2000);

    let result = ctx
        .transfer_service
        .transfer(sender.id, receiver.id, amount, message.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        if !result.success {
            std::process::exit(1);
        }
        return Ok(());
    }

    match result.data {
        Some(tx) => {
            output::success("Money sent successfully!");
            println!(
                "  {} sent to {}",
                output::format_money(tx.amount),
                tx.receiver_name.as_deref().unwrap_or(to)
            );
            println!("  Transaction ID: {}", tx.id);
            let remaining = ctx
                .account_service
                .user_by_id(sender.id)?
                .map(|u| u.wallet_balance)
                .unwrap_or_default();
            println!("  Remaining balance: {}", output::format_money(remaining));
            Ok(())
        }
        None => {
            output::error(result.error.as_deref().unwrap_or("Transfer failed"));
            std::process::exit(1);
        }
    }
}
