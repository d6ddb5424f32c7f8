//! Topup command - add money to a wallet

use anyhow::{bail, Result};
use paywallet_core::domain::PaymentMethod;

use super::{get_context, parse_amount, resolve_user};
use crate::output;

pub fn run(
    user: &str,
    amount: &str,
    method: &str,
    reference: Option<String>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let user = resolve_user(&ctx, user)?;
    let amount = parse_amount(amount)?;
    let Some(method) = PaymentMethod::parse(method) else {
        bail!("Unknown payment method '{}' (use credit_card or bank_transfer)", method);
    };

    output::processing("Processing payment...", 3000);

    let result = ctx
        .wallet_service
        .add_money(user.id, amount, method, reference);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        if !result.success {
            std::process::exit(1);
        }
        return Ok(());
    }

    match result.data {
        Some(wt) => {
            output::success("Money added successfully!");
            println!(
                "  {} added via {}",
                output::format_money(wt.amount),
                method.as_str()
            );
            let balance = ctx
                .account_service
                .user_by_id(user.id)?
                .map(|u| u.wallet_balance)
                .unwrap_or_default();
            println!("  New balance: {}", output::format_money(balance));
            Ok(())
        }
        None => {
            output::error(result.error.as_deref().unwrap_or("Payment failed"));
            std::process::exit(1);
        }
    }
}
