//! Withdraw command - move money out of a wallet

use anyhow::{bail, Result};
use paywallet_core::domain::PaymentMethod;

use super::{get_context, parse_amount, resolve_user};
use crate::output;

pub fn run(user: &str, amount: &str, method: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user = resolve_user(&ctx, user)?;
    let amount = parse_amount(amount)?;
    let Some(method) = PaymentMethod::parse(method) else {
        bail!("Unknown payment method '{}' (use credit_card or bank_transfer)", method);
    };

    output::processing("Processing withdrawal...", 2000);

    let result = ctx.wallet_service.withdraw(user.id, amount, method);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        if !result.success {
            std::process::exit(1);
        }
        return Ok(());
    }

    match result.data {
        Some(wt) => {
            output::success("Withdrawal complete");
            println!("  {} withdrawn", output::format_money(wt.amount));
            let balance = ctx
                .account_service
                .user_by_id(user.id)?
                .map(|u| u.wallet_balance)
                .unwrap_or_default();
            println!("  Remaining balance: {}", output::format_money(balance));
            Ok(())
        }
        None => {
            output::error(result.error.as_deref().unwrap_or("Withdrawal failed"));
            std::process::exit(1);
        }
    }
}
