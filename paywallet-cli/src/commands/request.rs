//! Request command - ask another user for money

use anyhow::Result;

use super::{get_context, parse_amount, resolve_user};
use crate::output;

pub fn run(from: &str, to: &str, amount: &str, message: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let requester = resolve_user(&ctx, from)?;
    let payer = resolve_user(&ctx, to)?;
    let amount = parse_amount(amount)?;

    let result = ctx
        .transfer_service
        .request(requester.id, payer.id, amount, message.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        if !result.success {
            std::process::exit(1);
        }
        return Ok(());
    }

    match result.data {
        Some(request) => {
            output::success("Money request sent successfully!");
            println!(
                "  Your request for {} has been sent to {}",
                output::format_money(request.amount),
                request.payer_name
            );
            Ok(())
        }
        None => {
            output::error(result.error.as_deref().unwrap_or("Request failed"));
            std::process::exit(1);
        }
    }
}
