//! Register command - onboard a new user

use anyhow::Result;
use dialoguer::Input;
use paywallet_core::services::RegisterRequest;

use super::get_context;
use crate::output;

pub fn run(
    username: Option<String>,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;

    let username = match username {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Choose a username")
            .interact_text()?,
    };
    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Display name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    output::processing("Creating account...", 800);

    let user = ctx.account_service.register(RegisterRequest {
        username,
        display_name: name,
        email,
        phone_number: phone,
        device_info: Some("CLI".to_string()),
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    output::success("Account created successfully! Welcome to PayWallet!");
    println!("  Username: @{}", user.username);
    println!("  Email: {}", user.email);
    println!(
        "  Welcome bonus: {}",
        output::format_money(user.wallet_balance)
    );
    println!(
        "  Limits: {} single / {} daily / {} monthly",
        output::format_money(user.account_limits.single_transaction_limit),
        output::format_money(user.account_limits.daily_transaction_limit),
        output::format_money(user.account_limits.monthly_transaction_limit),
    );

    Ok(())
}
