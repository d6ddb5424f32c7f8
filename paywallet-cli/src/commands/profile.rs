//! Profile command - view and update account details

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::{get_context, resolve_user};
use crate::output;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show a user's profile
    Show {
        /// Username or email
        #[arg(long)]
        user: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update display name or phone number
    Update {
        /// Username or email
        #[arg(long)]
        user: String,
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New phone number (empty string clears it)
        #[arg(long)]
        phone: Option<String>,
    },
}

pub fn run(command: ProfileCommands) -> Result<()> {
    match command {
        ProfileCommands::Show { user, json } => run_show(&user, json),
        ProfileCommands::Update { user, name, phone } => run_update(&user, name, phone),
    }
}

fn run_show(user: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user = resolve_user(&ctx, user)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    println!("{}", user.display_name.bold());
    println!("@{} • {}", user.username, user.email);
    println!();

    let mut table = output::create_table();
    table.add_row(vec![
        "Balance".to_string(),
        output::format_money(user.wallet_balance),
    ]);
    table.add_row(vec![
        "Phone".to_string(),
        user.phone_number.clone().unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec![
        "KYC status".to_string(),
        user.kyc_status.as_str().to_string(),
    ]);
    if let Some(reason) = &user.kyc_rejection_reason {
        table.add_row(vec!["KYC rejection".to_string(), reason.clone()]);
    }
    table.add_row(vec!["Risk score".to_string(), user.risk_score.to_string()]);
    table.add_row(vec![
        "Single limit".to_string(),
        output::format_money(user.account_limits.single_transaction_limit),
    ]);
    table.add_row(vec![
        "Daily limit".to_string(),
        output::format_money(user.account_limits.daily_transaction_limit),
    ]);
    table.add_row(vec![
        "Monthly limit".to_string(),
        output::format_money(user.account_limits.monthly_transaction_limit),
    ]);
    table.add_row(vec![
        "Member since".to_string(),
        output::format_date(user.created_at),
    ]);
    if user.is_suspended {
        table.add_row(vec![
            "Suspended".to_string(),
            user.suspension_reason
                .clone()
                .unwrap_or_else(|| "yes".to_string()),
        ]);
    }
    println!("{}", table);

    Ok(())
}

fn run_update(user: &str, name: Option<String>, phone: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let user = resolve_user(&ctx, user)?;

    if name.is_none() && phone.is_none() {
        output::warning("Nothing to update (pass --name and/or --phone)");
        return Ok(());
    }

    let updated =
        ctx.account_service
            .update_profile(user.id, name.as_deref(), phone.as_deref())?;

    output::success("Profile updated successfully!");
    println!("  Name: {}", updated.display_name);
    println!(
        "  Phone: {}",
        updated.phone_number.as_deref().unwrap_or("-")
    );
    Ok(())
}
