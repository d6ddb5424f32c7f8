//! Admin command - management portal operations

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use dialoguer::{Confirm, Password};
use paywallet_core::{AccountLimits, PaywalletContext, User};

use super::{get_context, parse_amount, resolve_user};
use crate::output;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Platform statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Recent admin actions
    Actions {
        /// Maximum entries to show
        #[arg(long, default_value = "20")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// KYC review queue
    Kyc {
        #[command(subcommand)]
        command: AdminKycCommands,
    },
    /// Suspend a user account
    Suspend {
        /// Username or email
        #[arg(long)]
        user: String,
        /// Suspension reason
        #[arg(long)]
        reason: Option<String>,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
    /// Reactivate a suspended account
    Activate {
        /// Username or email
        #[arg(long)]
        user: String,
    },
    /// Update a user's transaction limits
    Limits {
        /// Username or email
        #[arg(long)]
        user: String,
        /// Daily transaction limit
        #[arg(long)]
        daily: Option<String>,
        /// Monthly transaction limit
        #[arg(long)]
        monthly: Option<String>,
        /// Single transaction limit
        #[arg(long)]
        single: Option<String>,
    },
    /// User directory with moderation view
    Users {
        /// Filter by username, name or email
        #[arg(long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum AdminKycCommands {
    /// List users awaiting review
    Pending {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Approve a pending submission
    Approve {
        /// Username or email
        #[arg(long)]
        user: String,
    },
    /// Reject a pending submission
    Reject {
        /// Username or email
        #[arg(long)]
        user: String,
        /// Rejection reason
        #[arg(long)]
        reason: Option<String>,
    },
}

pub fn run(
    email: Option<String>,
    password: Option<String>,
    command: AdminCommands,
) -> Result<()> {
    let ctx = get_context()?;

    let email = email.unwrap_or_else(|| ctx.config.admin_email.clone());
    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Admin password").interact()?,
    };

    output::processing("Signing in...", 1000);
    let admin = ctx.admin_service.login(&email, &password)?;

    match command {
        AdminCommands::Stats { json } => run_stats(&ctx, json),
        AdminCommands::Actions { limit, json } => run_actions(&ctx, limit, json),
        AdminCommands::Kyc { command } => match command {
            AdminKycCommands::Pending { json } => run_kyc_pending(&ctx, json),
            AdminKycCommands::Approve { user } => run_kyc_approve(&ctx, &admin, &user),
            AdminKycCommands::Reject { user, reason } => {
                run_kyc_reject(&ctx, &admin, &user, reason)
            }
        },
        AdminCommands::Suspend {
            user,
            reason,
            force,
        } => run_suspend(&ctx, &admin, &user, reason, force),
        AdminCommands::Activate { user } => run_activate(&ctx, &admin, &user),
        AdminCommands::Limits {
            user,
            daily,
            monthly,
            single,
        } => run_limits(&ctx, &admin, &user, daily, monthly, single),
        AdminCommands::Users { search, json } => super::users::run(search, json),
    }
}

/// Table-mode stats, shared with the interactive session
pub(crate) fn print_stats(ctx: &PaywalletContext) -> Result<()> {
    run_stats(ctx, false)
}

/// Table-mode action log, shared with the interactive session
pub(crate) fn print_actions(ctx: &PaywalletContext, limit: usize) -> Result<()> {
    run_actions(ctx, limit, false)
}

fn run_stats(ctx: &PaywalletContext, json: bool) -> Result<()> {
    let stats = ctx.stats_service.get_stats()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Platform Overview".bold());
    println!();
    let mut table = output::create_table();
    table.add_row(vec!["Total users", &stats.total_users.to_string()]);
    table.add_row(vec!["Active users", &stats.active_users.to_string()]);
    table.add_row(vec!["Suspended users", &stats.suspended_users.to_string()]);
    table.add_row(vec!["Verified", &stats.verified_users.to_string()]);
    table.add_row(vec!["Pending KYC", &stats.pending_kyc.to_string()]);
    table.add_row(vec!["Rejected KYC", &stats.rejected_kyc.to_string()]);
    table.add_row(vec!["KYC not started", &stats.not_started_kyc.to_string()]);
    table.add_row(vec![
        "Transactions",
        &format!(
            "{} ({} completed)",
            stats.total_transactions, stats.completed_transactions
        ),
    ]);
    table.add_row(vec![
        "Completed volume",
        &output::format_money(stats.total_volume),
    ]);
    table.add_row(vec![
        "Average risk score",
        &format!("{:.1}", stats.average_risk_score),
    ]);
    table.add_row(vec!["High risk users", &stats.high_risk_users.to_string()]);
    println!("{}", table);
    Ok(())
}

fn run_actions(ctx: &PaywalletContext, limit: usize, json: bool) -> Result<()> {
    let actions = ctx.admin_service.actions(Some(limit))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&actions)?);
        return Ok(());
    }

    if actions.is_empty() {
        output::info("No admin actions recorded");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Date", "Admin", "Action", "Target", "Details"]);
    for action in &actions {
        table.add_row(vec![
            output::format_date(action.created_at),
            action.admin_name.clone(),
            action.kind.as_str().to_string(),
            action.target_user_name.clone(),
            action.details.clone(),
        ]);
    }
    println!("{}", table);
    Ok(())
}

fn run_kyc_pending(ctx: &PaywalletContext, json: bool) -> Result<()> {
    let pending = ctx.kyc_service.pending_reviews()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&pending)?);
        return Ok(());
    }

    if pending.is_empty() {
        output::success("No submissions awaiting review");
        return Ok(());
    }

    println!("{}", "Pending KYC Submissions".bold());
    println!();
    let mut table = output::create_table();
    table.set_header(vec!["Username", "Name", "Document", "Number", "Submitted"]);
    for user in &pending {
        table.add_row(vec![
            format!("@{}", user.username),
            user.display_name.clone(),
            user.kyc_document_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_else(|| "-".to_string()),
            user.kyc_document_number
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            user.kyc_submitted_at
                .map(output::format_date)
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{}", table);
    Ok(())
}

fn run_kyc_approve(ctx: &PaywalletContext, admin: &User, user: &str) -> Result<()> {
    let user = resolve_user(ctx, user)?;
    if ctx.kyc_service.approve(user.id, admin)? {
        output::success(&format!("KYC approved for @{}", user.username));
    } else {
        output::warning(&format!(
            "No pending KYC submission for @{} (current status: {})",
            user.username,
            user.kyc_status.as_str()
        ));
    }
    Ok(())
}

fn run_kyc_reject(
    ctx: &PaywalletContext,
    admin: &User,
    user: &str,
    reason: Option<String>,
) -> Result<()> {
    let user = resolve_user(ctx, user)?;
    let reason = reason.unwrap_or_else(|| "No reason provided".to_string());
    if ctx.kyc_service.reject(user.id, &reason, admin)? {
        output::success(&format!("KYC rejected for @{}", user.username));
        println!("  Reason: {}", reason);
    } else {
        output::warning(&format!(
            "No pending KYC submission for @{} (current status: {})",
            user.username,
            user.kyc_status.as_str()
        ));
    }
    Ok(())
}

fn run_suspend(
    ctx: &PaywalletContext,
    admin: &User,
    user: &str,
    reason: Option<String>,
    force: bool,
) -> Result<()> {
    let user = resolve_user(ctx, user)?;
    let reason = reason.unwrap_or_else(|| "No reason provided".to_string());

    if !force {
        println!(
            "\n{}",
            format!(
                "This will suspend @{} and block all money movement.",
                user.username
            )
            .yellow()
        );
        if !Confirm::new()
            .with_prompt("Are you sure?")
            .default(false)
            .interact()?
        {
            println!("{}\n", "Cancelled".dimmed());
            return Ok(());
        }
    }

    if ctx.admin_service.suspend(user.id, &reason, admin)? {
        output::success(&format!("@{} suspended", user.username));
        println!("  Reason: {}", reason);
    } else {
        output::warning("Admin accounts cannot be suspended");
    }
    Ok(())
}

fn run_activate(ctx: &PaywalletContext, admin: &User, user: &str) -> Result<()> {
    let user = resolve_user(ctx, user)?;
    if ctx.admin_service.activate(user.id, admin)? {
        output::success(&format!("@{} reactivated", user.username));
    } else {
        output::warning("Admin accounts cannot be moderated");
    }
    Ok(())
}

fn run_limits(
    ctx: &PaywalletContext,
    admin: &User,
    user: &str,
    daily: Option<String>,
    monthly: Option<String>,
    single: Option<String>,
) -> Result<()> {
    let user = resolve_user(ctx, user)?;

    if daily.is_none() && monthly.is_none() && single.is_none() {
        output::warning("Nothing to update (pass --daily, --monthly and/or --single)");
        return Ok(());
    }

    let current = &user.account_limits;
    let new_limits = AccountLimits::new(
        match daily {
            Some(d) => parse_amount(&d)?,
            None => current.daily_transaction_limit,
        },
        match monthly {
            Some(m) => parse_amount(&m)?,
            None => current.monthly_transaction_limit,
        },
        match single {
            Some(s) => parse_amount(&s)?,
            None => current.single_transaction_limit,
        },
    );

    ctx.admin_service
        .update_limits(user.id, new_limits.clone(), admin)?;

    output::success(&format!("Transaction limits updated for @{}", user.username));
    println!(
        "  {} single / {} daily / {} monthly",
        output::format_money(new_limits.single_transaction_limit),
        output::format_money(new_limits.daily_transaction_limit),
        output::format_money(new_limits.monthly_transaction_limit),
    );
    Ok(())
}
