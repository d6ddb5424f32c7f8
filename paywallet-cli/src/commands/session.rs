//! Session command - interactive app shell
//!
//! Reproduces the demo's mode switch in the terminal: a landing menu that
//! leads either to the user sign-in flow (with onboarding for unknown
//! emails) or to the admin portal. Store state lives for the length of the
//! session and is gone when it ends.

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use dialoguer::{Confirm, Input, Password, Select};
use paywallet_core::adapters::MockAuthProvider;
use paywallet_core::domain::{DocumentType, PaymentMethod};
use paywallet_core::ports::AuthProvider;
use paywallet_core::services::{
    Direction, EntryPoint, HistoryFilter, LogEvent, LoggingService, RegisterRequest,
};
use paywallet_core::{PaywalletContext, User};
use uuid::Uuid;

use super::{get_context, get_logger, log_event, parse_amount};
use crate::output;

pub fn run() -> Result<()> {
    let ctx = get_context()?;
    let auth = MockAuthProvider::new();
    let logger = get_logger(EntryPoint::Session);
    log_event(&logger, LogEvent::new("session_started"));

    println!("{}", "PayWallet".bold());
    println!("{}", "Send money to friends instantly".dimmed());
    println!();

    loop {
        let choice = Select::new()
            .with_prompt("Welcome")
            .items(&["Sign in", "Admin portal", "Exit"])
            .default(0)
            .interact()?;

        match choice {
            0 => user_flow(&ctx, &auth, &logger)?,
            1 => admin_flow(&ctx, &logger)?,
            _ => break,
        }
    }

    log_event(&logger, LogEvent::new("session_ended"));
    println!("{}", "Goodbye!".dimmed());
    Ok(())
}

// ============================================================================
// User side
// ============================================================================

fn user_flow(
    ctx: &PaywalletContext,
    auth: &MockAuthProvider,
    logger: &Option<LoggingService>,
) -> Result<()> {
    log_event(logger, LogEvent::new("screen_opened").with_screen("user_auth"));

    let email: String = Input::new().with_prompt("Email address").interact_text()?;
    output::processing("Signing in...", 1000);

    let auth_user = match auth.login(&email) {
        Ok(u) => u,
        Err(e) => {
            output::error(&e.to_string());
            return Ok(());
        }
    };

    let user = match ctx.account_service.user_by_email(&auth_user.email)? {
        Some(user) => ctx.account_service.record_login(user.id)?,
        None => {
            output::info("No PayWallet account for this email yet - let's set one up");
            match onboarding(ctx, &auth_user.email)? {
                Some(user) => user,
                None => {
                    auth.logout();
                    return Ok(());
                }
            }
        }
    };

    if user.is_suspended {
        output::error(&format!(
            "Account suspended: {}",
            user.suspension_reason.as_deref().unwrap_or("contact support")
        ));
        auth.logout();
        return Ok(());
    }

    output::success(&format!("Welcome back, {}!", user.display_name));
    user_menu(ctx, user.id, logger)?;

    auth.logout();
    output::info("Logged out successfully");
    Ok(())
}

fn onboarding(ctx: &PaywalletContext, email: &str) -> Result<Option<User>> {
    loop {
        let username: String = Input::new()
            .with_prompt("Choose a username")
            .interact_text()?;
        let display_name: String = Input::new().with_prompt("Display name").interact_text()?;
        let phone: String = Input::new()
            .with_prompt("Phone number (optional)")
            .allow_empty(true)
            .interact_text()?;

        output::processing("Creating account...", 800);
        match ctx.account_service.register(RegisterRequest {
            username,
            display_name,
            email: email.to_string(),
            phone_number: if phone.is_empty() { None } else { Some(phone) },
            device_info: Some("CLI".to_string()),
        }) {
            Ok(user) => {
                output::success("Account created successfully! Welcome to PayWallet!");
                println!(
                    "  Welcome bonus: {}",
                    output::format_money(user.wallet_balance)
                );
                return Ok(Some(user));
            }
            Err(e) => {
                output::error(&e.to_string());
                if !Confirm::new()
                    .with_prompt("Try again?")
                    .default(true)
                    .interact()?
                {
                    return Ok(None);
                }
            }
        }
    }
}

fn user_menu(
    ctx: &PaywalletContext,
    user_id: Uuid,
    logger: &Option<LoggingService>,
) -> Result<()> {
    loop {
        let choice = Select::new()
            .with_prompt("Menu")
            .items(&[
                "Dashboard",
                "Send money",
                "Request money",
                "Add money",
                "Withdraw",
                "Transaction history",
                "Profile",
                "Submit KYC",
                "Session log",
                "Log out",
            ])
            .default(0)
            .interact()?;

        let screen = [
            "dashboard", "send_money", "request_money", "add_money", "withdraw", "history",
            "profile", "kyc", "session_log", "logout",
        ][choice];
        log_event(logger, LogEvent::new("screen_opened").with_screen(screen));

        let result = match choice {
            0 => dashboard(ctx, user_id),
            1 => send_money(ctx, user_id),
            2 => request_money(ctx, user_id),
            3 => add_money(ctx, user_id),
            4 => withdraw(ctx, user_id),
            5 => history(ctx, user_id),
            6 => profile(ctx, user_id),
            7 => submit_kyc(ctx, user_id),
            8 => session_log(logger),
            _ => return Ok(()),
        };
        if let Err(e) = result {
            output::error(&e.to_string());
            log_event(
                logger,
                LogEvent::new("screen_error")
                    .with_screen(screen)
                    .with_error(e.to_string()),
            );
        }
    }
}

fn current_user(ctx: &PaywalletContext, user_id: Uuid) -> Result<User> {
    ctx.account_service
        .user_by_id(user_id)?
        .ok_or_else(|| anyhow::anyhow!("User not found"))
}

fn dashboard(ctx: &PaywalletContext, user_id: Uuid) -> Result<()> {
    let user = current_user(ctx, user_id)?;

    println!();
    println!("{}", user.display_name.bold());
    println!(
        "Available balance: {}",
        output::format_money(user.wallet_balance).bold()
    );
    if user.kyc_status.as_str() != "verified" {
        output::warning(&format!("KYC status: {}", user.kyc_status.as_str()));
    }

    let recent = ctx.history_service.recent(user_id, 5)?;
    if !recent.is_empty() {
        println!();
        println!("{}", "Recent activity".bold());
        print_history_table(&recent);
    }
    println!();
    Ok(())
}

fn pick_recipient(ctx: &PaywalletContext, user_id: Uuid) -> Result<Option<User>> {
    let query: String = Input::new()
        .with_prompt("Search by username, name, or email")
        .interact_text()?;

    let results = ctx.account_service.search(&query, Some(user_id))?;
    if results.is_empty() {
        output::info("No users found - try searching with a different term");
        return Ok(None);
    }

    let labels: Vec<String> = results
        .iter()
        .map(|u| format!("{} (@{}) [{}]", u.display_name, u.username, u.kyc_status.as_str()))
        .collect();
    let picked = Select::new()
        .with_prompt("Select recipient")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Some(results[picked].clone()))
}

fn send_money(ctx: &PaywalletContext, user_id: Uuid) -> Result<()> {
    let user = current_user(ctx, user_id)?;
    println!(
        "Available balance: {}",
        output::format_money(user.wallet_balance)
    );

    let Some(recipient) = pick_recipient(ctx, user_id)? else {
        return Ok(());
    };

    let amount: String = Input::new().with_prompt("Amount (USD)").interact_text()?;
    let amount = parse_amount(&amount)?;
    let description: String = Input::new()
        .with_prompt("What's this for? (optional)")
        .allow_empty(true)
        .interact_text()?;

    println!(
        "\n{} will be sent to {} (@{})  {}",
        output::format_money(amount).bold(),
        recipient.display_name,
        recipient.username,
        "Fee: Free".dimmed()
    );
    if !Confirm::new()
        .with_prompt("Confirm transfer?")
        .default(true)
        .interact()?
    {
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    output::processing("Sending...", 2000);
    let result = ctx.transfer_service.transfer(
        user_id,
        recipient.id,
        amount,
        if description.is_empty() {
            None
        } else {
            Some(&description)
        },
    );

    match result.data {
        Some(tx) => {
            output::success("Money sent!");
            println!(
                "  {} has been sent to {}",
                output::format_money(tx.amount),
                recipient.display_name
            );
        }
        None => output::error(result.error.as_deref().unwrap_or("Transfer failed")),
    }
    Ok(())
}

fn request_money(ctx: &PaywalletContext, user_id: Uuid) -> Result<()> {
    let Some(payer) = pick_recipient(ctx, user_id)? else {
        return Ok(());
    };

    let amount: String = Input::new().with_prompt("Amount (USD)").interact_text()?;
    let amount = parse_amount(&amount)?;
    let note: String = Input::new()
        .with_prompt("Add a note (optional)")
        .allow_empty(true)
        .interact_text()?;

    let result = ctx.transfer_service.request(
        user_id,
        payer.id,
        amount,
        if note.is_empty() { None } else { Some(&note) },
    );

    match result.data {
        Some(request) => {
            output::success("Request sent!");
            println!(
                "  Your request for {} has been sent to {}",
                output::format_money(request.amount),
                request.payer_name
            );
        }
        None => output::error(result.error.as_deref().unwrap_or("Request failed")),
    }
    Ok(())
}

fn pick_payment_method() -> Result<PaymentMethod> {
    let picked = Select::new()
        .with_prompt("Payment method")
        .items(&[
            "Credit/Debit Card (instant, no fees)",
            "Bank Transfer (1-2 business days, no fees)",
        ])
        .default(0)
        .interact()?;
    Ok(match picked {
        0 => PaymentMethod::CreditCard,
        _ => PaymentMethod::BankTransfer,
    })
}

fn add_money(ctx: &PaywalletContext, user_id: Uuid) -> Result<()> {
    let user = current_user(ctx, user_id)?;
    println!(
        "Current balance: {}",
        output::format_money(user.wallet_balance)
    );
    println!("{}", "Minimum: $1.00 • Maximum: $10,000.00".dimmed());

    let amount: String = Input::new().with_prompt("Amount (USD)").interact_text()?;
    let amount = parse_amount(&amount)?;
    let method = pick_payment_method()?;

    output::processing("Processing...", 3000);
    let reference = format!("ext_{}", Utc::now().timestamp_millis());
    let result = ctx
        .wallet_service
        .add_money(user_id, amount, method, Some(reference));

    match result.data {
        Some(wt) => {
            output::success("Money added!");
            let balance = current_user(ctx, user_id)?.wallet_balance;
            println!(
                "  {} added, new balance {}",
                output::format_money(wt.amount),
                output::format_money(balance)
            );
        }
        None => output::error(result.error.as_deref().unwrap_or("Payment failed")),
    }
    Ok(())
}

fn withdraw(ctx: &PaywalletContext, user_id: Uuid) -> Result<()> {
    let user = current_user(ctx, user_id)?;
    println!(
        "Current balance: {}",
        output::format_money(user.wallet_balance)
    );

    let amount: String = Input::new().with_prompt("Amount (USD)").interact_text()?;
    let amount = parse_amount(&amount)?;
    let method = pick_payment_method()?;

    output::processing("Processing withdrawal...", 2000);
    let result = ctx.wallet_service.withdraw(user_id, amount, method);

    match result.data {
        Some(wt) => {
            output::success("Withdrawal complete");
            let balance = current_user(ctx, user_id)?.wallet_balance;
            println!(
                "  {} withdrawn, remaining balance {}",
                output::format_money(wt.amount),
                output::format_money(balance)
            );
        }
        None => output::error(result.error.as_deref().unwrap_or("Withdrawal failed")),
    }
    Ok(())
}

fn history(ctx: &PaywalletContext, user_id: Uuid) -> Result<()> {
    let tab = Select::new()
        .with_prompt("Show")
        .items(&["All", "Transfers", "Wallet"])
        .default(0)
        .interact()?;
    let filter = [
        HistoryFilter::All,
        HistoryFilter::Transfers,
        HistoryFilter::Wallet,
    ][tab];

    let entries = ctx.history_service.entries(user_id, filter)?;
    if entries.is_empty() {
        output::info("No transactions yet");
        return Ok(());
    }
    print_history_table(&entries);
    Ok(())
}

fn print_history_table(entries: &[paywallet_core::services::HistoryEntry]) {
    let mut table = output::create_table();
    table.set_header(vec!["Date", "Description", "Amount", "Status"]);
    for entry in entries {
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
}

fn profile(ctx: &PaywalletContext, user_id: Uuid) -> Result<()> {
    let user = current_user(ctx, user_id)?;

    println!();
    println!("{}", user.display_name.bold());
    println!("@{} • {}", user.username, user.email);
    println!("Phone: {}", user.phone_number.as_deref().unwrap_or("-"));
    println!("KYC status: {}", user.kyc_status.as_str());
    println!(
        "Limits: {} single / {} daily / {} monthly",
        output::format_money(user.account_limits.single_transaction_limit),
        output::format_money(user.account_limits.daily_transaction_limit),
        output::format_money(user.account_limits.monthly_transaction_limit),
    );
    println!();

    if Confirm::new()
        .with_prompt("Update profile?")
        .default(false)
        .interact()?
    {
        let name: String = Input::new()
            .with_prompt("Display name")
            .default(user.display_name.clone())
            .interact_text()?;
        let phone: String = Input::new()
            .with_prompt("Phone number")
            .default(user.phone_number.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        ctx.account_service
            .update_profile(user_id, Some(&name), Some(&phone))?;
        output::success("Profile updated successfully!");
    }
    Ok(())
}

fn submit_kyc(ctx: &PaywalletContext, user_id: Uuid) -> Result<()> {
    let user = current_user(ctx, user_id)?;
    println!("Current KYC status: {}", user.kyc_status.as_str());
    if let Some(reason) = &user.kyc_rejection_reason {
        output::warning(&format!("Previous rejection: {}", reason));
    }

    let types = [
        DocumentType::Passport,
        DocumentType::DriversLicense,
        DocumentType::NationalId,
        DocumentType::UtilityBill,
        DocumentType::BankStatement,
        DocumentType::Other,
    ];
    let labels: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
    let picked = Select::new()
        .with_prompt("Document type")
        .items(&labels)
        .default(0)
        .interact()?;
    let number: String = Input::new().with_prompt("Document number").interact_text()?;

    output::processing("Uploading documents...", 1500);
    ctx.kyc_service.submit(user_id, types[picked], &number, None)?;
    output::success("KYC documents submitted for verification!");
    Ok(())
}

fn session_log(logger: &Option<LoggingService>) -> Result<()> {
    let Some(logger) = logger else {
        output::info("Logging is not available");
        return Ok(());
    };

    let entries = logger.get_recent(20)?;
    let mut table = output::create_table();
    table.set_header(vec!["Event", "Screen", "Error"]);
    for entry in &entries {
        table.add_row(vec![
            entry.event.clone(),
            entry.screen.clone().unwrap_or_default(),
            entry.error_message.clone().unwrap_or_default(),
        ]);
    }
    println!("{}", table);
    Ok(())
}

// ============================================================================
// Admin side
// ============================================================================

fn admin_flow(ctx: &PaywalletContext, logger: &Option<LoggingService>) -> Result<()> {
    log_event(logger, LogEvent::new("screen_opened").with_screen("admin_auth"));

    let email: String = Input::new()
        .with_prompt("Admin email")
        .default(ctx.config.admin_email.clone())
        .interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;

    output::processing("Signing in...", 1000);
    let admin = match ctx.admin_service.login(&email, &password) {
        Ok(admin) => admin,
        Err(e) => {
            output::error(&e.to_string());
            log_event(
                logger,
                LogEvent::new("admin_login_failed").with_error(e.to_string()),
            );
            return Ok(());
        }
    };

    output::success("Admin login successful");
    admin_menu(ctx, &admin, logger)
}

fn admin_menu(
    ctx: &PaywalletContext,
    admin: &User,
    logger: &Option<LoggingService>,
) -> Result<()> {
    loop {
        let choice = Select::new()
            .with_prompt("Admin portal")
            .items(&[
                "Overview",
                "Users",
                "Review KYC",
                "Suspend user",
                "Reactivate user",
                "Update limits",
                "Action log",
                "Log out",
            ])
            .default(0)
            .interact()?;

        let screen = [
            "admin_overview",
            "admin_users",
            "admin_kyc",
            "admin_suspend",
            "admin_activate",
            "admin_limits",
            "admin_actions",
            "logout",
        ][choice];
        log_event(logger, LogEvent::new("screen_opened").with_screen(screen));

        let result = match choice {
            0 => super::admin::print_stats(ctx),
            1 => admin_users(ctx),
            2 => review_kyc(ctx, admin),
            3 => suspend_user(ctx, admin),
            4 => reactivate_user(ctx, admin),
            5 => update_limits(ctx, admin),
            6 => super::admin::print_actions(ctx, 20),
            _ => return Ok(()),
        };
        if let Err(e) = result {
            output::error(&e.to_string());
        }
    }
}

fn admin_users(ctx: &PaywalletContext) -> Result<()> {
    let users = ctx.account_service.users()?;
    super::users::print_user_table(&users);
    Ok(())
}

fn review_kyc(ctx: &PaywalletContext, admin: &User) -> Result<()> {
    let pending = ctx.kyc_service.pending_reviews()?;
    if pending.is_empty() {
        output::success("No submissions awaiting review");
        return Ok(());
    }

    let labels: Vec<String> = pending
        .iter()
        .map(|u| {
            format!(
                "{} (@{}) - {} {}",
                u.display_name,
                u.username,
                u.kyc_document_type
                    .map(|t| t.as_str())
                    .unwrap_or("document"),
                u.kyc_document_number.as_deref().unwrap_or("")
            )
        })
        .collect();
    let picked = Select::new()
        .with_prompt("Pending submissions")
        .items(&labels)
        .default(0)
        .interact()?;
    let user = &pending[picked];

    let decision = Select::new()
        .with_prompt("Decision")
        .items(&["Approve", "Reject", "Skip"])
        .default(0)
        .interact()?;

    match decision {
        0 => {
            if ctx.kyc_service.approve(user.id, admin)? {
                output::success(&format!("KYC approved for @{}", user.username));
            }
        }
        1 => {
            let reason: String = Input::new()
                .with_prompt("Rejection reason")
                .allow_empty(true)
                .interact_text()?;
            if ctx.kyc_service.reject(user.id, &reason, admin)? {
                output::success(&format!("KYC rejected for @{}", user.username));
            }
        }
        _ => {}
    }
    Ok(())
}

fn prompt_target(ctx: &PaywalletContext) -> Result<User> {
    let handle: String = Input::new().with_prompt("Username or email").interact_text()?;
    super::resolve_user(ctx, &handle)
}

fn suspend_user(ctx: &PaywalletContext, admin: &User) -> Result<()> {
    let user = prompt_target(ctx)?;
    let reason: String = Input::new()
        .with_prompt("Suspension reason")
        .allow_empty(true)
        .interact_text()?;

    if !Confirm::new()
        .with_prompt(format!("Suspend @{}?", user.username))
        .default(false)
        .interact()?
    {
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    if ctx.admin_service.suspend(user.id, &reason, admin)? {
        output::success(&format!("@{} suspended", user.username));
    } else {
        output::warning("Admin accounts cannot be suspended");
    }
    Ok(())
}

fn reactivate_user(ctx: &PaywalletContext, admin: &User) -> Result<()> {
    let user = prompt_target(ctx)?;
    if ctx.admin_service.activate(user.id, admin)? {
        output::success(&format!("@{} reactivated", user.username));
    } else {
        output::warning("Admin accounts cannot be moderated");
    }
    Ok(())
}

fn update_limits(ctx: &PaywalletContext, admin: &User) -> Result<()> {
    let user = prompt_target(ctx)?;
    let limits = &user.account_limits;

    let single: String = Input::new()
        .with_prompt("Single transaction limit")
        .default(limits.single_transaction_limit.to_string())
        .interact_text()?;
    let daily: String = Input::new()
        .with_prompt("Daily transaction limit")
        .default(limits.daily_transaction_limit.to_string())
        .interact_text()?;
    let monthly: String = Input::new()
        .with_prompt("Monthly transaction limit")
        .default(limits.monthly_transaction_limit.to_string())
        .interact_text()?;

    let new_limits = paywallet_core::AccountLimits::new(
        parse_amount(&daily)?,
        parse_amount(&monthly)?,
        parse_amount(&single)?,
    );
    ctx.admin_service.update_limits(user.id, new_limits, admin)?;
    output::success(&format!("Transaction limits updated for @{}", user.username));
    Ok(())
}
