//! PayWallet CLI - peer-to-peer wallet demo in your terminal
//!
//! Every invocation starts from the seeded in-memory demo store and
//! discards it on exit; `pw session` keeps state alive for an interactive
//! session instead.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{
    admin, get_logger, history, kyc, log_event, profile, register, request, send, session, status,
    topup, users, withdraw,
};
use paywallet_core::services::{EntryPoint, LogEvent};

/// PayWallet - peer-to-peer wallet demo
#[derive(Parser)]
#[command(name = "pw", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show platform status and summary
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List users in the directory
    Users {
        /// Filter by username, name or email
        #[arg(long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new wallet account
    Register {
        /// Username (prompted if omitted)
        #[arg(long)]
        username: Option<String>,
        /// Display name (prompted if omitted)
        #[arg(long)]
        name: Option<String>,
        /// Email address (prompted if omitted)
        #[arg(long)]
        email: Option<String>,
        /// Phone number
        #[arg(long)]
        phone: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send money to another user
    Send {
        /// Sending user (username or email)
        #[arg(long)]
        from: String,
        /// Receiving user (username or email)
        #[arg(long)]
        to: String,
        /// Amount in dollars
        #[arg(long)]
        amount: String,
        /// Description shown in history
        #[arg(long)]
        message: Option<String>,
        /// Skip confirmation prompt
        #[arg(long, short)]
        yes: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Request money from another user
    Request {
        /// Requesting user (username or email)
        #[arg(long)]
        from: String,
        /// User to request from (username or email)
        #[arg(long)]
        to: String,
        /// Amount in dollars
        #[arg(long)]
        amount: String,
        /// Note attached to the request
        #[arg(long)]
        message: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add money to a wallet
    Topup {
        /// Username or email
        #[arg(long)]
        user: String,
        /// Amount in dollars
        #[arg(long)]
        amount: String,
        /// Payment method (credit_card, bank_transfer)
        #[arg(long, default_value = "credit_card")]
        method: String,
        /// External payment reference (repeats are rejected)
        #[arg(long)]
        reference: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Withdraw money from a wallet
    Withdraw {
        /// Username or email
        #[arg(long)]
        user: String,
        /// Amount in dollars
        #[arg(long)]
        amount: String,
        /// Payment method (credit_card, bank_transfer)
        #[arg(long, default_value = "bank_transfer")]
        method: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a user's transaction history
    History {
        /// Username or email
        #[arg(long)]
        user: String,
        /// Filter (all, transfers, wallet)
        #[arg(long, default_value = "all")]
        filter: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and update profiles
    Profile {
        #[command(subcommand)]
        command: profile::ProfileCommands,
    },

    /// Identity verification
    Kyc {
        #[command(subcommand)]
        command: kyc::KycCommands,
    },

    /// Administrative console (requires the demo admin credentials)
    Admin {
        /// Admin email (defaults to the configured demo admin)
        #[arg(long)]
        email: Option<String>,
        /// Admin password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,
        #[command(subcommand)]
        command: admin::AdminCommands,
    },

    /// Interactive session (landing, sign-in, dashboard, admin portal)
    Session,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let logger = get_logger(EntryPoint::Cli);

    let command_name = match &cli.command {
        Commands::Status { .. } => "status",
        Commands::Users { .. } => "users",
        Commands::Register { .. } => "register",
        Commands::Send { .. } => "send",
        Commands::Request { .. } => "request",
        Commands::Topup { .. } => "topup",
        Commands::Withdraw { .. } => "withdraw",
        Commands::History { .. } => "history",
        Commands::Profile { .. } => "profile",
        Commands::Kyc { .. } => "kyc",
        Commands::Admin { .. } => "admin",
        Commands::Session => "session",
    };
    log_event(&logger, LogEvent::new("command_executed").with_command(command_name));

    let result = match cli.command {
        Commands::Status { json } => status::run(json),
        Commands::Users { search, json } => users::run(search, json),
        Commands::Register {
            username,
            name,
            email,
            phone,
            json,
        } => register::run(username, name, email, phone, json),
        Commands::Send {
            from,
            to,
            amount,
            message,
            yes,
            json,
        } => send::run(&from, &to, &amount, message, yes, json),
        Commands::Request {
            from,
            to,
            amount,
            message,
            json,
        } => request::run(&from, &to, &amount, message, json),
        Commands::Topup {
            user,
            amount,
            method,
            reference,
            json,
        } => topup::run(&user, &amount, &method, reference, json),
        Commands::Withdraw {
            user,
            amount,
            method,
            json,
        } => withdraw::run(&user, &amount, &method, json),
        Commands::History { user, filter, json } => history::run(&user, &filter, json),
        Commands::Profile { command } => profile::run(command),
        Commands::Kyc { command } => kyc::run(command),
        Commands::Admin {
            email,
            password,
            command,
        } => admin::run(email, password, command),
        Commands::Session => session::run(),
    };

    if let Err(e) = &result {
        log_event(
            &logger,
            LogEvent::new("command_failed")
                .with_command(command_name)
                .with_error(e.to_string()),
        );
    }
    result
}
