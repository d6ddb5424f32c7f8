//! Kyc command - identity verification from the user side

use anyhow::{bail, Result};
use clap::Subcommand;
use colored::Colorize;
use paywallet_core::domain::DocumentType;

use super::{get_context, resolve_user};
use crate::output;

#[derive(Subcommand)]
pub enum KycCommands {
    /// Submit identity documents for verification
    Submit {
        /// Username or email
        #[arg(long)]
        user: String,
        /// Document type (passport, drivers_license, national_id, utility_bill, bank_statement, other)
        #[arg(long)]
        document_type: String,
        /// Document number
        #[arg(long)]
        document_number: String,
        /// Document image URL
        #[arg(long)]
        document_url: Option<String>,
    },
    /// Show a user's verification state and documents
    Status {
        /// Username or email
        #[arg(long)]
        user: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: KycCommands) -> Result<()> {
    match command {
        KycCommands::Submit {
            user,
            document_type,
            document_number,
            document_url,
        } => run_submit(&user, &document_type, &document_number, document_url.as_deref()),
        KycCommands::Status { user, json } => run_status(&user, json),
    }
}

fn run_submit(
    user: &str,
    document_type: &str,
    document_number: &str,
    document_url: Option<&str>,
) -> Result<()> {
    let ctx = get_context()?;
    let user = resolve_user(&ctx, user)?;
    let Some(document_type) = DocumentType::parse(document_type) else {
        bail!(
            "Unknown document type '{}' (use passport, drivers_license, national_id, utility_bill, bank_statement, or other)",
            document_type
        );
    };

    output::processing("Uploading documents...", 1500);

    let doc = ctx
        .kyc_service
        .submit(user.id, document_type, document_number, document_url)?;

    output::success("KYC documents submitted for verification!");
    println!("  Document: {} ({})", doc.document_type.as_str(), doc.id);
    println!("  Status: {}", doc.status.as_str());
    Ok(())
}

fn run_status(user: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user = resolve_user(&ctx, user)?;
    let docs = ctx.kyc_service.documents_for_user(user.id)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "kycStatus": user.kyc_status,
                "documents": docs,
            }))?
        );
        return Ok(());
    }

    println!(
        "{} {}",
        "KYC status:".bold(),
        user.kyc_status.as_str()
    );
    if let Some(reason) = &user.kyc_rejection_reason {
        output::warning(&format!("Rejection reason: {}", reason));
    }

    if docs.is_empty() {
        output::info("No documents uploaded");
        return Ok(());
    }

    println!();
    let mut table = output::create_table();
    table.set_header(vec!["Uploaded", "Type", "Number", "Status"]);
    for doc in &docs {
        table.add_row(vec![
            output::format_date(doc.uploaded_at),
            doc.document_type.as_str().to_string(),
            doc.document_number.clone().unwrap_or_else(|| "-".to_string()),
            doc.status.as_str().to_string(),
        ]);
    }
    println!("{}", table);

    Ok(())
}
