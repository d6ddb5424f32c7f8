//! Status command - platform overview

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let stats = ctx.stats_service.get_stats()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "PayWallet Platform Status".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Users", &stats.total_users.to_string()]);
    table.add_row(vec!["Active", &stats.active_users.to_string()]);
    table.add_row(vec!["Suspended", &stats.suspended_users.to_string()]);
    table.add_row(vec!["KYC verified", &stats.verified_users.to_string()]);
    table.add_row(vec!["KYC pending", &stats.pending_kyc.to_string()]);
    table.add_row(vec!["Transactions", &stats.total_transactions.to_string()]);
    table.add_row(vec![
        "Completed volume",
        &output::format_money(stats.total_volume),
    ]);
    println!("{}", table);
    println!();

    println!(
        "Average risk score: {:.1}  High risk users: {}",
        stats.average_risk_score, stats.high_risk_users
    );
    if stats.pending_kyc > 0 {
        output::warning(&format!(
            "{} user(s) awaiting KYC review - see 'pw admin kyc'",
            stats.pending_kyc
        ));
    }

    Ok(())
}
