//! Users command - directory listing

use anyhow::Result;
use paywallet_core::User;

use super::get_context;
use crate::output;

pub fn run(search: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;

    let users: Vec<User> = match &search {
        Some(query) => {
            let query = query.to_lowercase();
            ctx.account_service
                .users()?
                .into_iter()
                .filter(|u| {
                    u.username.to_lowercase().contains(&query)
                        || u.display_name.to_lowercase().contains(&query)
                        || u.email.to_lowercase().contains(&query)
                })
                .collect()
        }
        None => ctx.account_service.users()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&users)?);
        return Ok(());
    }

    if users.is_empty() {
        output::info("No users found");
        return Ok(());
    }

    print_user_table(&users);
    Ok(())
}

pub fn print_user_table(users: &[User]) {
    let mut table = output::create_table();
    table.set_header(vec![
        "Username", "Name", "Email", "Balance", "KYC", "Risk", "Status",
    ]);
    for user in users {
        let status = if user.is_suspended {
            "suspended"
        } else if !user.is_active {
            "inactive"
        } else if user.is_admin {
            "admin"
        } else {
            "active"
        };
        table.add_row(vec![
            format!("@{}", user.username),
            user.display_name.clone(),
            user.email.clone(),
            output::format_money(user.wallet_balance),
            user.kyc_status.as_str().to_string(),
            user.risk_score.to_string(),
            status.to_string(),
        ]);
    }
    println!("{}", table);
}
