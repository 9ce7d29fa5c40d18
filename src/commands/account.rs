use anyhow::Result;
use clap::Subcommand;

use crate::api::ApiClient;
use crate::config::Settings;

#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// Show account information
    Info,
}

pub fn run(cmd: AccountCommand, settings: &Settings) -> Result<()> {
    match cmd {
        AccountCommand::Info => info(settings),
    }
}

fn info(settings: &Settings) -> Result<()> {
    let client = ApiClient::new(settings)?;
    let account = client.get_account()?;

    println!("Account Information:");
    println!("  Email: {}", account.email);
    println!("  UUID: {}", account.uuid);
    println!("  Status: {}", account.status);
    if !account.status_message.is_empty() {
        println!("  Status Message: {}", account.status_message);
    }
    println!("  Email Verified: {}", account.email_verified);
    println!("  Droplet Limit: {}", account.droplet_limit);
    println!("  Floating IP Limit: {}", account.floating_ip_limit);
    println!("  Volume Limit: {}", account.volume_limit);
    if let Some(team) = &account.team {
        println!("  Team: {} ({})", team.name, team.uuid);
    }
    Ok(())
}
