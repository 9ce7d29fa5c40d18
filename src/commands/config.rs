use anyhow::{bail, Result};
use clap::Subcommand;

use crate::config::Settings;

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show configuration value(s)
    Get {
        /// `token` or `base-url`; omit to show everything
        key: Option<String>,
    },
    /// Set a configuration value and persist it
    Set {
        /// `token` or `base-url`
        key: String,
        value: String,
    },
}

pub fn run(cmd: ConfigCommand, mut settings: Settings) -> Result<()> {
    match cmd {
        ConfigCommand::Get { key: None } => {
            println!("Configuration:");
            println!("  token: {}", mask_token(&settings.token));
            println!("  base-url: {}", settings.base_url);
        }
        ConfigCommand::Get { key: Some(key) } => match key.as_str() {
            "token" => println!("token: {}", mask_token(&settings.token)),
            "base-url" => println!("base-url: {}", settings.base_url),
            other => bail!("unknown config key: {other}"),
        },
        ConfigCommand::Set { key, value } => {
            match key.as_str() {
                "token" => settings.token = value.clone(),
                "base-url" => settings.base_url = value.clone(),
                other => bail!("unknown config key: {other}"),
            }
            settings.save()?;
            println!("Configuration updated: {key} = {value}");
        }
    }
    Ok(())
}

// Never echo the full token back; it is a secret.
fn mask_token(token: &str) -> String {
    if token.is_empty() {
        return "<not set>".to_string();
    }
    if token.len() <= 8 {
        return "***".to_string();
    }
    format!("{}...{}", &token[..4], &token[token.len() - 4..])
}
