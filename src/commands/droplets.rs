use std::time::Duration;

use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::ApiClient;
use crate::config::Settings;
use crate::models::{CreateDropletRequest, Droplet};

#[derive(Debug, Subcommand)]
pub enum DropletsCommand {
    /// List all droplets
    List,
    /// Show details for a single droplet
    Get { id: u64 },
    /// Create a new droplet
    Create(CreateArgs),
    /// Delete a droplet (asks for confirmation)
    Delete { id: u64 },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Droplet name
    #[arg(short, long)]
    name: String,
    /// Region slug (e.g. nyc3)
    #[arg(short, long)]
    region: String,
    /// Size slug (e.g. s-1vcpu-1gb)
    #[arg(short, long)]
    size: String,
    /// Image slug or ID
    #[arg(short, long)]
    image: String,
    /// Tags to apply to the droplet
    #[arg(short, long, value_delimiter = ',')]
    tags: Vec<String>,
    /// SSH key IDs or fingerprints to install
    #[arg(long, value_delimiter = ',')]
    ssh_keys: Vec<String>,
    /// Cloud-init user data
    #[arg(long)]
    user_data: Option<String>,
}

pub fn run(cmd: DropletsCommand, settings: &Settings) -> Result<()> {
    let client = ApiClient::new(settings)?;
    match cmd {
        DropletsCommand::List => list(&client),
        DropletsCommand::Get { id } => get(&client, id),
        DropletsCommand::Create(args) => create(&client, args),
        DropletsCommand::Delete { id } => delete(&client, id),
    }
}

fn list(client: &ApiClient) -> Result<()> {
    let droplets = client.list_droplets()?;
    if droplets.is_empty() {
        println!("No droplets found");
        return Ok(());
    }

    println!(
        "{:<10} {:<20} {:<10} {:<14} {:<8} {:<16} {}",
        "ID", "NAME", "STATUS", "SIZE", "REGION", "IP", "CREATED"
    );
    for droplet in &droplets {
        let region = droplet
            .region
            .as_ref()
            .map(|r| r.slug.as_str())
            .unwrap_or("");
        println!(
            "{:<10} {:<20} {:<10} {:<14} {:<8} {:<16} {}",
            droplet.id,
            droplet.name,
            droplet.status,
            droplet.size_slug,
            region,
            public_ipv4(droplet),
            created_date(&droplet.created_at),
        );
    }
    Ok(())
}

fn get(client: &ApiClient, id: u64) -> Result<()> {
    let droplet = client.get_droplet(id)?;

    println!("Droplet Details:");
    println!("  ID: {}", droplet.id);
    println!("  Name: {}", droplet.name);
    println!("  Status: {}", droplet.status);
    println!("  Memory: {} MB", droplet.memory);
    println!("  VCPUs: {}", droplet.vcpus);
    println!("  Disk: {} GB", droplet.disk);
    println!("  Locked: {}", droplet.locked);
    println!("  Created: {}", droplet.created_at);

    if let Some(image) = &droplet.image {
        println!("  Image: {} ({})", image.name, image.distribution);
    }
    if let Some(size) = &droplet.size {
        println!("  Size: {} (${:.2}/month)", size.slug, size.price_monthly);
    }
    if let Some(region) = &droplet.region {
        println!("  Region: {} ({})", region.name, region.slug);
    }
    if let Some(networks) = &droplet.networks {
        println!("  Networks:");
        for net in &networks.v4 {
            println!("    {}: {}", net.kind, net.ip_address);
        }
        for net in &networks.v6 {
            println!("    {} (v6): {}", net.kind, net.ip_address);
        }
    }
    if !droplet.tags.is_empty() {
        println!("  Tags: {}", droplet.tags.join(", "));
    }
    Ok(())
}

fn create(client: &ApiClient, args: CreateArgs) -> Result<()> {
    let req = CreateDropletRequest {
        name: args.name,
        region: args.region,
        size: args.size,
        image: args.image,
        tags: args.tags,
        ssh_keys: args.ssh_keys,
        user_data: args.user_data.unwrap_or_default(),
        ..Default::default()
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Creating droplet...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    let result = client.create_droplet(&req);
    spinner.finish_and_clear();
    let droplet = result?;

    println!("Droplet created");
    println!("  ID: {}", droplet.id);
    println!("  Name: {}", droplet.name);
    println!("  Status: {}", droplet.status);
    Ok(())
}

fn delete(client: &ApiClient, id: u64) -> Result<()> {
    let confirmed = Confirm::new()
        .with_prompt(format!("Delete droplet {id}? This cannot be undone"))
        .default(false)
        .interact()?;
    if !confirmed {
        println!("Cancelled");
        return Ok(());
    }

    client.delete_droplet(id)?;
    println!("Droplet {id} deleted");
    Ok(())
}

fn public_ipv4(droplet: &Droplet) -> &str {
    droplet
        .networks
        .as_ref()
        .and_then(|nets| nets.v4.iter().find(|net| net.kind == "public"))
        .map(|net| net.ip_address.as_str())
        .unwrap_or("")
}

// Timestamps come back as RFC 3339; the table only needs the date part.
fn created_date(created_at: &str) -> &str {
    created_at.get(..10).unwrap_or(created_at)
}
