use crate::output::{print_json, print_table};
use agentdesk_core::{
    client::ClientRecord,
    link::{self, DemoLink, LinkOptions},
};
use anyhow::Context;
use chrono::Utc;
use clap::Subcommand;
use std::path::Path;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum LinkSubcommand {
    /// Mint a demo link for a client
    Create {
        /// Client id
        client_id: Uuid,
        /// Days until the link expires
        #[arg(long, default_value = "7", conflicts_with = "never_expires")]
        expires_in_days: i64,
        /// Mint a link that never expires
        #[arg(long)]
        never_expires: bool,
        /// Per-call duration cap in seconds
        #[arg(long, default_value = "120")]
        max_duration: u32,
        /// Phone number callers dial to reach the demo agent
        #[arg(long)]
        phone: Option<String>,
    },
    /// List demo links
    List {
        /// Only links for this client
        #[arg(long)]
        client: Option<Uuid>,
    },
    /// Deactivate a link (kept on disk, no longer resolvable)
    Deactivate { id: Uuid },
    /// Delete a link
    Delete { id: Uuid },
    /// Resolve a slug to its client, as the demo page would
    Resolve { slug: String },
}

pub fn run(root: &Path, subcmd: LinkSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        LinkSubcommand::Create {
            client_id,
            expires_in_days,
            never_expires,
            max_duration,
            phone,
        } => create(
            root,
            client_id,
            if never_expires {
                None
            } else {
                Some(expires_in_days)
            },
            max_duration,
            phone,
            json,
        ),
        LinkSubcommand::List { client } => list(root, client, json),
        LinkSubcommand::Deactivate { id } => deactivate(root, id, json),
        LinkSubcommand::Delete { id } => delete(root, id, json),
        LinkSubcommand::Resolve { slug } => resolve(root, &slug, json),
    }
}

fn create(
    root: &Path,
    client_id: Uuid,
    expires_in_days: Option<i64>,
    max_duration_seconds: u32,
    demo_phone_number: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let client = ClientRecord::load(root, client_id)
        .with_context(|| format!("client '{client_id}' not found"))?;

    let link = DemoLink::create(
        root,
        &client,
        LinkOptions {
            expires_in_days,
            max_duration_seconds,
            demo_phone_number,
        },
    )
    .with_context(|| format!("failed to create link for '{}'", client.business_name))?;

    if json {
        print_json(&link)?;
    } else {
        println!("Created link: {} → {}", link.slug, client.business_name);
        match link.expires_at {
            Some(at) => println!("Expires: {}", at.format("%Y-%m-%d %H:%M UTC")),
            None => println!("Expires: never"),
        }
    }
    Ok(())
}

fn list(root: &Path, client: Option<Uuid>, json: bool) -> anyhow::Result<()> {
    let links = match client {
        Some(id) => DemoLink::for_client(root, id),
        None => DemoLink::list(root),
    }
    .context("failed to list links")?;

    if json {
        print_json(&links)?;
        return Ok(());
    }

    if links.is_empty() {
        println!("No demo links yet.");
        return Ok(());
    }

    let now = Utc::now();
    let rows: Vec<Vec<String>> = links
        .iter()
        .map(|l| {
            vec![
                l.slug.clone(),
                l.id.to_string(),
                format!("{:?}", l.validity_at(now)).to_lowercase(),
                l.usage_count.to_string(),
                match l.expires_at {
                    Some(at) => at.format("%Y-%m-%d").to_string(),
                    None => "never".to_string(),
                },
            ]
        })
        .collect();
    print_table(&["SLUG", "ID", "STATE", "USES", "EXPIRES"], rows);
    Ok(())
}

fn deactivate(root: &Path, id: Uuid, json: bool) -> anyhow::Result<()> {
    let mut link = DemoLink::find(root, id)
        .context("failed to read link")?
        .with_context(|| format!("link '{id}' not found"))?;

    link.deactivate();
    link.save(root).context("failed to save link")?;

    if json {
        print_json(&link)?;
    } else {
        println!("Deactivated link: {}", link.slug);
    }
    Ok(())
}

fn delete(root: &Path, id: Uuid, json: bool) -> anyhow::Result<()> {
    DemoLink::delete(root, id).with_context(|| format!("failed to delete link '{id}'"))?;

    if json {
        print_json(&serde_json::json!({ "deleted": id }))?;
    } else {
        println!("Deleted link: {id}");
    }
    Ok(())
}

fn resolve(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let (link, client) = link::resolve(root, slug, Utc::now())?;

    // Usage tracking is best-effort; a failed bump never blocks the demo.
    if let Err(e) = link::increment_usage(root, slug) {
        tracing::warn!("failed to record usage for '{slug}': {e}");
    }

    if json {
        print_json(&serde_json::json!({
            "link": link,
            "client": client,
        }))?;
        return Ok(());
    }

    println!("Demo: {} ({})", client.business_name, client.industry);
    println!("Max call duration: {}s", link.max_duration_seconds);
    if let Some(ref phone) = link.demo_phone_number {
        println!("Dial: {phone}");
    }
    Ok(())
}
