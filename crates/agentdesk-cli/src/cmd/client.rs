use crate::output::{print_json, print_table};
use agentdesk_core::{
    client::{ClientProfile, ClientRecord},
    defaults,
    intake::ScrapedFields,
    lifecycle,
    link::DemoLink,
    prompts,
    types::{AfterHoursGoal, Tone},
};
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum ClientSubcommand {
    /// Create a new client record (draft)
    Create {
        /// Business name
        name: String,
        #[arg(long)]
        industry: String,
        #[arg(long)]
        service_area: String,
        /// Service offered (repeatable)
        #[arg(long = "service")]
        services: Vec<String>,
        #[arg(long)]
        website_url: Option<String>,
        /// Conversation tone (professional, friendly, casual, formal)
        #[arg(long)]
        tone: Option<Tone>,
        /// After-hours goal (lead_capture, voicemail, emergency_transfer)
        #[arg(long)]
        goal: Option<AfterHoursGoal>,
        /// JSON file of scraped website fields to fold into the profile
        #[arg(long)]
        scraped: Option<std::path::PathBuf>,
    },
    /// Create from industry defaults and generate demo artifacts in one step
    Quick {
        name: String,
        industry: String,
        service_area: String,
    },
    /// Edit profile fields in place; status and artifacts are untouched
    /// until the next generate
    Edit {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        service_area: Option<String>,
        /// Replacement service list (repeatable; omit to keep current)
        #[arg(long = "service")]
        services: Vec<String>,
        #[arg(long)]
        website_url: Option<String>,
        /// Conversation tone (professional, friendly, casual, formal)
        #[arg(long)]
        tone: Option<Tone>,
        /// After-hours goal (lead_capture, voicemail, emergency_transfer)
        #[arg(long)]
        goal: Option<AfterHoursGoal>,
        /// JSON file of scraped website fields to fold into the profile
        #[arg(long)]
        scraped: Option<std::path::PathBuf>,
    },
    /// List all clients
    List,
    /// Show client details
    Show { id: Uuid },
    /// Generate (or regenerate) demo artifacts
    Generate { id: Uuid },
    /// Mark a demo-ready client as approved
    Approve { id: Uuid },
    /// Regenerate production artifacts for an approved client
    GenerateProduction { id: Uuid },
    /// Move an approved client to production without touching artifacts
    Promote { id: Uuid },
    /// Publish to production: store deployment identifiers, generate
    /// production artifacts, move to production
    Publish {
        id: Uuid,
        #[arg(long)]
        voice_id: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Print the production install checklist for an approved client
    Checklist { id: Uuid },
    /// Delete a client record
    Delete {
        id: Uuid,
        /// Also delete the client's demo links
        #[arg(long)]
        purge_links: bool,
    },
}

pub fn run(root: &Path, subcmd: ClientSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ClientSubcommand::Create {
            name,
            industry,
            service_area,
            services,
            website_url,
            tone,
            goal,
            scraped,
        } => create(
            root,
            &name,
            &industry,
            &service_area,
            services,
            website_url,
            tone,
            goal,
            scraped.as_deref(),
            json,
        ),
        ClientSubcommand::Quick {
            name,
            industry,
            service_area,
        } => quick(root, &name, &industry, &service_area, json),
        ClientSubcommand::Edit {
            id,
            name,
            industry,
            service_area,
            services,
            website_url,
            tone,
            goal,
            scraped,
        } => edit(
            root,
            id,
            name,
            industry,
            service_area,
            services,
            website_url,
            tone,
            goal,
            scraped.as_deref(),
            json,
        ),
        ClientSubcommand::List => list(root, json),
        ClientSubcommand::Show { id } => show(root, id, json),
        ClientSubcommand::Generate { id } => {
            mutate(root, id, json, "Demo artifacts generated", |c| {
                lifecycle::generate_demo_artifacts(c)
            })
        }
        ClientSubcommand::Approve { id } => {
            mutate(root, id, json, "Client approved", lifecycle::approve)
        }
        ClientSubcommand::GenerateProduction { id } => {
            mutate(root, id, json, "Production artifacts generated", |c| {
                lifecycle::generate_production_artifacts(c)
            })
        }
        ClientSubcommand::Promote { id } => mutate(
            root,
            id,
            json,
            "Client promoted to production",
            lifecycle::promote_to_production,
        ),
        ClientSubcommand::Publish {
            id,
            voice_id,
            phone,
        } => mutate(root, id, json, "Client published to production", |c| {
            lifecycle::publish(c, &voice_id, phone.as_deref())
        }),
        ClientSubcommand::Checklist { id } => checklist(root, id, json),
        ClientSubcommand::Delete { id, purge_links } => delete(root, id, purge_links, json),
    }
}

#[allow(clippy::too_many_arguments)]
fn create(
    root: &Path,
    name: &str,
    industry: &str,
    service_area: &str,
    services: Vec<String>,
    website_url: Option<String>,
    tone: Option<Tone>,
    goal: Option<AfterHoursGoal>,
    scraped: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let d = defaults::for_industry(industry);

    let mut profile = ClientProfile::new(name, industry, service_area);
    profile.services = services;
    profile.tone = tone.unwrap_or(d.tone);
    profile.after_hours_goal = goal.unwrap_or(d.after_hours_goal);
    profile.hours = d.hours();
    profile.website_url = website_url;

    // Explicit flags win, then scraped fields, then the industry table.
    if let Some(path) = scraped {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let fields: ScrapedFields =
            serde_json::from_str(&data).context("failed to parse scraped fields")?;
        fields.apply_to(&mut profile);
    }
    if profile.services.is_empty() {
        profile.services = d.services.iter().map(|s| s.to_string()).collect();
    }

    let client = ClientRecord::create(root, profile)
        .with_context(|| format!("failed to create client '{name}'"))?;

    if json {
        print_json(&client)?;
    } else {
        println!("Created client: {} — {}", client.id, client.business_name);
        println!("Next: agentdesk client generate {}", client.id);
    }
    Ok(())
}

/// Field-level edit: flags override the stored profile, everything else is
/// carried over unchanged. The status stays put; a follow-up `generate`
/// refreshes the artifacts against the edited profile.
#[allow(clippy::too_many_arguments)]
fn edit(
    root: &Path,
    id: Uuid,
    name: Option<String>,
    industry: Option<String>,
    service_area: Option<String>,
    services: Vec<String>,
    website_url: Option<String>,
    tone: Option<Tone>,
    goal: Option<AfterHoursGoal>,
    scraped: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let mut client =
        ClientRecord::load(root, id).with_context(|| format!("client '{id}' not found"))?;

    let mut profile = ClientProfile {
        business_name: name.unwrap_or_else(|| client.business_name.clone()),
        industry: industry.unwrap_or_else(|| client.industry.clone()),
        services: if services.is_empty() {
            client.services.clone()
        } else {
            services
        },
        service_area: service_area.unwrap_or_else(|| client.service_area.clone()),
        website_url: website_url.or_else(|| client.website_url.clone()),
        hours: client.hours.clone(),
        after_hours_goal: goal.unwrap_or(client.after_hours_goal),
        tone: tone.unwrap_or(client.tone),
        transfer_rules: client.transfer_rules.clone(),
        website: client.website.clone(),
    };

    if let Some(path) = scraped {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let fields: ScrapedFields =
            serde_json::from_str(&data).context("failed to parse scraped fields")?;
        fields.apply_to(&mut profile);
    }

    client.apply_profile(profile);
    client.save(root).context("failed to save client")?;

    if json {
        print_json(&client)?;
    } else {
        println!("Updated client: {} — {}", client.id, client.business_name);
        println!("Next: agentdesk client generate {}", client.id);
    }
    Ok(())
}

fn quick(
    root: &Path,
    name: &str,
    industry: &str,
    service_area: &str,
    json: bool,
) -> anyhow::Result<()> {
    if !agentdesk_core::paths::is_initialized(root) {
        anyhow::bail!("not initialized: run 'agentdesk init'");
    }
    let client = lifecycle::quick_create(name, industry, service_area)
        .with_context(|| format!("failed to quick-create client '{name}'"))?;
    client.save(root).context("failed to save client")?;

    if json {
        print_json(&client)?;
    } else {
        println!(
            "Created client: {} — {} ({})",
            client.id, client.business_name, client.status
        );
        println!("Next: agentdesk link create {}", client.id);
    }
    Ok(())
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let clients = ClientRecord::list(root).context("failed to list clients")?;

    if json {
        let summaries: Vec<_> = clients
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.id,
                    "business_name": c.business_name,
                    "industry": c.industry,
                    "status": c.status.to_string(),
                    "created_at": c.created_at,
                })
            })
            .collect();
        print_json(&summaries)?;
        return Ok(());
    }

    if clients.is_empty() {
        println!("No clients yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = clients
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.status.to_string(),
                c.industry.clone(),
                c.business_name.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "STATUS", "INDUSTRY", "BUSINESS"], rows);
    Ok(())
}

fn show(root: &Path, id: Uuid, json: bool) -> anyhow::Result<()> {
    let client =
        ClientRecord::load(root, id).with_context(|| format!("client '{id}' not found"))?;

    if json {
        print_json(&client)?;
        return Ok(());
    }

    println!("Client:   {} — {}", client.id, client.business_name);
    println!("Industry: {}", client.industry);
    println!("Area:     {}", client.service_area);
    println!("Status:   {}", client.status);
    println!("Tone:     {}", client.tone);
    println!("Goal:     {}", client.after_hours_goal);
    if !client.services.is_empty() {
        println!("Services: {}", client.services.join(", "));
    }
    if let Some(ref url) = client.website_url {
        println!("Website:  {url}");
    }
    println!("Created:  {}", client.created_at.format("%Y-%m-%d %H:%M"));

    println!("\nArtifacts:");
    if !client.artifacts.has_demo() {
        println!("  (none generated)");
        return Ok(());
    }
    let present = |v: &Option<String>| if v.is_some() { "generated" } else { "-" };
    println!(
        "  demo_config               {}",
        present(&client.artifacts.demo_config)
    );
    println!(
        "  demo_system_prompt        {}",
        present(&client.artifacts.demo_system_prompt)
    );
    println!(
        "  client_test_instructions  {}",
        present(&client.artifacts.client_test_instructions)
    );
    println!(
        "  production_system_prompt  {}",
        present(&client.artifacts.production_system_prompt)
    );

    if let Some(ref details) = client.production_details {
        println!("\nProduction:");
        if let Some(at) = details.approved_at {
            println!("  approved_at:  {}", at.format("%Y-%m-%d %H:%M"));
        }
        if let Some(ref v) = details.voice_id {
            println!("  voice_id:     {v}");
        }
        if let Some(ref p) = details.phone_number {
            println!("  phone_number: {p}");
        }
    }

    Ok(())
}

/// Load, apply an operation, save, report. All single-client lifecycle
/// commands go through here.
fn mutate(
    root: &Path,
    id: Uuid,
    json: bool,
    message: &str,
    op: impl FnOnce(&mut ClientRecord) -> agentdesk_core::Result<()>,
) -> anyhow::Result<()> {
    let mut client =
        ClientRecord::load(root, id).with_context(|| format!("client '{id}' not found"))?;

    op(&mut client)?;
    client.save(root).context("failed to save client")?;

    if json {
        print_json(&client)?;
    } else {
        println!("{message}: {} ({})", client.business_name, client.status);
    }
    Ok(())
}

fn checklist(root: &Path, id: Uuid, json: bool) -> anyhow::Result<()> {
    let client =
        ClientRecord::load(root, id).with_context(|| format!("client '{id}' not found"))?;

    if !client.status.is_approved() {
        anyhow::bail!(
            "client '{}' is {}: the install checklist applies once a client is approved",
            client.business_name,
            client.status
        );
    }

    let text = prompts::production_checklist(&client);
    if json {
        print_json(&serde_json::json!({
            "client": client.id,
            "checklist": text,
        }))?;
    } else {
        println!("{text}");
    }
    Ok(())
}

fn delete(root: &Path, id: Uuid, purge_links: bool, json: bool) -> anyhow::Result<()> {
    let client =
        ClientRecord::load(root, id).with_context(|| format!("client '{id}' not found"))?;

    let purged = if purge_links {
        DemoLink::purge_for_client(root, id).context("failed to delete demo links")?
    } else {
        0
    };
    ClientRecord::delete(root, id).context("failed to delete client")?;

    if json {
        print_json(&serde_json::json!({
            "deleted": id,
            "business_name": client.business_name,
            "links_purged": purged,
        }))?;
    } else {
        println!("Deleted client: {} — {}", id, client.business_name);
        if purge_links {
            println!("Purged {purged} demo link(s)");
        }
    }
    Ok(())
}

pub fn industries(json: bool) -> anyhow::Result<()> {
    if json {
        let names: Vec<&str> = defaults::industries().collect();
        print_json(&names)?;
        return Ok(());
    }

    for name in defaults::industries() {
        let d = defaults::for_industry(name);
        println!("{name}  ({}, {})", d.tone, d.after_hours_goal);
    }
    Ok(())
}
