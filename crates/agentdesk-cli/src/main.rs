mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{client::ClientSubcommand, link::LinkSubcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "agentdesk",
    about = "Voice-agent client onboarding — manage clients, demo artifacts, and demo links",
    version,
    propagate_version = true
)]
struct Cli {
    /// Workspace root (default: auto-detect from .agentdesk/ or .git/)
    #[arg(long, global = true, env = "AGENTDESK_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize an agentdesk workspace in the current project
    Init,

    /// Manage client records
    Client {
        #[command(subcommand)]
        subcommand: ClientSubcommand,
    },

    /// Manage time-boxed demo links
    Link {
        #[command(subcommand)]
        subcommand: LinkSubcommand,
    },

    /// Write a client's artifact bundle to a directory
    Export {
        /// Client id
        id: Uuid,

        /// Output directory (created if missing)
        #[arg(long, default_value = "export")]
        out: PathBuf,
    },

    /// List the industries with built-in defaults
    Industries,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Client { subcommand } => cmd::client::run(&root, subcommand, cli.json),
        Commands::Link { subcommand } => cmd::link::run(&root, subcommand, cli.json),
        Commands::Export { id, out } => cmd::export::run(&root, id, &out, cli.json),
        Commands::Industries => cmd::client::industries(cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
