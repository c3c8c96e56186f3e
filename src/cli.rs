//! Notehub - command line client
//!
//! Thin CLI over the library: one subcommand per API operation, credentials
//! from flags or the environment.

use anyhow::Result;
use clap::{Parser, Subcommand};
use notehub::{client::DEFAULT_BASE_URL, Credentials, Notehub};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "notehub")]
#[command(about = "CLI for the Notehub.org note API")]
struct Cli {
    /// Publisher ID issued at notehub.org/api
    #[arg(long, env = "NOTEHUB_PID")]
    pid: String,

    /// Publisher secret key issued alongside the PID
    #[arg(long, env = "NOTEHUB_PSK", hide_env_values = true)]
    psk: String,

    /// API base URL
    #[arg(long, env = "NOTEHUB_URL", default_value = DEFAULT_BASE_URL)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a note
    Get {
        /// Note ID
        id: String,
    },

    /// Publish a note
    Create {
        /// Note text
        text: String,

        /// Password allowing later updates
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Replace the text of a password-protected note
    Update {
        /// Note ID
        id: String,

        /// Replacement text
        text: String,

        /// Password the note was created with
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,notehub=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let client = Notehub::with_base_url(Credentials::new(cli.pid, cli.psk)?, cli.server);

    let note = match cli.command {
        Commands::Get { id } => client.get_note(&id).await?,
        Commands::Create { text, password } => {
            client.create_note(&text, password.as_deref()).await?
        }
        Commands::Update { id, text, password } => {
            client.update_note(&id, &text, &password).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&note)?);
    Ok(())
}
