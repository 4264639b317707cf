//! Project files CLI - Development file server
//!
//! # Main Commands
//!
//! ```bash
//! projectfiles serve                         # Start HTTP server (port 3000)
//! projectfiles serve --envelope flat         # Serve lists as {success, files}
//! projectfiles serve --token s3cret          # Require an exact bearer token
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! projectfiles list --project demo           # Print a project's stored files
//! ```

use clap::{Parser, Subcommand};
use projectfiles::{start_server, EnvelopeStyle, FileRecord, FileRegistry, ServerConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "projectfiles")]
#[command(about = "Development server for project file attachments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PROJECTFILES_PORT", default_value_t = projectfiles::DEFAULT_PORT)]
        port: u16,

        /// Directory where files are stored
        #[arg(short, long, env = "PROJECTFILES_DATA_DIR", default_value = projectfiles::DEFAULT_DATA_DIR)]
        data_dir: PathBuf,

        /// Shape of list responses
        #[arg(short, long, env = "PROJECTFILES_ENVELOPE", value_enum, default_value_t = EnvelopeStyle::Nested)]
        envelope: EnvelopeStyle,

        /// Bearer token clients must send (any token when unset)
        #[arg(short, long, env = "PROJECTFILES_TOKEN")]
        token: Option<String>,

        /// Base URL put in each file's `url` (default: http://localhost:<port>)
        #[arg(long, env = "PROJECTFILES_PUBLIC_URL")]
        public_url: Option<String>,
    },

    /// List the stored files of a project
    List {
        /// Project ID
        #[arg(short, long)]
        project: String,

        /// Directory where files are stored
        #[arg(short, long, env = "PROJECTFILES_DATA_DIR", default_value = projectfiles::DEFAULT_DATA_DIR)]
        data_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            data_dir,
            envelope,
            token,
            public_url,
        } => {
            let config = ServerConfig {
                port,
                data_dir,
                envelope,
                token: token.filter(|t| !t.trim().is_empty()),
                public_url: public_url.unwrap_or_else(|| ServerConfig::local_url(port)),
                ..ServerConfig::default()
            };
            start_server(config).await
        }

        Commands::List { project, data_dir } => cmd_list(&project, &data_dir),
    };

    if let Err(e) = result {
        tracing::error!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_list(project: &str, data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let registry = FileRegistry::open(data_dir)?;
    let files = registry.list(project);

    if files.is_empty() {
        println!("📭 No files for project {}", project);
        return Ok(());
    }

    println!("📁 {} file(s) for project {}:\n", files.len(), project);
    let base = ServerConfig::local_url(projectfiles::DEFAULT_PORT);
    for file in files {
        let record = FileRecord::from_stored(file, &base);
        println!("  {} - {} ({} bytes)", record.id, record.name, record.size);
        println!("     Type: {}", record.mime_type.as_deref().unwrap_or("unknown"));
        println!("     Created: {}", record.created_at);
    }

    Ok(())
}
