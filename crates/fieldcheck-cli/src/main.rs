mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fieldcheck",
    about = "Resolve actor references and validate request payloads against configured schemas",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .fieldcheck/)
    #[arg(long, global = true, env = "FIELDCHECK_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default .fieldcheck/config.yaml
    Init,

    /// Resolve actor tokens such as `user:1`, `team:3` or a bare user id
    Resolve {
        /// Tokens to resolve
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Validate a JSON payload against a schema
    Validate {
        /// Schema name from config
        #[arg(long, short = 's', default_value = fieldcheck_core::config::DEFAULT_SCHEMA)]
        schema: String,

        /// Payload file (`-` or omitted reads stdin)
        input: Option<PathBuf>,
    },

    /// Inspect and lint the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Start the HTTP validation server
    Serve {
        /// Port to listen on (overrides config; 0 = OS-assigned)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Resolve { tokens } => cmd::resolve::run(&tokens, cli.json),
        Commands::Validate { schema, input } => {
            cmd::validate::run(&root, &schema, input.as_deref(), cli.json)
        }
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
        Commands::Serve { port, host } => cmd::serve::run(&root, host, port),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
