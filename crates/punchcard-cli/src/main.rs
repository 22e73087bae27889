mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, render::RenderArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "punchcard",
    about = "Fill in a task card and render it as an XML prompt for a coding assistant",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .punchcard/ or .git/)
    #[arg(long, global = true, env = "PUNCHCARD_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .punchcard/config.yaml in the current project
    Init,

    /// List the available card types
    List,

    /// Show the fields a card type accepts
    Fields {
        /// Card type (e.g. bug_fix, feature_request)
        card: String,
    },

    /// Fill in a card and render it
    Render(RenderArgs),

    /// Print a card with every field left at its default
    Defaults {
        /// Card type (e.g. bug_fix, feature_request)
        card: String,
    },

    /// Inspect and validate the project configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "resolved project root");

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::List => cmd::list::run(cli.json),
        Commands::Fields { card } => cmd::fields::run(&card, cli.json),
        Commands::Render(args) => cmd::render::run(&root, args, cli.json),
        Commands::Defaults { card } => cmd::render::defaults(&card, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
