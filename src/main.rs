//! reframe CLI - Guided CBT reflection sessions with a local journal.

use clap::{Parser, Subcommand};
use reframe::cli;
use std::process::ExitCode;

/// Get the version string.
///
/// - Release builds (on a git tag): "0.1.0"
/// - Development builds: "0.1.0-dev (abc1234)"
/// - Dirty working directory: "0.1.0-dev (abc1234-dirty)"
fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("REFRAME_GIT_HASH");
    const IS_RELEASE: &str = env!("REFRAME_IS_RELEASE");

    // Use a static to avoid repeated allocations
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            VERSION.to_string()
        } else {
            format!("{VERSION}-dev ({GIT_HASH})")
        }
    })
}

#[derive(Parser)]
#[command(name = "reframe")]
#[command(author, version = version(), about = "Guided CBT reflection sessions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive reflection session.
    Start {
        /// Run the crisis-oriented emergency flow.
        #[arg(long)]
        emergency: bool,

        /// Open the session by echoing back an earlier reflection.
        #[arg(long)]
        quote: Option<String>,
    },

    /// List saved journal entries.
    List {
        /// List the emergency journal instead of the reframing journal.
        #[arg(long)]
        emergency: bool,

        /// Maximum number of entries to show. Defaults to 20.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one journal entry in full.
    Show {
        /// Entry id (from `reframe list`).
        id: i64,

        /// Look in the emergency journal instead of the reframing journal.
        #[arg(long)]
        emergency: bool,
    },

    /// Delete saved journal entries.
    Clean {
        /// Clean the emergency journal instead of the reframing journal.
        #[arg(long)]
        emergency: bool,

        /// Clean both journals.
        #[arg(long)]
        all: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Start { emergency, quote } => cli::start::run(emergency, quote.as_deref()),
        Commands::List { emergency, limit } => cli::list::run(emergency, limit),
        Commands::Show { id, emergency } => cli::show::run(id, emergency),
        Commands::Clean { emergency, all } => cli::clean::run(emergency, all),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("reframe: error: {e}");
            ExitCode::FAILURE
        }
    }
}
