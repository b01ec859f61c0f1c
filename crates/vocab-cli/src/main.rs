//! vocab CLI — define, collect, and quiz yourself on vocabulary words.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};

use vocab_sources::config::load_config_from;

mod commands;
mod console;

#[derive(Parser)]
#[command(
    name = "vocab",
    version,
    about = "Define, collect, and quiz yourself on vocabulary words",
    after_help = "Any other first argument is looked up, and added to the list if a definition is found."
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a word to the list without looking it up
    #[command(visible_alias = "a")]
    Add {
        /// Word or phrase
        #[arg(required = true, num_args = 1..)]
        word: Vec<String>,
    },

    /// Remove a word from the list (a backup is written first)
    #[command(visible_alias = "rm")]
    Remove {
        /// Word or phrase, in lower case
        #[arg(required = true, num_args = 1..)]
        word: Vec<String>,
    },

    /// List the words in the list
    #[command(visible_alias = "ls")]
    List,

    /// Print the definition of a word
    #[command(visible_alias = "d")]
    Define {
        /// Word or phrase
        #[arg(required = true, num_args = 1..)]
        word: Vec<String>,
    },

    /// Create a user definition file for a word and open it in an editor
    #[command(name = "user-def", visible_alias = "u")]
    UserDef {
        /// Word or phrase
        #[arg(required = true, num_args = 1..)]
        word: Vec<String>,
    },

    /// Quiz yourself on random words from the list
    #[command(visible_alias = "q")]
    Quiz {
        /// Number of words (default: the whole list)
        count: Option<usize>,
    },

    /// Create the word list and user definition directory
    Init,

    #[command(external_subcommand)]
    Lookup(Vec<String>),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vocab=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config_from(cli.config.as_deref())?;

    match cli.command {
        Commands::Add { word } => commands::list::add(&config, &word.join(" ")),
        Commands::Remove { word } => commands::list::remove(&config, &word.join(" ")),
        Commands::List => commands::list::list(&config),
        Commands::Define { word } => commands::define::execute(&config, &word.join(" ")).await,
        Commands::UserDef { word } => commands::user_def::execute(&config, &word.join(" ")),
        Commands::Quiz { count } => commands::quiz::execute(&config, count).await,
        Commands::Init => commands::init::execute(&config),
        Commands::Lookup(words) => {
            commands::define::lookup_and_add(&config, &words.join(" ")).await
        }
    }
}
