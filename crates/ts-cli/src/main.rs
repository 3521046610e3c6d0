//! CLI frontend for the Tablespin random-table generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tablespin",
    about = "Tablespin — random sentences from nested table templates",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project directory with sample tables and templates
    Init {
        /// Name of the project to create
        name: String,
    },

    /// Render a template into one or more sentences
    Generate {
        /// Template string; defaults to the first stored template
        template: Option<String>,

        /// Number of sentences to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Project directory containing templates.json and tables/
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Roll directly on a named table
    Roll {
        /// Table name (file stem under tables/)
        name: String,

        /// Number of rolls
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Project directory containing tables/
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// List available tables
    Tables {
        /// Project directory containing tables/
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// List stored templates
    Templates {
        /// Project directory containing templates.json
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Validate every table in the project
    Check {
        /// Project directory containing tables/
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { name } => commands::init::run(&name),
        Commands::Generate {
            template,
            count,
            seed,
            dir,
        } => commands::generate::run(&dir, template.as_deref(), count, seed),
        Commands::Roll {
            name,
            count,
            seed,
            dir,
        } => commands::roll::run(&dir, &name, count, seed),
        Commands::Tables { dir } => commands::tables::run(&dir),
        Commands::Templates { dir } => commands::templates::run(&dir),
        Commands::Check { dir } => commands::check::run(&dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
