mod categories;
mod consolidate;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "skillet")]
#[command(about = "Skillet developer tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Consolidate a JSON file of scheduled recipe plans into a shopping list
    Consolidate {
        /// Path to a JSON array of recipe plans
        plan: PathBuf,
    },
    /// Print an audit CSV of shopping categories for a list of ingredients
    Categories {
        /// File with one ingredient name per line (stdin if omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Consolidate { plan } => {
            consolidate::run(&plan)?;
        }
        Commands::Categories { input } => {
            categories::run(input.as_deref())?;
        }
    }

    Ok(())
}
